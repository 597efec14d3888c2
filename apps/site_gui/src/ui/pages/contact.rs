//! Contact page: a tall hero laid over a painted map backdrop, with the
//! company's coordinates on the left and the quote form card on the right.

use crossbeam_channel::Sender;
use eframe::egui;
use relay_client::Inquiry;
use site_content::company::COMPANY;
use site_content::pages::{
    CONTACT_EMAIL_HEADING, CONTACT_FORM, CONTACT_LOCATION_HEADING, CONTACT_PHONE_HEADING,
    CONTACT_SUBTITLE, CONTACT_TITLE,
};
use site_content::Route;

use crate::controller::form::{ContactFormController, SubmissionPhase};
use crate::relay_bridge::commands::RelayCommand;
use crate::ui::reveal::RevealSection;
use crate::ui::theme::{lighten_color, SitePalette};
use crate::ui::widgets::{self, InfoIcon};

pub struct ContactPage {
    info: RevealSection,
    form_wrapper: RevealSection,
    pub form: ContactFormController,
}

impl Default for ContactPage {
    fn default() -> Self {
        Self {
            info: RevealSection::new(),
            form_wrapper: RevealSection::new().with_delay_ms(200),
            form: ContactFormController::new(),
        }
    }
}

impl ContactPage {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        palette: &SitePalette,
        cmd_tx: &Sender<RelayCommand>,
    ) -> Option<Route> {
        let now = ui.ctx().input(|i| i.time);
        let submitting = self.form.is_submitting();
        let can_submit = self.form.can_submit();

        // The map is painted in after layout so it spans the whole hero.
        let backdrop = ui.painter().add(egui::Shape::Noop);
        let hero_min = (ui.ctx().screen_rect().height() - 220.0).max(440.0);

        let info = &mut self.info;
        let form_wrapper = &mut self.form_wrapper;
        let form = &mut self.form;
        let hero = egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 56))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(hero_min);
                widgets::content_column(ui, |ui| {
                    let gap = 32.0;
                    let left_w = ((ui.available_width() - gap) * 0.44).max(240.0);
                    let right_w = (ui.available_width() - gap - left_w).max(280.0);
                    ui.horizontal_top(|ui| {
                        ui.vertical(|ui| {
                            ui.set_width(left_w);
                            info.show(ui, |ui| info_column(ui, palette));
                        });
                        ui.add_space(gap);
                        ui.vertical(|ui| {
                            ui.set_width(right_w);
                            form_wrapper.show(ui, |ui| {
                                let card = widgets::card_frame(palette).show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    show_form(
                                        ui, palette, form, cmd_tx, now, submitting, can_submit,
                                    );
                                });
                                corner_accents(ui, palette, card.response.rect);
                            });
                        });
                    });
                });
            });

        ui.painter()
            .set(backdrop, map_backdrop(hero.response.rect, palette));
        None
    }
}

fn info_column(ui: &mut egui::Ui, palette: &SitePalette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(
            egui::RichText::new(CONTACT_TITLE)
                .color(palette.light_heading)
                .strong()
                .size(38.0),
        );
        ui.label(
            egui::RichText::new(".")
                .color(palette.accent)
                .strong()
                .size(38.0),
        );
    });
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(CONTACT_SUBTITLE)
            .color(palette.light_body)
            .size(15.0),
    );
    ui.add_space(26.0);

    info_block(ui, palette, InfoIcon::Location, CONTACT_LOCATION_HEADING, |ui| {
        for line in [
            COMPANY.street.to_owned(),
            COMPANY.city.to_owned(),
            format!("{}, {}", COMPANY.postal, COMPANY.country),
        ] {
            ui.label(egui::RichText::new(line).color(palette.light_body).size(13.0));
        }
    });
    ui.add_space(16.0);
    info_block(ui, palette, InfoIcon::Email, CONTACT_EMAIL_HEADING, |ui| {
        for email in [COMPANY.orders_email, COMPANY.inquiries_email] {
            ui.hyperlink_to(
                egui::RichText::new(email).color(palette.light_body).size(13.0),
                format!("mailto:{email}"),
            );
        }
    });
    ui.add_space(16.0);
    info_block(ui, palette, InfoIcon::Phone, CONTACT_PHONE_HEADING, |ui| {
        let digits: String = COMPANY
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        ui.hyperlink_to(
            egui::RichText::new(COMPANY.phone)
                .color(palette.light_body)
                .size(13.0),
            format!("tel:{digits}"),
        );
        ui.label(
            egui::RichText::new(COMPANY.toll_free)
                .color(palette.light_muted)
                .size(13.0),
        );
    });

    // Stands in for the embedded map tile.
    ui.add_space(20.0);
    ui.hyperlink_to(
        egui::RichText::new("Open in Google Maps").size(13.0),
        COMPANY.map_url,
    );
}

fn info_block(
    ui: &mut egui::Ui,
    palette: &SitePalette,
    icon: InfoIcon,
    heading: &str,
    body: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal_top(|ui| {
        widgets::info_icon(ui, palette, icon);
        ui.add_space(12.0);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(heading)
                    .color(palette.light_heading)
                    .strong()
                    .size(15.0),
            );
            ui.add_space(4.0);
            body(ui);
        });
    });
}

/// Street grid, location pin, and a dark wash for the hero to sit on.
fn map_backdrop(rect: egui::Rect, palette: &SitePalette) -> egui::Shape {
    let mut shapes = Vec::new();
    shapes.push(egui::Shape::rect_filled(
        rect,
        egui::CornerRadius::ZERO,
        palette.dark_card,
    ));

    let minor = egui::Stroke::new(1.0, lighten_color(palette.dark_card, 0.06));
    let major = egui::Stroke::new(2.5, lighten_color(palette.dark_card, 0.12));

    let mut x = rect.left();
    let mut lane = 0u32;
    while x <= rect.right() {
        let stroke = if lane % 4 == 2 { major } else { minor };
        shapes.push(egui::Shape::line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        ));
        x += 72.0;
        lane += 1;
    }
    let mut y = rect.top();
    lane = 0;
    while y <= rect.bottom() {
        let stroke = if lane % 3 == 1 { major } else { minor };
        shapes.push(egui::Shape::line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            stroke,
        ));
        y += 64.0;
        lane += 1;
    }
    // One arterial road cutting across the grid.
    shapes.push(egui::Shape::line_segment(
        [
            egui::pos2(rect.left(), rect.bottom() - rect.height() * 0.30),
            egui::pos2(rect.right(), rect.top() + rect.height() * 0.18),
        ],
        major,
    ));

    let pin = egui::pos2(
        rect.left() + rect.width() * 0.52,
        rect.top() + rect.height() * 0.16,
    );
    shapes.push(egui::Shape::circle_filled(
        pin,
        16.0,
        palette.accent.gamma_multiply(0.25),
    ));
    shapes.push(egui::Shape::circle_filled(pin, 7.0, palette.accent));
    shapes.push(egui::Shape::circle_filled(pin, 2.5, palette.card_background));

    // Dark wash so the copy stays readable over the streets.
    shapes.push(egui::Shape::rect_filled(
        rect,
        egui::CornerRadius::ZERO,
        palette.dark_background.gamma_multiply(0.82),
    ));

    egui::Shape::Vec(shapes)
}

/// Accent brackets at the four corners of the form card.
fn corner_accents(ui: &mut egui::Ui, palette: &SitePalette, rect: egui::Rect) {
    let stroke = egui::Stroke::new(3.0, palette.accent);
    let arm = 26.0;
    let inset = 8.0;
    let corners = [
        (rect.left_top(), egui::vec2(1.0, 1.0)),
        (rect.right_top(), egui::vec2(-1.0, 1.0)),
        (rect.left_bottom(), egui::vec2(1.0, -1.0)),
        (rect.right_bottom(), egui::vec2(-1.0, -1.0)),
    ];
    for (corner, dir) in corners {
        let origin = corner + egui::vec2(inset * dir.x, inset * dir.y);
        ui.painter()
            .line_segment([origin, origin + egui::vec2(arm * dir.x, 0.0)], stroke);
        ui.painter()
            .line_segment([origin, origin + egui::vec2(0.0, arm * dir.y)], stroke);
    }
}

fn show_form(
    ui: &mut egui::Ui,
    palette: &SitePalette,
    form: &mut ContactFormController,
    cmd_tx: &Sender<RelayCommand>,
    now: f64,
    submitting: bool,
    can_submit: bool,
) {
    ui.add_enabled_ui(!submitting, |ui| {
        let Inquiry {
            name,
            email,
            phone,
            company,
            message,
        } = &mut form.inquiry;
        widgets::two_column(
            ui,
            |ui| {
                widgets::labeled_text_field(ui, palette, "contact_name", &CONTACT_FORM.name, name);
            },
            |ui| {
                widgets::labeled_text_field(
                    ui,
                    palette,
                    "contact_email",
                    &CONTACT_FORM.email,
                    email,
                );
            },
        );
        ui.add_space(10.0);
        widgets::two_column(
            ui,
            |ui| {
                widgets::labeled_text_field(
                    ui,
                    palette,
                    "contact_phone",
                    &CONTACT_FORM.phone,
                    phone,
                );
            },
            |ui| {
                widgets::labeled_text_field(
                    ui,
                    palette,
                    "contact_company",
                    &CONTACT_FORM.company,
                    company,
                );
            },
        );
        ui.add_space(10.0);
        widgets::labeled_text_area(ui, palette, "contact_message", &CONTACT_FORM.message, message);
    });
    ui.add_space(14.0);
    ui.horizontal(|ui| {
        let label = if submitting {
            CONTACT_FORM.submitting
        } else {
            CONTACT_FORM.submit
        };
        let response = ui.add_enabled(can_submit, widgets::primary_button(palette, label));
        if submitting {
            ui.add_space(8.0);
            ui.spinner();
        }
        if response.clicked() {
            form.submit(cmd_tx, now);
        }
    });
    match form.phase() {
        SubmissionPhase::Succeeded => {
            ui.add_space(10.0);
            status_banner(ui, palette.success_soft, palette.success, CONTACT_FORM.success);
        }
        SubmissionPhase::Failed => {
            ui.add_space(10.0);
            status_banner(ui, palette.failure_soft, palette.failure, CONTACT_FORM.failure);
        }
        SubmissionPhase::Idle | SubmissionPhase::Submitting => {}
    }
}

fn status_banner(ui: &mut egui::Ui, fill: egui::Color32, text_color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).color(text_color).strong());
        });
}
