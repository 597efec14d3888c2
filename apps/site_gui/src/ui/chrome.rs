//! Header and footer shared by every page.

use chrono::Datelike;
use eframe::egui;
use site_content::company::COMPANY;
use site_content::pages::{
    FOOTER_BLURB, FOOTER_COMPANY_LINKS, FOOTER_RIGHTS, FOOTER_SERVICE_LINKS, HEADER_QUOTE_LABEL,
};
use site_content::Route;

use crate::ui::theme::SitePalette;
use crate::ui::widgets;

const HEADER_HEIGHT: f32 = 64.0;

/// Fixed top bar: logo, nav links, and the quote button. Returns the
/// route the visitor clicked, if any.
pub fn show_header(ctx: &egui::Context, palette: &SitePalette, current: Route) -> Option<Route> {
    let mut clicked = None;
    egui::TopBottomPanel::top("site_header")
        .resizable(false)
        .exact_height(HEADER_HEIGHT)
        .frame(
            egui::Frame::NONE
                .fill(palette.card_background)
                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                .inner_margin(egui::Margin::symmetric(18, 0)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if logo(ui, palette).clicked() {
                    clicked = Some(Route::Home);
                }
                ui.add_space(18.0);
                for route in Route::NAV {
                    if nav_button(ui, palette, route.nav_label(), route == current) {
                        clicked = Some(route);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let quote = widgets::primary_button(palette, HEADER_QUOTE_LABEL)
                        .min_size(egui::vec2(130.0, 36.0));
                    if ui.add(quote).clicked() {
                        clicked = Some(Route::Contact);
                    }
                });
            });
        });
    clicked
}

fn logo(ui: &mut egui::Ui, palette: &SitePalette) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(150.0, 40.0), egui::Sense::click());
    let badge = egui::Rect::from_min_size(rect.min, egui::vec2(40.0, 40.0));
    ui.painter()
        .rect_filled(badge, egui::CornerRadius::same(8), palette.accent);
    ui.painter().text(
        badge.center(),
        egui::Align2::CENTER_CENTER,
        COMPANY.short_name,
        egui::TextStyle::Button.resolve(ui.style()),
        egui::Color32::WHITE,
    );
    ui.painter().text(
        egui::pos2(badge.right() + 8.0, rect.center().y - 7.0),
        egui::Align2::LEFT_CENTER,
        "Canada",
        egui::TextStyle::Button.resolve(ui.style()),
        palette.heading_text,
    );
    ui.painter().text(
        egui::pos2(badge.right() + 8.0, rect.center().y + 7.0),
        egui::Align2::LEFT_CENTER,
        "Sheet Metal",
        egui::TextStyle::Small.resolve(ui.style()),
        palette.muted_text,
    );
    response
}

fn nav_button(ui: &mut egui::Ui, palette: &SitePalette, label: &str, active: bool) -> bool {
    let (text, fill) = if active {
        (palette.accent, palette.accent_soft)
    } else {
        (palette.body_text, egui::Color32::TRANSPARENT)
    };
    let button = egui::Button::new(egui::RichText::new(label).color(text).strong())
        .fill(fill)
        .stroke(egui::Stroke::NONE)
        .min_size(egui::vec2(0.0, 34.0));
    ui.add(button).clicked()
}

/// Dark footer rendered at the bottom of the scrolled content. Returns
/// the route the visitor clicked, if any.
pub fn show_footer(ui: &mut egui::Ui, palette: &SitePalette) -> Option<Route> {
    let mut clicked = None;
    egui::Frame::new()
        .fill(palette.dark_background)
        .inner_margin(egui::Margin::symmetric(24, 36))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            widgets::content_column(ui, |ui| {
                let gap = 24.0;
                let col = ((ui.available_width() - gap * 3.0) / 4.0).max(170.0);
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(col);
                        brand_column(ui, palette);
                    });
                    ui.add_space(gap);
                    ui.vertical(|ui| {
                        ui.set_width(col);
                        link_column(ui, palette, "Company", FOOTER_COMPANY_LINKS.iter(), &mut clicked);
                    });
                    ui.add_space(gap);
                    ui.vertical(|ui| {
                        ui.set_width(col);
                        link_column(ui, palette, "Services", FOOTER_SERVICE_LINKS.iter(), &mut clicked);
                    });
                    ui.add_space(gap);
                    ui.vertical(|ui| {
                        ui.set_width(col);
                        contact_column(ui, palette);
                    });
                });
                ui.add_space(26.0);
                let (line, _) = ui
                    .allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(line, egui::CornerRadius::same(0), palette.dark_stroke);
                ui.add_space(14.0);
                ui.vertical_centered(|ui| {
                    let year = chrono::Local::now().year();
                    ui.label(
                        egui::RichText::new(format!(
                            "© {year} {}. {FOOTER_RIGHTS}",
                            COMPANY.name
                        ))
                        .color(palette.light_muted)
                        .size(13.0),
                    );
                });
            });
        });
    clicked
}

fn brand_column(ui: &mut egui::Ui, palette: &SitePalette) {
    ui.label(
        egui::RichText::new(COMPANY.name)
            .color(palette.light_heading)
            .strong()
            .size(17.0),
    );
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(FOOTER_BLURB)
            .color(palette.light_body)
            .size(13.0),
    );
}

fn link_column<'a>(
    ui: &mut egui::Ui,
    palette: &SitePalette,
    heading: &str,
    links: impl Iterator<Item = &'a site_content::pages::PageLink>,
    clicked: &mut Option<Route>,
) {
    ui.label(
        egui::RichText::new(heading)
            .color(palette.light_heading)
            .strong()
            .size(15.0),
    );
    ui.add_space(8.0);
    for link in links {
        if ui
            .link(egui::RichText::new(link.label).color(palette.light_body))
            .clicked()
        {
            *clicked = Some(link.to);
        }
    }
}

fn contact_column(ui: &mut egui::Ui, palette: &SitePalette) {
    ui.label(
        egui::RichText::new("Contact")
            .color(palette.light_heading)
            .strong()
            .size(15.0),
    );
    ui.add_space(8.0);
    for line in [
        COMPANY.street,
        COMPANY.city,
        COMPANY.postal,
        COMPANY.orders_email,
        COMPANY.phone,
    ] {
        ui.label(egui::RichText::new(line).color(palette.light_body).size(13.0));
    }
}
