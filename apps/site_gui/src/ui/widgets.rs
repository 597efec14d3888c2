//! Shared drawing helpers for the site's pages.

use eframe::egui;
use site_content::pages::{CtaBox, FieldCopy, PageHeader, SectionHeader, ServiceIcon, ValueIcon};
use site_content::Route;

use crate::ui::theme::SitePalette;

/// White card used for services, machines, values, and the contact form.
pub fn card_frame(palette: &SitePalette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(20, 18))
}

/// Dark panel used for call-to-action banners.
pub fn dark_frame(palette: &SitePalette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.dark_card)
        .stroke(egui::Stroke::new(1.0, palette.dark_stroke))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(28, 26))
}

/// Centered content column, capped like the site's container width.
pub fn content_column<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let width = ui.available_width().min(1100.0);
    let pad = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

/// Two equally wide columns with a gap, top aligned.
pub fn two_column(
    ui: &mut egui::Ui,
    left: impl FnOnce(&mut egui::Ui),
    right: impl FnOnce(&mut egui::Ui),
) {
    let gap = 28.0;
    let col = ((ui.available_width() - gap) / 2.0).max(200.0);
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(col);
            left(ui);
        });
        ui.add_space(gap);
        ui.vertical(|ui| {
            ui.set_width(col);
            right(ui);
        });
    });
}

/// Lays out `count` cells in rows of `columns`, all the same width.
pub fn card_grid(
    ui: &mut egui::Ui,
    columns: usize,
    count: usize,
    mut cell: impl FnMut(&mut egui::Ui, usize),
) {
    let gap = 18.0;
    let col_w =
        ((ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32).max(160.0);
    let mut index = 0;
    while index < count {
        ui.horizontal_top(|ui| {
            for slot in 0..columns {
                let i = index + slot;
                if i >= count {
                    break;
                }
                if slot > 0 {
                    ui.add_space(gap);
                }
                ui.vertical(|ui| {
                    ui.set_width(col_w);
                    cell(ui, i);
                });
            }
        });
        ui.add_space(gap);
        index += columns;
    }
}

/// Small red pill introducing a section.
pub fn section_tag(ui: &mut egui::Ui, palette: &SitePalette, text: &str) {
    egui::Frame::new()
        .fill(palette.accent_soft)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .color(palette.accent)
                    .strong()
                    .size(12.0),
            );
        });
}

pub fn section_heading(ui: &mut egui::Ui, palette: &SitePalette, header: &SectionHeader) {
    section_tag(ui, palette, header.tag);
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(header.title)
            .color(palette.heading_text)
            .strong()
            .size(26.0),
    );
    if let Some(lead) = header.lead {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(lead)
                .color(palette.muted_text)
                .size(15.0),
        );
    }
}

/// Dark full-width banner at the top of the inner pages.
pub fn page_banner(ui: &mut egui::Ui, palette: &SitePalette, header: &PageHeader) {
    egui::Frame::new()
        .fill(palette.dark_background)
        .inner_margin(egui::Margin::symmetric(24, 48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                section_tag(ui, palette, header.tag);
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(header.title)
                        .color(palette.light_heading)
                        .strong()
                        .size(34.0),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(header.lead)
                        .color(palette.light_body)
                        .size(15.0),
                );
            });
        });
}

pub fn primary_button(palette: &SitePalette, label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label)
            .color(egui::Color32::WHITE)
            .strong(),
    )
    .fill(palette.accent)
    .stroke(egui::Stroke::NONE)
    .min_size(egui::vec2(150.0, 40.0))
}

pub fn outline_button(palette: &SitePalette, label: &str, on_dark: bool) -> egui::Button<'static> {
    let text = if on_dark {
        palette.light_heading
    } else {
        palette.heading_text
    };
    let stroke = if on_dark {
        palette.light_muted
    } else {
        palette.card_stroke
    };
    egui::Button::new(egui::RichText::new(label).color(text).strong())
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, stroke))
        .min_size(egui::vec2(150.0, 40.0))
}

/// Checkmark bullet with a bold title and an optional blurb under it.
pub fn check_row(ui: &mut egui::Ui, palette: &SitePalette, title: &str, blurb: Option<&str>) {
    ui.horizontal_top(|ui| {
        let (badge, _) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::hover());
        ui.painter().circle_filled(badge.center(), 11.0, palette.accent_soft);
        ui.painter().text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            "✓",
            egui::TextStyle::Body.resolve(ui.style()),
            palette.accent,
        );
        ui.add_space(4.0);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .color(palette.heading_text)
                    .strong(),
            );
            if let Some(blurb) = blurb {
                ui.label(
                    egui::RichText::new(blurb)
                        .color(palette.muted_text)
                        .size(13.0),
                );
            }
        });
    });
}

/// Rounded square holding one of the industry glyphs.
pub fn glyph_badge(ui: &mut egui::Ui, palette: &SitePalette, glyph: &str) {
    let (badge, _) = ui.allocate_exact_size(egui::vec2(52.0, 52.0), egui::Sense::hover());
    ui.painter()
        .rect_filled(badge, egui::CornerRadius::same(12), palette.accent_soft);
    ui.painter().text(
        badge.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(24.0),
        palette.heading_text,
    );
}

/// Rounded pill naming one served sector.
pub fn industry_pill(ui: &mut egui::Ui, palette: &SitePalette, label: &str) {
    egui::Frame::new()
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(18.0)
        .inner_margin(egui::Margin::symmetric(14, 8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .color(palette.body_text)
                    .strong(),
            );
        });
}

/// Stand-in plate where the shop photography would go: dark panel with
/// diagonal hatching and a caption.
pub fn illustration_panel(ui: &mut egui::Ui, palette: &SitePalette, caption: &str, height: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(14), palette.dark_card);

    let clipped = ui.painter().with_clip_rect(rect);
    let hatch = egui::Stroke::new(1.0, palette.dark_stroke.gamma_multiply(0.6));
    let mut x = rect.left() - rect.height();
    while x < rect.right() {
        clipped.line_segment(
            [egui::pos2(x, rect.bottom()), egui::pos2(x + rect.height(), rect.top())],
            hatch,
        );
        x += 26.0;
    }

    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(14),
        egui::Stroke::new(1.0, palette.dark_stroke),
        egui::StrokeKind::Middle,
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::TextStyle::Button.resolve(ui.style()),
        palette.light_muted,
    );
}

/// Painted mark for one of the fabrication services.
pub fn service_icon(ui: &mut egui::Ui, palette: &SitePalette, icon: ServiceIcon) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(44.0, 44.0), egui::Sense::hover());
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(10), palette.accent_soft);
    let stroke = egui::Stroke::new(2.0, palette.accent);
    let c = rect.center();
    match icon {
        ServiceIcon::Laser => {
            painter.circle_filled(egui::pos2(c.x, rect.top() + 12.0), 3.0, palette.accent);
            painter.line_segment(
                [egui::pos2(c.x, rect.top() + 14.0), egui::pos2(c.x - 9.0, rect.bottom() - 10.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x, rect.top() + 14.0), egui::pos2(c.x + 9.0, rect.bottom() - 10.0)],
                stroke,
            );
        }
        ServiceIcon::Plasma => {
            painter.line_segment(
                [egui::pos2(c.x, rect.top() + 10.0), egui::pos2(c.x, rect.bottom() - 14.0)],
                stroke,
            );
            painter.circle_filled(egui::pos2(c.x - 5.0, rect.bottom() - 12.0), 2.0, palette.accent);
            painter.circle_filled(egui::pos2(c.x + 5.0, rect.bottom() - 10.0), 1.5, palette.accent);
        }
        ServiceIcon::Press => {
            painter.line_segment(
                [egui::pos2(rect.left() + 10.0, rect.bottom() - 12.0), egui::pos2(c.x, c.y)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x, c.y), egui::pos2(rect.right() - 10.0, rect.bottom() - 12.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x, rect.top() + 8.0), egui::pos2(c.x, c.y - 4.0)],
                stroke,
            );
        }
        ServiceIcon::Weld => {
            painter.line_segment(
                [egui::pos2(rect.left() + 12.0, rect.bottom() - 10.0), egui::pos2(c.x, rect.top() + 14.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x, rect.top() + 14.0), egui::pos2(rect.right() - 12.0, rect.bottom() - 10.0)],
                stroke,
            );
            painter.circle_filled(egui::pos2(c.x - 4.0, rect.top() + 10.0), 1.5, palette.accent);
            painter.circle_filled(egui::pos2(c.x + 4.0, rect.top() + 8.0), 1.5, palette.accent);
        }
        ServiceIcon::Finish => {
            painter.rect_stroke(
                egui::Rect::from_center_size(c, egui::vec2(18.0, 18.0)),
                egui::CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Middle,
            );
            painter.line_segment(
                [egui::pos2(c.x - 5.0, c.y), egui::pos2(c.x - 1.0, c.y + 4.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x - 1.0, c.y + 4.0), egui::pos2(c.x + 6.0, c.y - 4.0)],
                stroke,
            );
        }
    }
}

/// Painted mark for the vision, mission, and goal cards.
pub fn value_icon(ui: &mut egui::Ui, palette: &SitePalette, icon: ValueIcon) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(52.0, 52.0), egui::Sense::hover());
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(26), palette.accent_soft);
    let stroke = egui::Stroke::new(2.0, palette.accent);
    let c = rect.center();
    match icon {
        ValueIcon::Vision => {
            painter.circle_stroke(c, 14.0, stroke);
            painter.circle_stroke(c, 8.0, stroke);
            painter.circle_filled(c, 3.0, palette.accent);
        }
        ValueIcon::Mission => {
            painter.line_segment(
                [egui::pos2(c.x, c.y - 14.0), egui::pos2(c.x + 6.0, c.y + 10.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x, c.y - 14.0), egui::pos2(c.x - 6.0, c.y + 10.0)],
                stroke,
            );
            painter.circle_filled(c, 3.0, palette.accent);
        }
        ValueIcon::Goal => {
            painter.line_segment(
                [egui::pos2(c.x - 12.0, c.y + 12.0), egui::pos2(c.x, c.y - 12.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x, c.y - 12.0), egui::pos2(c.x + 12.0, c.y + 12.0)],
                stroke,
            );
            painter.circle_filled(egui::pos2(c.x, c.y - 12.0), 3.0, palette.accent);
        }
    }
}

pub enum InfoIcon {
    Location,
    Email,
    Phone,
}

/// Painted mark for the contact page's info blocks. Styled for the dark
/// map hero.
pub fn info_icon(ui: &mut egui::Ui, palette: &SitePalette, icon: InfoIcon) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(10), palette.dark_card);
    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(10),
        egui::Stroke::new(1.0, palette.dark_stroke),
        egui::StrokeKind::Middle,
    );
    let stroke = egui::Stroke::new(2.0, palette.accent);
    let c = rect.center();
    match icon {
        InfoIcon::Location => {
            painter.circle_stroke(egui::pos2(c.x, c.y - 3.0), 6.0, stroke);
            painter.line_segment(
                [egui::pos2(c.x - 4.5, c.y + 1.5), egui::pos2(c.x, c.y + 10.0)],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(c.x + 4.5, c.y + 1.5), egui::pos2(c.x, c.y + 10.0)],
                stroke,
            );
        }
        InfoIcon::Email => {
            let envelope = egui::Rect::from_center_size(c, egui::vec2(20.0, 14.0));
            painter.rect_stroke(
                envelope,
                egui::CornerRadius::same(3),
                stroke,
                egui::StrokeKind::Middle,
            );
            painter.line_segment([envelope.left_top(), egui::pos2(c.x, c.y + 2.0)], stroke);
            painter.line_segment([envelope.right_top(), egui::pos2(c.x, c.y + 2.0)], stroke);
        }
        InfoIcon::Phone => {
            let body = egui::Rect::from_center_size(c, egui::vec2(12.0, 20.0));
            painter.rect_stroke(
                body,
                egui::CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Middle,
            );
            painter.circle_filled(egui::pos2(c.x, body.bottom() - 3.5), 1.5, palette.accent);
        }
    }
}

/// Dark closing banner with one or two actions. Returns the route the
/// visitor picked, if any.
pub fn cta_box(ui: &mut egui::Ui, palette: &SitePalette, cta: &CtaBox) -> Option<Route> {
    let mut clicked = None;
    dark_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(cta.title)
                    .color(palette.light_heading)
                    .strong()
                    .size(24.0),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(cta.blurb)
                    .color(palette.light_body)
                    .size(14.0),
            );
            ui.add_space(14.0);
            ui.horizontal(|ui| {
                let buttons_width = if cta.secondary.is_some() { 310.0 } else { 150.0 };
                ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
                if ui.add(primary_button(palette, cta.primary.label)).clicked() {
                    clicked = Some(cta.primary.to);
                }
                if let Some(secondary) = cta.secondary {
                    if ui
                        .add(outline_button(palette, secondary.label, true))
                        .clicked()
                    {
                        clicked = Some(secondary.to);
                    }
                }
            });
        });
    });
    clicked
}

fn field_label(ui: &mut egui::Ui, palette: &SitePalette, copy: &FieldCopy) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 3.0;
        ui.label(egui::RichText::new(copy.label).strong());
        if copy.required {
            ui.label(egui::RichText::new("*").color(palette.accent).strong());
        }
    });
}

/// Labelled single-line input with ghost text.
pub fn labeled_text_field(
    ui: &mut egui::Ui,
    palette: &SitePalette,
    id: &'static str,
    copy: &FieldCopy,
    value: &mut String,
) -> egui::Response {
    field_label(ui, palette, copy);
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(copy.placeholder)
                .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 34.0], edit)
}

/// Labelled multi-line input with ghost text.
pub fn labeled_text_area(
    ui: &mut egui::Ui,
    palette: &SitePalette,
    id: &'static str,
    copy: &FieldCopy,
    value: &mut String,
) -> egui::Response {
    field_label(ui, palette, copy);
    let edit = egui::TextEdit::multiline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(copy.placeholder)
                .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_rows(4)
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 96.0], edit)
}
