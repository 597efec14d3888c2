//! Brand palette and egui style for the site.

use std::collections::BTreeMap;

use eframe::egui;

/// The site's colors. Light surfaces carry the pages, dark surfaces carry
/// the hero, the call-to-action banners, and the footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitePalette {
    pub accent: egui::Color32,
    pub accent_hover: egui::Color32,
    pub accent_soft: egui::Color32,

    pub page_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_stroke: egui::Color32,

    pub dark_background: egui::Color32,
    pub dark_card: egui::Color32,
    pub dark_stroke: egui::Color32,

    pub heading_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,

    pub light_heading: egui::Color32,
    pub light_body: egui::Color32,
    pub light_muted: egui::Color32,

    pub success: egui::Color32,
    pub success_soft: egui::Color32,
    pub failure: egui::Color32,
    pub failure_soft: egui::Color32,
}

pub fn site_palette() -> SitePalette {
    SitePalette {
        // Brand red, #C41E3A.
        accent: egui::Color32::from_rgb(196, 30, 58),
        accent_hover: egui::Color32::from_rgb(214, 48, 76),
        accent_soft: egui::Color32::from_rgb(250, 232, 235),

        page_background: egui::Color32::from_rgb(250, 250, 251),
        card_background: egui::Color32::WHITE,
        card_stroke: egui::Color32::from_rgb(229, 231, 235),

        dark_background: egui::Color32::from_rgb(17, 19, 24),
        dark_card: egui::Color32::from_rgb(28, 31, 38),
        dark_stroke: egui::Color32::from_rgb(54, 58, 68),

        heading_text: egui::Color32::from_rgb(17, 24, 39),
        body_text: egui::Color32::from_rgb(55, 65, 81),
        muted_text: egui::Color32::from_rgb(107, 114, 128),

        light_heading: egui::Color32::from_rgb(251, 251, 252),
        light_body: egui::Color32::from_rgb(209, 213, 219),
        light_muted: egui::Color32::from_rgb(156, 163, 175),

        success: egui::Color32::from_rgb(22, 133, 72),
        success_soft: egui::Color32::from_rgb(232, 247, 238),
        failure: egui::Color32::from_rgb(185, 28, 28),
        failure_soft: egui::Color32::from_rgb(252, 235, 235),
    }
}

pub fn site_visuals(palette: &SitePalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = None;
    visuals.window_fill = palette.page_background;
    visuals.panel_fill = palette.page_background;
    visuals.extreme_bg_color = palette.card_background;
    visuals.faint_bg_color = palette.accent_soft;
    visuals.hyperlink_color = palette.accent;

    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.hovered.bg_fill = palette.accent_hover;

    let radius = egui::CornerRadius::same(6);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    // Make text inputs reliably clickable and visible:
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, palette.accent.gamma_multiply(0.5));
    visuals.widgets.active.bg_stroke =
        egui::Stroke::new(1.2, palette.accent.gamma_multiply(0.9));

    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// Mixes an opaque color toward white. `t` is the mix fraction in `0..=1`.
pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round() as u8
    };
    egui::Color32::from_rgb(mix(c.r()), mix(c.g()), mix(c.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        let base = egui::Color32::from_rgb(100, 50, 0);
        let lighter = lighten_color(base, 0.5);
        assert!(lighter.r() > base.r());
        assert!(lighter.g() > base.g());
        assert!(lighter.b() > base.b());
        assert_eq!(lighten_color(base, 1.0), egui::Color32::WHITE);
        assert_eq!(lighten_color(base, 0.0), base);
        // Overshooting fractions clamp instead of wrapping the channels.
        assert_eq!(lighten_color(base, 7.0), egui::Color32::WHITE);
    }

    #[test]
    fn text_styles_scale_uniformly() {
        let base = scaled_text_styles(1.0);
        let scaled = scaled_text_styles(2.0);
        for (style, font) in &base {
            let scaled_font = &scaled[style];
            assert!((scaled_font.size - font.size * 2.0).abs() < f32::EPSILON);
        }
    }
}
