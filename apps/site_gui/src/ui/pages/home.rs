//! Landing page: hero, service highlights, company intro, equipment
//! preview, industries strip, and the closing call to action.

use eframe::egui;
use site_content::pages::{
    HOME_CTA, HOME_EQUIPMENT_CTA, HOME_EQUIPMENT_HEADER, HOME_EQUIPMENT_POINTS, HOME_HERO,
    HOME_HIGHLIGHTS, HOME_HIGHLIGHTS_HEADER, HOME_HIGHLIGHT_LINK, HOME_INDUSTRIES_CTA,
    HOME_INDUSTRIES_HEADER, HOME_INDUSTRY_PILLS, HOME_INTRO,
};
use site_content::Route;

use crate::ui::reveal::{stagger_delay_ms, RevealSection};
use crate::ui::theme::SitePalette;
use crate::ui::widgets;

pub struct HomePage {
    hero: RevealSection,
    highlights_header: RevealSection,
    highlight_cards: [RevealSection; 4],
    intro_text: RevealSection,
    intro_plate: RevealSection,
    equipment_plate: RevealSection,
    equipment_text: RevealSection,
    industries_header: RevealSection,
    industry_pills: [RevealSection; 6],
    industries_cta: RevealSection,
    closing: RevealSection,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            hero: RevealSection::new(),
            highlights_header: RevealSection::new(),
            highlight_cards: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(stagger_delay_ms(i, 100))
            }),
            intro_text: RevealSection::new(),
            intro_plate: RevealSection::new().with_delay_ms(200),
            equipment_plate: RevealSection::new(),
            equipment_text: RevealSection::new().with_delay_ms(200),
            industries_header: RevealSection::new(),
            industry_pills: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(stagger_delay_ms(i, 80))
            }),
            industries_cta: RevealSection::new().with_delay_ms(400),
            closing: RevealSection::new(),
        }
    }
}

impl HomePage {
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &SitePalette) -> Option<Route> {
        let mut go = None;

        // Hero
        egui::Frame::new()
            .fill(palette.dark_background)
            .inner_margin(egui::Margin::symmetric(24, 72))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                self.hero.show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(760.0);
                        widgets::section_tag(ui, palette, HOME_HERO.tag);
                        ui.add_space(14.0);
                        let mut lines = HOME_HERO.title.lines();
                        if let Some(first) = lines.next() {
                            ui.label(
                                egui::RichText::new(first)
                                    .color(palette.light_heading)
                                    .strong()
                                    .size(42.0),
                            );
                        }
                        if let Some(second) = lines.next() {
                            ui.label(
                                egui::RichText::new(second)
                                    .color(palette.accent)
                                    .strong()
                                    .size(42.0),
                            );
                        }
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(HOME_HERO.lead)
                                .color(palette.light_body)
                                .size(15.0),
                        );
                        ui.add_space(20.0);
                        ui.horizontal(|ui| {
                            ui.add_space(((ui.available_width() - 310.0) / 2.0).max(0.0));
                            if ui
                                .add(widgets::primary_button(palette, HOME_HERO.primary.label))
                                .clicked()
                            {
                                go = Some(HOME_HERO.primary.to);
                            }
                            if ui
                                .add(widgets::outline_button(
                                    palette,
                                    HOME_HERO.secondary.label,
                                    true,
                                ))
                                .clicked()
                            {
                                go = Some(HOME_HERO.secondary.to);
                            }
                        });
                        ui.add_space(28.0);
                        ui.label(
                            egui::RichText::new("↓")
                                .color(palette.light_muted)
                                .size(22.0),
                        );
                    });
                });
            });

        // Service highlights
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.highlights_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &HOME_HIGHLIGHTS_HEADER);
                        });
                    });
                    ui.add_space(24.0);
                    let cards = &mut self.highlight_cards;
                    let go = &mut go;
                    widgets::card_grid(ui, 4, HOME_HIGHLIGHTS.len(), |ui, i| {
                        cards[i].show(ui, |ui| {
                            let highlight = &HOME_HIGHLIGHTS[i];
                            widgets::card_frame(palette).show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                widgets::service_icon(ui, palette, highlight.icon);
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(highlight.title)
                                        .color(palette.heading_text)
                                        .strong()
                                        .size(16.0),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(highlight.blurb)
                                        .color(palette.muted_text)
                                        .size(13.0),
                                );
                                ui.add_space(10.0);
                                if ui
                                    .link(
                                        egui::RichText::new(HOME_HIGHLIGHT_LINK.label)
                                            .color(palette.accent)
                                            .strong()
                                            .size(13.0),
                                    )
                                    .clicked()
                                {
                                    *go = Some(HOME_HIGHLIGHT_LINK.to);
                                }
                            });
                        });
                    });
                });
            });

        // Company intro
        egui::Frame::new()
            .fill(palette.card_background)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    let intro_text = &mut self.intro_text;
                    let intro_plate = &mut self.intro_plate;
                    let go = &mut go;
                    widgets::two_column(
                        ui,
                        |ui| {
                            intro_text.show(ui, |ui| {
                                widgets::section_tag(ui, palette, HOME_INTRO.tag);
                                ui.add_space(6.0);
                                ui.label(
                                    egui::RichText::new(HOME_INTRO.title)
                                        .color(palette.heading_text)
                                        .strong()
                                        .size(26.0),
                                );
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(HOME_INTRO.lead)
                                        .color(palette.body_text)
                                        .size(14.0),
                                );
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(HOME_INTRO.body)
                                        .color(palette.muted_text)
                                        .size(14.0),
                                );
                                ui.add_space(14.0);
                                if ui
                                    .add(widgets::primary_button(palette, HOME_INTRO.cta.label))
                                    .clicked()
                                {
                                    *go = Some(HOME_INTRO.cta.to);
                                }
                            });
                        },
                        |ui| {
                            intro_plate.show(ui, |ui| {
                                widgets::illustration_panel(ui, palette, "Custom fabrication", 300.0);
                            });
                        },
                    );
                });
            });

        // Equipment preview
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    let equipment_plate = &mut self.equipment_plate;
                    let equipment_text = &mut self.equipment_text;
                    let go = &mut go;
                    widgets::two_column(
                        ui,
                        |ui| {
                            equipment_plate.show(ui, |ui| {
                                widgets::illustration_panel(ui, palette, "Fabrication floor", 300.0);
                            });
                        },
                        |ui| {
                            equipment_text.show(ui, |ui| {
                                widgets::section_heading(ui, palette, &HOME_EQUIPMENT_HEADER);
                                ui.add_space(12.0);
                                for point in &HOME_EQUIPMENT_POINTS {
                                    widgets::check_row(ui, palette, point.title, Some(point.blurb));
                                    ui.add_space(8.0);
                                }
                                ui.add_space(6.0);
                                if ui
                                    .add(widgets::outline_button(
                                        palette,
                                        HOME_EQUIPMENT_CTA.label,
                                        false,
                                    ))
                                    .clicked()
                                {
                                    *go = Some(HOME_EQUIPMENT_CTA.to);
                                }
                            });
                        },
                    );
                });
            });

        // Industries strip
        egui::Frame::new()
            .fill(palette.card_background)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.industries_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &HOME_INDUSTRIES_HEADER);
                        });
                    });
                    ui.add_space(18.0);
                    let pills = &mut self.industry_pills;
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                        for (i, label) in HOME_INDUSTRY_PILLS.iter().enumerate() {
                            ui.vertical(|ui| {
                                pills[i].show(ui, |ui| {
                                    widgets::industry_pill(ui, palette, label);
                                });
                            });
                        }
                    });
                    ui.add_space(18.0);
                    let picked = self.industries_cta.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add(widgets::primary_button(palette, HOME_INDUSTRIES_CTA.label))
                                .clicked()
                        })
                        .inner
                    });
                    if picked {
                        go = Some(HOME_INDUSTRIES_CTA.to);
                    }
                });
            });

        // Closing call to action
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    let picked = self
                        .closing
                        .show(ui, |ui| widgets::cta_box(ui, palette, &HOME_CTA));
                    if let Some(to) = picked {
                        go = Some(to);
                    }
                });
            });

        go
    }
}
