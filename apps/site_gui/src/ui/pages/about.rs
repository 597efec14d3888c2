//! About page: who we are, the vision/mission/goal cards, and what sets
//! the shop apart.

use eframe::egui;
use site_content::pages::{
    ABOUT_DIFFERENTIATORS, ABOUT_HEADER, ABOUT_VALUES, ABOUT_VALUES_HEADER, ABOUT_WHO_BODY,
    ABOUT_WHO_LEAD, ABOUT_WHO_TITLE, ABOUT_WHY_HEADER,
};
use site_content::Route;

use crate::ui::reveal::{stagger_delay_ms, RevealSection};
use crate::ui::theme::SitePalette;
use crate::ui::widgets;

pub struct AboutPage {
    banner: RevealSection,
    who_text: RevealSection,
    who_plate: RevealSection,
    values_header: RevealSection,
    value_cards: [RevealSection; 3],
    why_header: RevealSection,
    why_items: [RevealSection; 4],
}

impl Default for AboutPage {
    fn default() -> Self {
        Self {
            banner: RevealSection::new(),
            who_text: RevealSection::new(),
            who_plate: RevealSection::new().with_delay_ms(200),
            values_header: RevealSection::new(),
            value_cards: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(stagger_delay_ms(i + 1, 100))
            }),
            why_header: RevealSection::new(),
            why_items: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(100 + stagger_delay_ms(i, 50))
            }),
        }
    }
}

impl AboutPage {
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &SitePalette) -> Option<Route> {
        let go = None;

        self.banner.show(ui, |ui| {
            widgets::page_banner(ui, palette, &ABOUT_HEADER);
        });

        // Who we are
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    let who_text = &mut self.who_text;
                    let who_plate = &mut self.who_plate;
                    widgets::two_column(
                        ui,
                        |ui| {
                            who_text.show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(ABOUT_WHO_TITLE)
                                        .color(palette.heading_text)
                                        .strong()
                                        .size(26.0),
                                );
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(ABOUT_WHO_LEAD)
                                        .color(palette.body_text)
                                        .size(14.0),
                                );
                                for paragraph in ABOUT_WHO_BODY {
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new(paragraph)
                                            .color(palette.muted_text)
                                            .size(14.0),
                                    );
                                }
                            });
                        },
                        |ui| {
                            who_plate.show(ui, |ui| {
                                widgets::illustration_panel(ui, palette, "Our workshop", 300.0);
                            });
                        },
                    );
                });
            });

        // Vision, mission, and goal
        egui::Frame::new()
            .fill(palette.card_background)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.values_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &ABOUT_VALUES_HEADER);
                        });
                    });
                    ui.add_space(24.0);
                    let cards = &mut self.value_cards;
                    widgets::card_grid(ui, 3, ABOUT_VALUES.len(), |ui, i| {
                        cards[i].show(ui, |ui| {
                            let card = &ABOUT_VALUES[i];
                            let mut frame = widgets::card_frame(palette);
                            if card.featured {
                                frame = frame.stroke(egui::Stroke::new(2.0, palette.accent));
                            }
                            frame.show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.vertical_centered(|ui| {
                                    widgets::value_icon(ui, palette, card.icon);
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new(card.name)
                                            .color(palette.heading_text)
                                            .strong()
                                            .size(18.0),
                                    );
                                    ui.add_space(6.0);
                                    ui.label(
                                        egui::RichText::new(card.blurb)
                                            .color(palette.muted_text)
                                            .size(13.0),
                                    );
                                });
                            });
                        });
                    });
                });
            });

        // What sets us apart
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.why_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &ABOUT_WHY_HEADER);
                        });
                    });
                    ui.add_space(24.0);
                    let items = &mut self.why_items;
                    widgets::card_grid(ui, 2, ABOUT_DIFFERENTIATORS.len(), |ui, i| {
                        items[i].show(ui, |ui| {
                            let item = &ABOUT_DIFFERENTIATORS[i];
                            ui.horizontal_top(|ui| {
                                ui.label(
                                    egui::RichText::new(item.number)
                                        .color(palette.accent)
                                        .strong()
                                        .size(28.0),
                                );
                                ui.add_space(10.0);
                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(item.title)
                                            .color(palette.heading_text)
                                            .strong()
                                            .size(16.0),
                                    );
                                    ui.add_space(4.0);
                                    ui.label(
                                        egui::RichText::new(item.blurb)
                                            .color(palette.muted_text)
                                            .size(13.0),
                                    );
                                });
                            });
                        });
                    });
                });
            });

        go
    }
}
