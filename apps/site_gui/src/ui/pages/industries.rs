//! Industries page: the sector grid and its closing call to action.

use eframe::egui;
use site_content::pages::{INDUSTRIES, INDUSTRIES_CTA, INDUSTRIES_GRID_HEADER, INDUSTRIES_HEADER};
use site_content::Route;

use crate::ui::reveal::{stagger_delay_ms, RevealSection};
use crate::ui::theme::SitePalette;
use crate::ui::widgets;

pub struct IndustriesPage {
    banner: RevealSection,
    grid_header: RevealSection,
    sector_cards: [RevealSection; 6],
    closing: RevealSection,
}

impl Default for IndustriesPage {
    fn default() -> Self {
        Self {
            banner: RevealSection::new(),
            grid_header: RevealSection::new(),
            sector_cards: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(stagger_delay_ms(i, 100))
            }),
            closing: RevealSection::new(),
        }
    }
}

impl IndustriesPage {
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &SitePalette) -> Option<Route> {
        let mut go = None;

        self.banner.show(ui, |ui| {
            widgets::page_banner(ui, palette, &INDUSTRIES_HEADER);
        });

        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.grid_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &INDUSTRIES_GRID_HEADER);
                        });
                    });
                    ui.add_space(24.0);
                    let cards = &mut self.sector_cards;
                    widgets::card_grid(ui, 3, INDUSTRIES.len(), |ui, i| {
                        cards[i].show(ui, |ui| {
                            let sector = &INDUSTRIES[i];
                            widgets::card_frame(palette).show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                widgets::glyph_badge(ui, palette, sector.glyph);
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(sector.name)
                                        .color(palette.heading_text)
                                        .strong()
                                        .size(16.0),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(sector.blurb)
                                        .color(palette.muted_text)
                                        .size(13.0),
                                );
                            });
                        });
                    });
                    ui.add_space(18.0);
                    let picked = self
                        .closing
                        .show(ui, |ui| widgets::cta_box(ui, palette, &INDUSTRIES_CTA));
                    if let Some(to) = picked {
                        go = Some(to);
                    }
                });
            });

        go
    }
}
