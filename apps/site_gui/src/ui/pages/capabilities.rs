//! Capabilities page: overview checklist, the machinery cards, and the
//! supporting equipment grid.

use eframe::egui;
use site_content::pages::{
    CAPABILITIES_CTA, CAPABILITIES_HEADER, CAPABILITIES_OVERVIEW_CTA,
    CAPABILITIES_OVERVIEW_HEADER, CAPABILITIES_SERVICES, CAPABILITIES_SERVICES_INTRO,
    MACHINERY_HEADER, MACHINES, SUPPORT_HEADER, SUPPORT_STATIONS,
};
use site_content::Route;

use crate::ui::reveal::{stagger_delay_ms, RevealSection};
use crate::ui::theme::SitePalette;
use crate::ui::widgets;

pub struct CapabilitiesPage {
    banner: RevealSection,
    overview_text: RevealSection,
    overview_plate: RevealSection,
    machinery_header: RevealSection,
    machine_cards: [RevealSection; 4],
    support_header: RevealSection,
    support_cards: [RevealSection; 5],
    closing: RevealSection,
}

impl Default for CapabilitiesPage {
    fn default() -> Self {
        Self {
            banner: RevealSection::new(),
            overview_text: RevealSection::new(),
            overview_plate: RevealSection::new().with_delay_ms(200),
            machinery_header: RevealSection::new(),
            machine_cards: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(stagger_delay_ms(i, 100))
            }),
            support_header: RevealSection::new(),
            support_cards: std::array::from_fn(|i| {
                RevealSection::new().with_delay_ms(stagger_delay_ms(i, 80))
            }),
            closing: RevealSection::new(),
        }
    }
}

impl CapabilitiesPage {
    pub fn show(&mut self, ui: &mut egui::Ui, palette: &SitePalette) -> Option<Route> {
        let mut go = None;

        self.banner.show(ui, |ui| {
            widgets::page_banner(ui, palette, &CAPABILITIES_HEADER);
        });

        // Overview
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    let overview_text = &mut self.overview_text;
                    let overview_plate = &mut self.overview_plate;
                    let go = &mut go;
                    widgets::two_column(
                        ui,
                        |ui| {
                            overview_text.show(ui, |ui| {
                                widgets::section_heading(ui, palette, &CAPABILITIES_OVERVIEW_HEADER);
                                ui.add_space(10.0);
                                ui.label(
                                    egui::RichText::new(CAPABILITIES_SERVICES_INTRO)
                                        .color(palette.heading_text)
                                        .strong()
                                        .size(14.0),
                                );
                                ui.add_space(8.0);
                                for service in CAPABILITIES_SERVICES {
                                    widgets::check_row(ui, palette, service, None);
                                    ui.add_space(6.0);
                                }
                                ui.add_space(8.0);
                                if ui
                                    .add(widgets::primary_button(
                                        palette,
                                        CAPABILITIES_OVERVIEW_CTA.label,
                                    ))
                                    .clicked()
                                {
                                    *go = Some(CAPABILITIES_OVERVIEW_CTA.to);
                                }
                            });
                        },
                        |ui| {
                            overview_plate.show(ui, |ui| {
                                widgets::illustration_panel(ui, palette, "Production floor", 320.0);
                            });
                        },
                    );
                });
            });

        // Machinery
        egui::Frame::new()
            .fill(palette.card_background)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.machinery_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &MACHINERY_HEADER);
                        });
                    });
                    ui.add_space(24.0);
                    let cards = &mut self.machine_cards;
                    widgets::card_grid(ui, 2, MACHINES.len(), |ui, i| {
                        cards[i].show(ui, |ui| {
                            let machine = &MACHINES[i];
                            widgets::card_frame(palette).show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    widgets::service_icon(ui, palette, machine.icon);
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new(machine.name)
                                            .color(palette.heading_text)
                                            .strong()
                                            .size(16.0),
                                    );
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                egui::RichText::new(format!("{:02}", i + 1))
                                                    .color(palette.card_stroke)
                                                    .strong()
                                                    .size(26.0),
                                            );
                                        },
                                    );
                                });
                                ui.add_space(8.0);
                                for spec in machine.specs {
                                    ui.label(
                                        egui::RichText::new(format!("•  {spec}"))
                                            .color(palette.muted_text)
                                            .size(13.0),
                                    );
                                    ui.add_space(3.0);
                                }
                            });
                        });
                    });
                });
            });

        // Supporting equipment
        egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                widgets::content_column(ui, |ui| {
                    self.support_header.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            widgets::section_heading(ui, palette, &SUPPORT_HEADER);
                        });
                    });
                    ui.add_space(24.0);
                    let cards = &mut self.support_cards;
                    widgets::card_grid(ui, 3, SUPPORT_STATIONS.len(), |ui, i| {
                        cards[i].show(ui, |ui| {
                            let station = &SUPPORT_STATIONS[i];
                            widgets::card_frame(palette).show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    egui::RichText::new(station.name)
                                        .color(palette.heading_text)
                                        .strong()
                                        .size(15.0),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(station.blurb)
                                        .color(palette.muted_text)
                                        .size(13.0),
                                );
                            });
                        });
                    });
                    ui.add_space(18.0);
                    let picked = self
                        .closing
                        .show(ui, |ui| widgets::cta_box(ui, palette, &CAPABILITIES_CTA));
                    if let Some(to) = picked {
                        go = Some(to);
                    }
                });
            });

        go
    }
}
