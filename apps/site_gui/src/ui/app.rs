//! Top-level eframe app: owns the channel ends, the page on screen, and
//! the theme.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use site_content::Route;

use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::controller::form::SubmissionPhase;
use crate::relay_bridge::commands::RelayCommand;
use crate::ui::chrome;
use crate::ui::pages::PageState;
use crate::ui::theme::{self, SitePalette};

pub struct SiteApp {
    cmd_tx: Sender<RelayCommand>,
    ui_rx: Receiver<UiEvent>,
    page: PageState,
    palette: SitePalette,
    text_scale: f32,
    theme_applied: bool,
    reset_scroll: bool,
}

impl SiteApp {
    pub fn new(
        settings: &Settings,
        initial_route: Route,
        cmd_tx: Sender<RelayCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            page: PageState::for_route(initial_route),
            palette: theme::site_palette(),
            text_scale: settings.text_scale,
            theme_applied: false,
            reset_scroll: true,
        }
    }

    /// Swaps the page for `route`. Picking the page already on screen
    /// only rewinds the scroll position.
    fn navigate(&mut self, route: Route) {
        if self.page.route() != route {
            tracing::debug!(
                from = self.page.route().as_path(),
                to = route.as_path(),
                "navigating"
            );
            self.page = PageState::for_route(route);
        }
        self.reset_scroll = true;
    }

    fn process_ui_events(&mut self, now_secs: f64) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerFailed { reason } => {
                    tracing::error!(reason = %reason, "relay worker failed");
                }
                UiEvent::SubmissionSettled { token, outcome } => match &mut self.page {
                    PageState::Contact(page) => {
                        page.form.apply_outcome(token, outcome, now_secs);
                    }
                    _ => {
                        tracing::debug!(token, "dropping submission outcome; the form is gone");
                    }
                },
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = theme::site_visuals(&self.palette);
        style.text_styles = theme::scaled_text_styles(self.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        ctx.set_style(style);
        self.theme_applied = true;
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        let now = ctx.input(|i| i.time);
        self.process_ui_events(now);
        if let PageState::Contact(page) = &mut self.page {
            page.form.tick(now);
        }

        let mut go = chrome::show_header(ctx, &self.palette, self.page.route());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.page_background))
            .show(ctx, |ui| {
                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if std::mem::take(&mut self.reset_scroll) {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }
                scroll.show(ui, |ui| {
                    if let Some(to) = self.page.show(ui, &self.palette, &self.cmd_tx) {
                        go = Some(to);
                    }
                    if let Some(to) = chrome::show_footer(ui, &self.palette) {
                        go = Some(to);
                    }
                });
            });

        if let Some(route) = go {
            self.navigate(route);
        }

        // The status banner reverts on a timer, so keep frames coming
        // while the form has anything pending.
        if let PageState::Contact(page) = &self.page {
            if page.form.phase() != SubmissionPhase::Idle {
                ctx.request_repaint_after(std::time::Duration::from_millis(100));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::SubmissionOutcome;
    use crossbeam_channel::bounded;

    fn test_app(route: Route) -> (SiteApp, Receiver<RelayCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let settings = Settings::default();
        (SiteApp::new(&settings, route, cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    fn fill_draft(form: &mut crate::controller::form::ContactFormController) {
        form.inquiry.name = "Jane Doe".into();
        form.inquiry.email = "jane@example.com".into();
        form.inquiry.message = "Need a quote".into();
    }

    #[test]
    fn navigating_swaps_the_page_and_rewinds_the_scroll() {
        let (mut app, _cmd_rx, _ui_tx) = test_app(Route::Home);
        app.reset_scroll = false;
        app.navigate(Route::About);
        assert_eq!(app.page.route(), Route::About);
        assert!(app.reset_scroll);
    }

    #[test]
    fn navigating_to_the_current_page_only_rewinds_the_scroll() {
        let (mut app, _cmd_rx, _ui_tx) = test_app(Route::About);
        app.reset_scroll = false;
        app.navigate(Route::About);
        assert_eq!(app.page.route(), Route::About);
        assert!(app.reset_scroll);
    }

    #[test]
    fn settled_outcomes_reach_the_contact_form() {
        let (mut app, cmd_rx, ui_tx) = test_app(Route::Contact);
        let cmd_tx = app.cmd_tx.clone();
        match &mut app.page {
            PageState::Contact(page) => {
                fill_draft(&mut page.form);
                page.form.submit(&cmd_tx, 1.0);
            }
            _ => panic!("contact route must build the contact page"),
        }
        let RelayCommand::SubmitInquiry { token, .. } =
            cmd_rx.try_recv().expect("a submission should be queued");
        ui_tx
            .try_send(UiEvent::SubmissionSettled {
                token,
                outcome: SubmissionOutcome::Delivered,
            })
            .expect("event queue has room");
        app.process_ui_events(2.0);
        match &app.page {
            PageState::Contact(page) => {
                assert_eq!(page.form.phase(), SubmissionPhase::Succeeded);
            }
            _ => panic!("page should not have changed"),
        }
    }

    #[test]
    fn outcomes_after_leaving_the_contact_page_are_dropped() {
        let (mut app, cmd_rx, ui_tx) = test_app(Route::Contact);
        let cmd_tx = app.cmd_tx.clone();
        if let PageState::Contact(page) = &mut app.page {
            fill_draft(&mut page.form);
            page.form.submit(&cmd_tx, 1.0);
        }
        let RelayCommand::SubmitInquiry { token, .. } =
            cmd_rx.try_recv().expect("a submission should be queued");
        app.navigate(Route::Home);
        ui_tx
            .try_send(UiEvent::SubmissionSettled {
                token,
                outcome: SubmissionOutcome::Delivered,
            })
            .expect("event queue has room");
        app.process_ui_events(2.0);
        assert_eq!(app.page.route(), Route::Home);
    }

    #[test]
    fn worker_failures_do_not_disturb_the_page() {
        let (mut app, _cmd_rx, ui_tx) = test_app(Route::Home);
        ui_tx
            .try_send(UiEvent::WorkerFailed {
                reason: "no runtime".into(),
            })
            .expect("event queue has room");
        app.process_ui_events(0.0);
        assert_eq!(app.page.route(), Route::Home);
    }
}
