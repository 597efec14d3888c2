//! One state struct per page, plus the dispatcher that builds and draws
//! them.

use crossbeam_channel::Sender;
use eframe::egui;
use site_content::Route;

use crate::relay_bridge::commands::RelayCommand;
use crate::ui::theme::SitePalette;

pub mod about;
pub mod capabilities;
pub mod contact;
pub mod home;
pub mod industries;

pub use about::AboutPage;
pub use capabilities::CapabilitiesPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use industries::IndustriesPage;

/// The page currently on screen, including its reveal latches and any
/// form draft. Navigating away drops the whole thing, so the next visit
/// starts from scratch.
pub enum PageState {
    Home(HomePage),
    About(AboutPage),
    Capabilities(CapabilitiesPage),
    Industries(IndustriesPage),
    Contact(ContactPage),
}

impl PageState {
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Self::Home(HomePage::default()),
            Route::About => Self::About(AboutPage::default()),
            Route::Capabilities => Self::Capabilities(CapabilitiesPage::default()),
            Route::Industries => Self::Industries(IndustriesPage::default()),
            Route::Contact => Self::Contact(ContactPage::default()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Home(_) => Route::Home,
            Self::About(_) => Route::About,
            Self::Capabilities(_) => Route::Capabilities,
            Self::Industries(_) => Route::Industries,
            Self::Contact(_) => Route::Contact,
        }
    }

    /// Draws the page body. Returns the route of any in-page link the
    /// visitor clicked.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        palette: &SitePalette,
        cmd_tx: &Sender<RelayCommand>,
    ) -> Option<Route> {
        match self {
            Self::Home(page) => page.show(ui, palette),
            Self::About(page) => page.show(ui, palette),
            Self::Capabilities(page) => page.show(ui, palette),
            Self::Industries(page) => page.show(ui, palette),
            Self::Contact(page) => page.show(ui, palette, cmd_tx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::form::SubmissionPhase;

    #[test]
    fn every_route_builds_the_matching_page() {
        for route in Route::ALL {
            assert_eq!(PageState::for_route(route).route(), route);
        }
    }

    #[test]
    fn a_fresh_contact_page_has_an_idle_form() {
        match PageState::for_route(Route::Contact) {
            PageState::Contact(page) => {
                assert_eq!(page.form.phase(), SubmissionPhase::Idle);
                assert!(!page.form.can_submit(), "an empty draft must not be submittable");
            }
            _ => panic!("contact route must build the contact page"),
        }
    }
}
