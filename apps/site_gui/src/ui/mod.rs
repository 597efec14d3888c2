//! UI layer: app shell, site chrome, pages, reveal animation, theme, and
//! shared widgets.

pub mod app;
pub mod chrome;
pub mod pages;
pub mod reveal;
pub mod theme;
pub mod widgets;

pub use app::SiteApp;
