//! Routes, page copy, and company facts for the Canada Sheet Metal site.
//!
//! Everything here is static data: the GUI renders these tables, the tools
//! binary prints them. Keeping the copy typed and in one crate means the
//! pages themselves stay declarative.

pub mod company;
pub mod pages;
pub mod routes;

pub use routes::{Route, RouteParseError};
