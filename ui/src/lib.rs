//! Shared UI crate for Dossier. The dashboard, its chart geometry and the
//! localized chrome live here; platform crates only launch and provide context.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
