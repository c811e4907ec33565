//! Shared UI crate for Phenoview. Analysis, rendering and the page views live
//! here; the `web` and `desktop` crates only add routing and launch.

pub mod analysis;
pub mod bloom;
pub mod chart;
pub mod core;
pub mod i18n;
pub mod map;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
