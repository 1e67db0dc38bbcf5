// Domain models (navigation entities)
// Pure Rust, no framework dependencies

pub mod icon;
pub mod navigation;

pub use icon::Icon;
pub use navigation::{ItemRef, NavigationConfig, NavigationItem, NavigationSection, SubNavigationItem};
