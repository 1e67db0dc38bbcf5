// Custom Dioxus hooks
pub mod use_i18n;
pub mod use_mobile_navigation;

pub use use_i18n::use_i18n;
pub use use_mobile_navigation::{use_mobile_navigation, MobileNavigation};
