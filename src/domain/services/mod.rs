// Domain services (pure shell logic)

pub mod mobile_nav;
pub mod selection;

pub use mobile_nav::{DismissBehavior, MobileNavState, NavTrigger};
pub use selection::{Selection, active_item, normalize_path, resolve_selection};
