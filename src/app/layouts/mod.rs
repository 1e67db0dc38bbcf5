pub mod document;
pub mod frame;
pub mod navigation;
pub mod shell;
pub mod top_bar;

pub use document::DocumentHead;
pub use frame::Frame;
pub use navigation::Navigation;
pub use shell::Shell;
pub use top_bar::TopBar;
