pub mod home;
pub mod page;

pub use home::Home;
pub use page::Page;
