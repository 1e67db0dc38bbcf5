pub mod app_provider;
pub mod card;

pub use app_provider::AppProvider;
pub use card::Card;
