pub mod errors;
pub mod i18n;
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
