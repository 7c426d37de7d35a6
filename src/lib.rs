pub mod config;
pub mod error;
pub mod i18n;
pub mod markup;
pub mod security;
pub mod server;
