pub mod charset;
pub mod config;
pub mod error;
pub mod registry;
pub mod stream;
pub mod tamagotchi;
