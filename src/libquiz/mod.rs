pub mod bank;
pub mod engine;
pub mod question;
pub mod settings;
