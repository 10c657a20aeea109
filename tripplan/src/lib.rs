pub mod app;
pub mod client;
