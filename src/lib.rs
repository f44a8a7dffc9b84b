pub mod app;
pub mod core;
pub mod manifest;
pub mod poller;
