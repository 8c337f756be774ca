use shadow_rs::shadow;

shadow!(build);

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod event;
pub mod history;
pub mod input;
pub mod logging;
pub mod service;
pub mod settings_form;
pub mod status;
pub mod surface;
pub mod ui;
pub mod version;
