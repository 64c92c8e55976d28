pub mod app;
pub mod constants;
pub mod helpers;
pub mod logging;
pub mod race;
pub mod renderer;
pub mod settings;
pub mod ui;
