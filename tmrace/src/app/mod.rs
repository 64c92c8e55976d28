pub mod activity;
#[allow(clippy::module_inception)]
pub mod app;
pub mod event;

pub use activity::{Activities, Activity, ActivityHandler, Change};
pub use app::{App, AppData, AppError};
pub use event::Event;
