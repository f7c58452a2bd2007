pub mod app;
#[cfg(test)]
mod app_tests;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod settings;
pub mod status;

pub use app::App;
pub use event::AppEvent;
pub use render_state::{Display, RenderState};
pub use status::{Status, StatusKind};
