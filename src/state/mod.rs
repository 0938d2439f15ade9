//! Application state module

mod app_state;
mod celebration_state;
mod forms;

pub use app_state::*;
pub use celebration_state::*;
pub use forms::*;
