//! CLI command implementations.

mod check;
mod list;
mod render;

pub use check::{run_check, CheckArgs};
pub use list::{run_list, ListArgs};
pub use render::{run_render, RenderArgs};
