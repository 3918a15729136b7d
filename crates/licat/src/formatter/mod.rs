//! Document output for composed cards.

mod html;
mod text;

pub use html::{card_html, escape, format_html};
pub use text::format_text;
