pub mod highlight;
pub mod input_render;
mod input_state;

pub use highlight::{Highlight, highlight_prefix};
pub use input_state::{EMPTY_SUBMIT_MESSAGE, MAX_VISIBLE_SUGGESTIONS, SearchInput};
