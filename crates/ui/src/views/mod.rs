mod render;
mod state;

pub use render::{render_screen, render_state, render_summary};
pub use state::{ViewError, ViewState, view_state_from_load};
