pub mod input_render;
mod input_state;
pub mod list_render;

pub use input_state::InputState;
