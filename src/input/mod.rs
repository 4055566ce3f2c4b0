mod keys;
mod text;

pub use keys::KeyBindings;
pub use text::{axis_step, parse_controls, Command, TOKEN_TABLE};
