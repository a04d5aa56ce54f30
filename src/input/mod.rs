mod keyboard;
mod mouse;

pub use keyboard::{Intent, key_matches, map_key_to_intent, to_qwerty};
pub use mouse::map_mouse_to_intent;
