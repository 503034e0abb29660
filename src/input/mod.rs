mod keymap;
mod router;

pub use keymap::{KeyInput, key_input};
pub use router::{Action, Dispatch, PointerTarget, route, route_pointer};
