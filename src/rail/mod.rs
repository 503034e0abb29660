mod navigation;
mod offset;
mod state;

pub use offset::{RailGeometry, compute_offset};
pub use state::{LaunchSignal, RailState, Selection};
