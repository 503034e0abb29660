mod loader;
mod store;
mod types;

pub use loader::load;
pub use store::store_for_source;
pub use types::*;
