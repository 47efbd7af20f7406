pub mod address;
pub mod hello_state;

pub use address::*;
pub use hello_state::*;
