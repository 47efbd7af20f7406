pub mod hello_write;

pub use hello_write::*;
