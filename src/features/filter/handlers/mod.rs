mod filter_handler;

pub use filter_handler::*;
