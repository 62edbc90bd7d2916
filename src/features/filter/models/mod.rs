mod selection;

pub use selection::{Level, SelectionState};
