pub mod marker;
pub mod state;

pub use marker::*;
pub use state::*;
