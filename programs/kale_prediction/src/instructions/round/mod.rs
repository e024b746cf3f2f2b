pub mod resolve;
pub mod start_round;

pub use resolve::*;
pub use start_round::*;
