pub mod control;
pub mod learning;
pub mod stoch;

pub use control::*;
pub use learning::*;
pub use stoch::*;
