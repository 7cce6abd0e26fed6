// farm/state/mod.rs

pub mod global;
pub mod pool;
pub mod position;

pub use global::*;
pub use pool::*;
pub use position::*;
