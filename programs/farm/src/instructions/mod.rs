// farm/instructions/mod.rs

pub mod admin;
pub mod depositor;
pub mod open;

pub use admin::*;
pub use depositor::*;
pub use open::*;
