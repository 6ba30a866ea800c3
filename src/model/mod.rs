pub mod person;
pub mod roster;

pub use person::*;
pub use roster::*;
