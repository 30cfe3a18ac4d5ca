pub mod constants;
pub mod green;
pub mod input;
pub mod priority;
pub mod report;
pub mod types;

pub use green::*;
pub use priority::*;
pub use types::*;
