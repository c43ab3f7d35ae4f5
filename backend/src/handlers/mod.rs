pub mod certificates;
pub mod health;

pub use certificates::*;
pub use health::*;
