pub mod adder;
pub mod config;
pub mod describer;
pub mod greeter;
pub mod point;

pub use adder::{add, checked_add};
pub use config::MAX_VALUE;
pub use describer::{describe_all, Describer};
pub use greeter::{hello, write_hello, GREETING};
pub use point::Point;
