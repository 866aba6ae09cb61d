//! Small instructional components: an integer calculator, a person record
//! with validated mutation, and control-flow demonstrations.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod control_flow;
pub mod error;
pub mod logging;
pub mod person;

pub use calculator::Calculator;
pub use config::Settings;
pub use control_flow::{Weekday, classify_sign, count_range, count_up, day_name, name_day};
pub use error::{Error, Result};
pub use person::Person;
