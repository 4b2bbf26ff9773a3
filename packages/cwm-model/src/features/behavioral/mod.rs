//! ObjectModel::Behavioral
//!
//! Operations, methods, parameters, interfaces and events.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardBehavioralPackage;
pub use ports::BehavioralPackage;
