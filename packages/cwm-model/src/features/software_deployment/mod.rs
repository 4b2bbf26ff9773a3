//! Foundation::SoftwareDeployment
//!
//! Sites, machines, software systems, components and the data
//! provider/manager connections between deployed components.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardSoftwareDeploymentPackage;
pub use ports::SoftwareDeploymentPackage;
