//! Python requirements file resolution

pub mod config;
pub mod line;
pub mod resolver;

pub use line::{classify, package_identifier, RequirementLine};
pub use resolver::{resolve, RequirementSet};
