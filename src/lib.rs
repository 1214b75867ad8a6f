/// djdeploy
///
/// Utilities behind the Django deployment assistant: requirements.txt
/// resolution, Django project introspection, and crash reporting.
pub mod cli;
pub mod crash;
pub mod error;
pub mod logging;
pub mod requirements;
pub mod skeleton;

pub use error::{Error, Result};
pub use requirements::{resolve, RequirementSet};
