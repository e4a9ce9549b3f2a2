// The project a user asked for

use std::fmt;

use crate::utils::error::Result;
use crate::utils::validation::validate_project_name;

/// Longest accepted project name
pub const MAX_NAME_LENGTH: usize = 50;

/// A validated request to create a project.
///
/// Holding one means the name is present, matches `^[a-z0-9-]+$` and is at
/// most [`MAX_NAME_LENGTH`] characters. Whether the target directory is free
/// is checked separately, right before scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
}

impl ProjectRequest {
    /// Validate the raw command-line argument
    pub fn new(name: Option<&str>) -> Result<Self> {
        validate_project_name(name)?;

        Ok(Self {
            name: name.unwrap_or_default().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProjectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}
