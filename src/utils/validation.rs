// Pre-flight validation for project names and target directories

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use regex::Regex;

use crate::models::project_request::MAX_NAME_LENGTH;
use crate::utils::error::{InitError, Result};

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("project name pattern is valid"))
}

/// Validate a project name. Checks run in order and the first failure wins:
/// presence, allowed characters, then length.
pub fn validate_project_name(name: Option<&str>) -> Result<()> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(InitError::MissingName),
    };

    if !name_pattern().is_match(name) {
        return Err(InitError::InvalidName {
            name: name.to_string(),
        });
    }

    // Only ASCII can pass the pattern, so bytes == characters here
    if name.len() > MAX_NAME_LENGTH {
        return Err(InitError::NameTooLong {
            name: name.to_string(),
            length: name.len(),
        });
    }

    Ok(())
}

/// Make sure nothing named `name` exists under `parent`, and return the
/// path the project will be created at.
pub fn validate_target_available(parent: &Path, name: &str) -> Result<PathBuf> {
    let target = parent.join(name);

    // symlink_metadata so a dangling symlink still counts as taken
    if target.symlink_metadata().is_ok() {
        return Err(InitError::DirectoryExists { path: PathBuf::from(name) });
    }

    Ok(target)
}
