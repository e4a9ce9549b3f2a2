// Writes the fixed template files into a project root

use std::path::{Path, PathBuf};

use crate::models::template::TemplateFile;
use crate::utils::fs_utils::{ensure_directory_exists, overwrite_file};

/// Writes [`TemplateFile`]s relative to one project root
#[derive(Debug, Clone)]
pub struct TemplateWriter {
    project_root: PathBuf,
}

impl TemplateWriter {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Overwrite a template file with its fixed content.
    ///
    /// The parent directory must already exist; the scaffolder creates `src`
    /// and [`Self::ensure_components_dir`] creates `src/components`.
    pub fn write(&self, template: TemplateFile) -> std::io::Result<PathBuf> {
        let path = self.project_root.join(template.relative_path());
        overwrite_file(&path, template.contents())?;
        tracing::debug!(path = %path.display(), "wrote template");
        Ok(path)
    }

    /// Create `src/components` if it is missing
    pub fn ensure_components_dir(&self) -> std::io::Result<PathBuf> {
        let dir = self.project_root.join("src").join("components");
        ensure_directory_exists(&dir)?;
        Ok(dir)
    }
}
