// Toolchain configuration for the external commands

/// Programs and arguments used to scaffold and set up the project.
///
/// The defaults reproduce the fixed behavior of the tool; nothing is read
/// from the environment or from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Package manager used for `create` and `install`
    pub npm: String,
    /// Package runner used for `tailwindcss init`
    pub npx: String,
    /// Package passed to `npm create`
    pub scaffold_package: String,
    /// Vite template selector
    pub template: String,
    /// Dev dependencies installed after the base install
    pub dev_dependencies: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        // npm and npx are batch scripts on Windows and can't be spawned bare
        let (npm, npx) = if cfg!(windows) {
            ("npm.cmd", "npx.cmd")
        } else {
            ("npm", "npx")
        };

        Self {
            npm: npm.to_string(),
            npx: npx.to_string(),
            scaffold_package: "vite@latest".to_string(),
            template: "react".to_string(),
            dev_dependencies: vec![
                "tailwindcss".to_string(),
                "postcss".to_string(),
                "autoprefixer".to_string(),
            ],
        }
    }
}
