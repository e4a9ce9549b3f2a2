// Ordered steps of the initialization sequence

use std::fmt;

/// One step of project initialization, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitStep {
    /// `npm create vite@latest <name> -- --template react`
    Scaffold,
    /// Resolve the freshly scaffolded directory as the working root
    EnterProject,
    /// `npm install`
    InstallDependencies,
    /// `npm install -D tailwindcss postcss autoprefixer`
    InstallTailwind,
    /// `npx tailwindcss init -p`
    InitTailwind,
    WriteTailwindConfig,
    WriteStylesheet,
    CreateComponentsDir,
    WriteExampleComponent,
    WriteApp,
}

impl InitStep {
    /// All steps in the order they run
    pub const ALL: [Self; 10] = [
        Self::Scaffold,
        Self::EnterProject,
        Self::InstallDependencies,
        Self::InstallTailwind,
        Self::InitTailwind,
        Self::WriteTailwindConfig,
        Self::WriteStylesheet,
        Self::CreateComponentsDir,
        Self::WriteExampleComponent,
        Self::WriteApp,
    ];

    /// Human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Scaffold => "Scaffolding Vite project",
            Self::EnterProject => "Entering project directory",
            Self::InstallDependencies => "Installing dependencies",
            Self::InstallTailwind => "Installing Tailwind CSS",
            Self::InitTailwind => "Initializing Tailwind CSS",
            Self::WriteTailwindConfig => "Writing tailwind.config.js",
            Self::WriteStylesheet => "Writing src/index.css",
            Self::CreateComponentsDir => "Creating src/components",
            Self::WriteExampleComponent => "Writing src/components/Example.jsx",
            Self::WriteApp => "Writing src/App.jsx",
        }
    }

    /// Whether this step spawns an external program
    pub const fn is_external(self) -> bool {
        matches!(
            self,
            Self::Scaffold | Self::InstallDependencies | Self::InstallTailwind | Self::InitTailwind
        )
    }
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
