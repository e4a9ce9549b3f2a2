// Static files written over the scaffolded project

use std::path::Path;

/// A file whose content is fixed and overwritten verbatim.
///
/// Bodies are embedded from `templates/` at build time. Downstream tooling
/// parses them (module syntax, class names, `@tailwind` directives), so they
/// must stay byte-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFile {
    TailwindConfig,
    Stylesheet,
    ExampleComponent,
    App,
}

impl TemplateFile {
    /// Every template, in the order it is written
    pub const ALL: [Self; 4] = [
        Self::TailwindConfig,
        Self::Stylesheet,
        Self::ExampleComponent,
        Self::App,
    ];

    /// Path relative to the project root
    pub fn relative_path(self) -> &'static Path {
        Path::new(match self {
            Self::TailwindConfig => "tailwind.config.js",
            Self::Stylesheet => "src/index.css",
            Self::ExampleComponent => "src/components/Example.jsx",
            Self::App => "src/App.jsx",
        })
    }

    pub const fn contents(self) -> &'static str {
        match self {
            Self::TailwindConfig => include_str!("../../templates/tailwind.config.js"),
            Self::Stylesheet => include_str!("../../templates/src/index.css"),
            Self::ExampleComponent => include_str!("../../templates/src/components/Example.jsx"),
            Self::App => include_str!("../../templates/src/App.jsx"),
        }
    }
}
