// react-tailwind-template
// Scaffolds a Vite + React project wired up for Tailwind CSS

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::init_step::InitStep;
pub use models::project_request::ProjectRequest;
pub use models::template::TemplateFile;
pub use services::command_runner::{CommandOutcome, CommandRunner, Invocation, SystemCommandRunner};
pub use services::project_initializer::{InitReport, ProjectInitializer};
pub use utils::error::{InitError, UserError};
