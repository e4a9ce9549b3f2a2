// Services module for the initialization workflow
pub mod command_runner;
pub mod project_initializer;
pub mod template_writer;
