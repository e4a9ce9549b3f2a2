// Models module for data structures
pub mod init_step;
pub mod project_request;
pub mod template;
