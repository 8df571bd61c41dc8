pub mod auth_shell;
pub mod context;

pub use auth_shell::AuthShell;
pub use context::AuthServices;
