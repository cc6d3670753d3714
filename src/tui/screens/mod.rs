//! TUI screen implementations.

pub mod help;
pub mod home;
pub mod register;

pub use help::{HelpState, draw_help};
pub use home::{HomeState, draw_home};
pub use register::{RegisterState, draw_register};
