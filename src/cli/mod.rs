//! CLI command handlers for BrandKit.
//!
//! Every feature of the studio is also scriptable from the command line:
//! color conversion, vibe lookup, logo rendering, and kit export.

pub mod color;
pub mod common;
pub mod config;
pub mod kit;
pub mod logo;
#[cfg(feature = "web")]
pub mod serve;
pub mod style;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use kit::KitArgs;
pub use logo::LogoArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
pub use style::StyleArgs;
