//! Configuration for twinswitch switches.
//!
//! A [`SwitchConfig`] holds the attributes a switch is constructed from
//! (colors, initial selection, padding, touch slop), usually read from a
//! TOML file. Resolution never fails: malformed or missing values fall back
//! to defaults with a warning. [`SwitchConfig::resolve_strict`] is available
//! for callers that want to reject bad input instead.
//!
//! # Example
//!
//! ```rust,no_run
//! use twinswitch_config::{SwitchConfig, paths};
//!
//! let config = paths::find_config()
//!     .map(SwitchConfig::load_or_default)
//!     .unwrap_or_default();
//!
//! let switch = config.resolve().build(());
//! println!("starts on {}", switch.selected());
//! ```

mod error;
mod switch_config;

/// Platform-specific config file location.
pub mod paths;

pub use error::ConfigError;
pub use paths::{default_config_path, ensure_user_config_dir, find_config, user_config_dir};
pub use switch_config::{PaddingConfig, ResolvedConfig, SwitchConfig};
