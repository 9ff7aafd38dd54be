//! Configuration module.
//!
//! Card fonts, spacing and fallbacks are fixed configuration: they come from
//! built-in defaults, optionally overridden by a TOML file, environment
//! variables and command-line flags, in that order.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};
