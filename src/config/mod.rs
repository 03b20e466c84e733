//! Configuration for openapi-diff.
//!
//! Configuration is plain serde data that can be built in code or loaded
//! from a YAML file discovered in the usual places.
//!
//! ```rust,ignore
//! use openapi_diff::config::{load_or_default, AppConfig};
//!
//! let (config, loaded_from) = load_or_default(None);
//! let reporter = config.reporter();
//! ```
//!
//! # Configuration File
//!
//! Place a `.openapi-diff.yaml` file in your project root or
//! `~/.config/openapi-diff/`:
//!
//! ```yaml
//! report:
//!   escape_markdown: false
//! ```

pub mod file;
mod types;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::AppConfig;
