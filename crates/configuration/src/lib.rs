use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    Config, FallbackSummary, GaugeParams, Logging, Output, OutputFormat, SignalParams,
};

/// The file read by [`load_config`]. It is optional; defaults apply when it is absent.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `FXGAUGE_SIGNAL__MARGIN=0.05`.
pub const ENV_PREFIX: &str = "FXGAUGE";

/// Loads the application configuration from `config.toml` and the environment.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// deserializes it into our strongly-typed `Config` struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
        .add_source(env_source());
    finish(builder)
}

/// Same as [`load_config`] but with an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(env_source());
    finish(builder)
}

/// Parses a TOML document without consulting the environment.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    finish(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
