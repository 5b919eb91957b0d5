pub mod config;
pub mod path_processing;

pub use config::{CONFIG_PATH_ENV, GeneratorConfig, default_config_path};
pub use path_processing::expand_tilde;
