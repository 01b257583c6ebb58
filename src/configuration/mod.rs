pub mod factory;
pub mod settings;

pub use factory::create_logger;
pub use settings::{LoggerConfig, get_config_path, load_configuration, load_default_configuration};
