mod manager;

pub use manager::{
    CacheConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_SOURCE, DEFAULT_TARGET,
    ResolveOptions, ResolvedConfig, TrcConfig, resolve_config,
};
