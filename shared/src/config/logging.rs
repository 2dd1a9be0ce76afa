//! Log output defaults

use super::Environment;

/// Log output defaults, used when `RUST_LOG` is unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `env_logger` filter directives
    pub default_filter: String,

    /// Prefix each record with the emitting module
    pub module_path: bool,
}

impl LoggingConfig {
    /// Defaults for `environment`
    ///
    /// Token issue and rejection outcomes are `debug` events in `ts_core`,
    /// so they only show outside production. Startup warnings (ephemeral
    /// signing key, disabled credential check) and request logs stay at
    /// `info` everywhere.
    pub fn for_environment(environment: Environment) -> Self {
        let (default_filter, module_path) = match environment {
            Environment::Development => ("info,ts_core=debug,ts_api=debug", true),
            Environment::Staging => ("info,ts_core=debug", false),
            Environment::Production => ("info", false),
        };

        Self {
            default_filter: default_filter.to_string(),
            module_path,
        }
    }
}
