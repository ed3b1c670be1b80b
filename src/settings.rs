use std::path::PathBuf;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use encoder::DigestAlgorithm;
use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;
use crate::options::{GenerateOption, AUTO_UUID_VERSION};

/// Base name of the optional settings file (`hashid.toml`, `.yaml`, `.json`).
pub const SETTINGS_FILE: &str = "hashid";

/// Prefix for environment overrides, e.g. `HASHID_ALGORITHM=sha1`.
pub const ENV_PREFIX: &str = "HASHID";

/// Defaults for the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Digest algorithm
    #[serde(default)]
    pub algorithm: DigestAlgorithm,

    /// HMAC key, only used with the `hmac` algorithm
    #[serde(default)]
    pub hmac_key: Option<String>,

    /// Normalize input before hashing
    #[serde(default = "default_true")]
    pub normalize: bool,

    /// UUID version override, 0 for automatic
    #[serde(default)]
    pub uuid_version: u8,

    /// Custom character map file
    #[serde(default)]
    pub charmap: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::default(),
            hmac_key: None,
            normalize: default_true(),
            uuid_version: AUTO_UUID_VERSION,
            charmap: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from `hashid.*` in the working directory and `HASHID_*`
    /// environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(env_source());
        Self::from_builder(builder)
    }

    /// Resolve settings from an arbitrary source stack.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Command-line flags win over file and environment values.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(algorithm) = args.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(key) = &args.key {
            self.hmac_key = Some(key.clone());
        }
        if args.no_normalize {
            self.normalize = false;
        }
        if let Some(version) = args.uuid_version {
            self.uuid_version = version;
        }
        if let Some(path) = &args.charmap {
            self.charmap = Some(path.clone());
        }
    }

    /// Ordered generation options equivalent to these settings.
    ///
    /// The key is only passed on when HMAC is selected; a version of 0 leaves
    /// the algorithm's implied version in place.
    pub fn into_options(self) -> Vec<GenerateOption> {
        let mut options = vec![
            GenerateOption::Algorithm(self.algorithm),
            GenerateOption::Normalization(self.normalize),
        ];
        if self.algorithm.requires_key()
            && let Some(key) = self.hmac_key
        {
            options.push(GenerateOption::HmacKey(key.into_bytes()));
        }
        if self.uuid_version != AUTO_UUID_VERSION {
            options.push(GenerateOption::UuidVersion(self.uuid_version));
        }
        options
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}
