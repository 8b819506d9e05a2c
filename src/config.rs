//! Library configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`I4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use int4d_inspector::{Inspectable, Inspector, LayoutConfig};
use int4d_math::{MathResult, NumberFormat, NumberLocale, Vec4i};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Int4dConfig {
    /// How vector components are rendered as text
    #[serde(default)]
    pub format: FormatConfig,
    /// Tolerances for comparing against float coordinates
    #[serde(default)]
    pub compare: CompareConfig,
    /// Inspector row layout
    #[serde(default)]
    pub inspector: LayoutConfig,
}

impl Int4dConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`I4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            log::debug!("Merging config file {}", default_path.display());
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            log::debug!("Merging config file {}", user_path.display());
            figment = figment.merge(Toml::file(&user_path));
        }

        // I4D_FORMAT__PATTERN=N2 -> format.pattern = "N2"
        figment = figment.merge(Env::prefixed("I4D_").split("__"));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        log::info!(
            "Loaded configuration from {} (format pattern '{}')",
            config_dir.display(),
            config.format.pattern
        );
        Ok(config)
    }

    /// Bind an inspector to `target` using the configured number format
    pub fn inspector<'a, T: Inspectable>(&self, target: &'a mut T) -> MathResult<Inspector<'a, T>> {
        let format = self.format.number_format()?;
        Ok(Inspector::new(target).with_format(format, self.format.locale()))
    }
}

/// Text formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Numeric pattern applied to each component (`F0`, `N2`, `D4`, `X8`, ...)
    pub pattern: String,
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let invariant = NumberLocale::INVARIANT;
        Self {
            pattern: "F0".to_string(),
            decimal_separator: invariant.decimal_separator,
            group_separator: invariant.group_separator,
            negative_sign: invariant.negative_sign,
        }
    }
}

impl FormatConfig {
    pub fn locale(&self) -> NumberLocale {
        NumberLocale {
            decimal_separator: self.decimal_separator,
            group_separator: self.group_separator,
            negative_sign: self.negative_sign,
        }
    }

    /// Parsed [`pattern`](Self::pattern); empty means `F0`
    pub fn number_format(&self) -> MathResult<NumberFormat> {
        if self.pattern.trim().is_empty() {
            Ok(NumberFormat::default())
        } else {
            NumberFormat::parse(&self.pattern)
        }
    }

    /// Render `v` as `"(x, y, z, w)"` with these settings
    pub fn format(&self, v: Vec4i) -> MathResult<String> {
        v.format_with(&self.pattern, &self.locale())
    }
}

/// Float comparison tolerances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Tolerance relative to the larger magnitude
    pub relative_epsilon: f32,
    /// Multiple of `f32::EPSILON` used as the absolute floor
    pub absolute_epsilon_scale: f32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            relative_epsilon: 1e-6,
            absolute_epsilon_scale: 8.0,
        }
    }
}

impl CompareConfig {
    /// Whether every component of `v` approximately equals `other`
    pub fn approx_eq(&self, v: Vec4i, other: [f32; 4]) -> bool {
        v.approx_eq_f32_with(other, self.relative_epsilon, self.absolute_epsilon_scale)
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
