use log::info;
use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::common::reg::log2_ceil;
use crate::core::arch::gpr::Gpr;
use crate::isa::format::InstFormat;

const DEFAULT_REG_COUNT: usize = 32;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_decode: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    #[serde(default = "default_reg_count")]
    pub reg_count: usize,

    #[serde(default)]
    pub hazard_ignores_x0: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reg_count: default_reg_count(),
            hazard_ignores_x0: false,
        }
    }
}

impl PipelineConfig {
    /// Bits carried by register index fields in pipeline bundles.
    pub fn reg_index_width(&self) -> u32 {
        log2_ceil(self.reg_count)
    }

    /// Bits carried by the format tag field in pipeline bundles.
    pub fn format_tag_width(&self) -> u32 {
        InstFormat::tag_width()
    }
}

impl Config {
    /// Parses and validates a TOML configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        info!(
            "Config: reg_count={} (index width {}), format tag width {}, hazard_ignores_x0={}",
            config.pipeline.reg_count,
            config.pipeline.reg_index_width(),
            config.pipeline.format_tag_width(),
            config.pipeline.hazard_ignores_x0
        );
        Ok(config)
    }

    /// Checks that the register file described by this config can be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Gpr::new(self.pipeline.reg_count).map(|_| ())
    }

    /// Builds the register file described by this config.
    pub fn build_register_file(&self) -> Result<Gpr, ConfigError> {
        Gpr::new(self.pipeline.reg_count)
    }
}

fn default_reg_count() -> usize {
    DEFAULT_REG_COUNT
}
