use serde::Deserialize;

use crate::error::AppError;
use crate::stream::{DecodeOptions, ErrorAction, DEFAULT_OUTPUT_CAPACITY, DEFAULT_REPLACEMENT};
use crate::tamagotchi::TAMAGOTCHI_MIX;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub decoder: DecoderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    pub charset: String,
    pub on_unmappable: ErrorAction,
    pub on_truncated: ErrorAction,
    pub replacement: String,
    pub output_capacity: usize,
    pub chunk_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            charset: TAMAGOTCHI_MIX.to_string(),
            on_unmappable: ErrorAction::Report,
            on_truncated: ErrorAction::Report,
            replacement: DEFAULT_REPLACEMENT.to_string(),
            output_capacity: DEFAULT_OUTPUT_CAPACITY,
            chunk_size: 4096,
        }
    }
}

impl DecoderConfig {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            on_unmappable: self.on_unmappable,
            on_truncated: self.on_truncated,
            replacement: self.replacement.clone(),
            output_capacity: self.output_capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_file(path: &str) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
