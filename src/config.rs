use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::backend::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::prompt::{SamplingParams, ToneProfile};
use crate::retrieval::DEFAULT_TOP_K;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModerationConfig {
    /// Banned terms loaded into the in-memory store at startup
    pub banned_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key; never the key itself
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    pub tone: ToneProfile,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        let sampling = SamplingParams::default();
        Self {
            tone: ToneProfile::default(),
            temperature: sampling.temperature,
            max_output_tokens: sampling.max_output_tokens,
            top_p: sampling.top_p,
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".policypilot").join("config.toml"))
    }

    /// Sampling defaults assembled from the prompt section
    pub fn sampling_defaults(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.prompt.temperature,
            max_output_tokens: self.prompt.max_output_tokens,
            top_p: self.prompt.top_p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.model, "gpt-4");
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.prompt.tone, ToneProfile::Helpful);
        assert_eq!(config.prompt.temperature, 0.2);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.retrieval.top_k = 5;
        config.prompt.tone = ToneProfile::Formal;

        let toml_string = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.retrieval.top_k, 5);
        assert_eq!(deserialized.prompt.tone, ToneProfile::Formal);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[retrieval]\ntop_k = 2\n").unwrap();
        assert_eq!(config.retrieval.top_k, 2);
        assert_eq!(config.backend.model, "gpt-4");
        assert!(config.moderation.banned_terms.is_empty());
    }

    #[test]
    fn test_sampling_defaults_from_prompt_section() {
        let config = Config::default();
        let sampling = config.sampling_defaults();
        assert_eq!(sampling.max_output_tokens, 1000);
        assert_eq!(sampling.top_p, 0.9);
    }
}
