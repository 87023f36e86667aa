pub mod toml_config;

pub use toml_config::{LogFormat, PlannerConfig};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "diet-planner")]
#[command(about = "Web form that predicts a fitness category and serves a diet and workout plan")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Address to listen on, e.g. 127.0.0.1:5000")]
    pub bind: Option<String>,

    #[arg(long, help = "Path to the exported classifier (JSON)")]
    pub classifier: Option<String>,

    #[arg(long, help = "Path to the exported label encoder (JSON)")]
    pub label_encoder: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_file(path)?,
            None => PlannerConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(path) = &self.classifier {
            config.model.classifier_path = path.clone();
        }
        if let Some(path) = &self.label_encoder {
            config.model.label_encoder_path = path.clone();
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }

        Ok(config)
    }
}
