use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ccrm")]
#[command(about = "Campus course records manager")]
pub struct CliConfig {
    /// Optional TOML configuration file; its values replace the flags below.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./data")]
    pub data_folder: String,

    /// Per-term credit cap enforced on enrollment.
    #[arg(long, default_value = "18")]
    pub max_credits: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Skip the sample data seeded at startup")]
    pub no_seed: bool,
}

impl ConfigProvider for CliConfig {
    fn data_folder(&self) -> &str {
        &self.data_folder
    }

    fn max_credits(&self) -> u32 {
        self.max_credits
    }

    fn seed_sample_data(&self) -> bool {
        !self.no_seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_folder", &self.data_folder)?;
        validate_range("max_credits", self.max_credits, 1, 60)?;
        Ok(())
    }
}
