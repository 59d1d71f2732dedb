pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::FormatOptions;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use rust_decimal::Decimal;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pack2csv")]
#[command(about = "Converts a strip-packing solution JSON into a submission CSV")]
pub struct CliConfig {
    /// Path to the solution JSON export
    #[arg(long, default_value = "output/final_solution.json")]
    pub input: String,

    /// Directory the submission file is written into
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Name of the submission file
    #[arg(long, default_value = "submission.csv")]
    pub file_name: String,

    /// Divisor applied to x/y before rounding (plain or scientific notation)
    #[arg(long, default_value = "1")]
    pub scale: String,

    /// Fractional digits in the output coordinates
    #[arg(long, default_value = "6")]
    pub decimals: u32,

    /// Load settings from a TOML file instead of individual flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn scale(&self) -> Result<Decimal> {
        validation::parse_scale("scale", &self.scale)
    }

    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            decimals: self.decimals,
            ..FormatOptions::default()
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("file_name", &self.file_name)?;
        validation::parse_scale("scale", &self.scale)?;
        // Decimal keeps at most 28 fractional digits.
        validation::validate_range("decimals", self.decimals, 0, 28)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input: "output/final_solution.json".to_string(),
            output_path: ".".to_string(),
            file_name: "submission.csv".to_string(),
            scale: "1".to_string(),
            decimals: 6,
            config: None,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn default_like_config_validates() {
        assert!(base_config().validate().is_ok());
        assert_eq!(base_config().scale().unwrap(), Decimal::ONE);
    }

    #[test]
    fn rejects_zero_scale() {
        let config = CliConfig {
            scale: "0".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_decimals() {
        let config = CliConfig {
            decimals: 40,
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn format_options_follow_decimals_flag() {
        let config = CliConfig {
            decimals: 3,
            ..base_config()
        };
        assert_eq!(config.format_options().decimals, 3);
        assert_eq!(config.format_options().text_guard, 's');
    }
}
