use crate::core::ConfigProvider;
use crate::domain::model::FormatOptions;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub transform: Option<TransformConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Divisor for x/y, as text so scientific notation survives.
    pub scale: Option<String>,
    pub decimals: Option<u32>,
    pub text_guard: Option<char>,
    pub id_pad_width: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left in place so validation can flag them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    fn scale_text(&self) -> &str {
        self.transform
            .as_ref()
            .and_then(|t| t.scale.as_deref())
            .unwrap_or("1")
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn file_name(&self) -> &str {
        self.load.file_name.as_deref().unwrap_or("submission.csv")
    }

    fn scale(&self) -> Result<Decimal> {
        validation::parse_scale("transform.scale", self.scale_text())
    }

    fn format_options(&self) -> FormatOptions {
        let defaults = FormatOptions::default();
        match &self.transform {
            Some(transform) => FormatOptions {
                decimals: transform.decimals.unwrap_or(defaults.decimals),
                text_guard: transform.text_guard.unwrap_or(defaults.text_guard),
                id_pad_width: transform.id_pad_width.unwrap_or(defaults.id_pad_width),
            },
            None => defaults,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("source.input_path", &self.source.input_path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        if let Some(file_name) = &self.load.file_name {
            validation::validate_non_empty_string("load.file_name", file_name)?;
        }
        validation::parse_scale("transform.scale", self.scale_text())?;
        if let Some(decimals) = self.transform.as_ref().and_then(|t| t.decimals) {
            validation::validate_range("transform.decimals", decimals, 0, 28)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const FULL_CONFIG: &str = r#"
        [pipeline]
        name = "square-packing submission"
        description = "Solution JSON to submission CSV"
        version = "1.0"

        [source]
        input_path = "output/final_solution.json"

        [transform]
        scale = "1"
        decimals = 6
        text_guard = "s"
        id_pad_width = 3

        [load]
        output_path = "."
        file_name = "submission.csv"

        [monitoring]
        enabled = true
    "#;

    #[test]
    fn parses_a_full_config() {
        let config = TomlConfig::from_toml_str(FULL_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input_path(), "output/final_solution.json");
        assert_eq!(config.file_name(), "submission.csv");
        assert_eq!(config.scale().unwrap(), Decimal::ONE);
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn minimal_config_falls_back_to_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
            [pipeline]
            name = "minimal"

            [source]
            input_path = "solution.json"

            [load]
            output_path = "out"
        "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.file_name(), "submission.csv");
        assert_eq!(config.format_options(), FormatOptions::default());
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn scientific_scale_notation_is_accepted() {
        let config = TomlConfig::from_toml_str(
            r#"
            [pipeline]
            name = "scaled"

            [source]
            input_path = "solution.json"

            [transform]
            scale = "1e3"

            [load]
            output_path = "."
        "#,
        )
        .unwrap();

        assert_eq!(
            config.scale().unwrap(),
            Decimal::from_str("1000").unwrap()
        );
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("PACK2CSV_TEST_INPUT", "from_env.json");

        let config = TomlConfig::from_toml_str(
            r#"
            [pipeline]
            name = "env"

            [source]
            input_path = "${PACK2CSV_TEST_INPUT}"

            [load]
            output_path = "."
        "#,
        )
        .unwrap();

        assert_eq!(config.input_path(), "from_env.json");
    }

    #[test]
    fn missing_source_table_is_a_config_error() {
        let err = TomlConfig::from_toml_str(
            r#"
            [pipeline]
            name = "broken"

            [load]
            output_path = "."
        "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::ConfigError { .. }));
    }

    #[test]
    fn zero_scale_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
            [pipeline]
            name = "zero"

            [source]
            input_path = "solution.json"

            [transform]
            scale = "0"

            [load]
            output_path = "."
        "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
