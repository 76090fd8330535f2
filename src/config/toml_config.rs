use crate::core::{ConfigProvider, OutputFormat, RawSubmission};
use crate::utils::error::{Result, RsvpError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub event: EventConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub rsvp: Vec<RawSubmission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeConfig {
    pub strict: Option<bool>,
    #[serde(default)]
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RsvpError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EVENT_NAME})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("event.name", &self.event.name)?;
        validation::validate_file_extensions("intake.inputs", &self.intake.inputs, &["csv"])?;

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        if let Some(format) = &self.output.format {
            format
                .parse::<OutputFormat>()
                .map_err(|_| RsvpError::InvalidConfigValueError {
                    field: "output.format".to_string(),
                    value: format.clone(),
                    reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
                })?;
        }

        Ok(())
    }

    /// 標題列，含日期時附上日期
    pub fn event_title(&self) -> String {
        match self.event.date {
            Some(date) => format!("{} ({})", self.event.name, date.format("%Y-%m-%d")),
            None => self.event.name.clone(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn event_name(&self) -> &str {
        &self.event.name
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn input_files(&self) -> &[String] {
        &self.intake.inputs
    }

    fn inline_submissions(&self) -> Vec<RawSubmission> {
        self.rsvp.clone()
    }

    fn output_format(&self) -> OutputFormat {
        // validate_config 已檢查過格式
        self.output
            .format
            .as_deref()
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }

    fn strict(&self) -> bool {
        self.intake.strict.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[event]
name = "Season kickoff"
description = "First practice of the season"
date = "2026-11-07"

[intake]
strict = true
inputs = ["team.csv"]

[output]
path = "./reports"
format = "json"

[[rsvp]]
name = "Alice"
response = "Yes"

[[rsvp]]
name = "Bob"
response = "Maybe"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.event_name(), "Season kickoff");
        assert_eq!(config.event_title(), "Season kickoff (2026-11-07)");
        assert!(config.strict());
        assert_eq!(config.input_files(), ["team.csv".to_string()]);
        assert_eq!(config.output_path(), Some("./reports"));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.inline_submissions().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = TomlConfig::from_toml_str("[event]\nname = \"Practice\"\n").unwrap();

        assert!(!config.strict());
        assert!(config.input_files().is_empty());
        assert!(config.output_path().is_none());
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.event_title(), "Practice");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEAM_RSVP_TEST_EVENT", "Away game");

        let toml_content = r#"
[event]
name = "${TEAM_RSVP_TEST_EVENT}"

[output]
path = "${TEAM_RSVP_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.event.name, "Away game");
        assert_eq!(config.output.path.as_deref(), Some("${TEAM_RSVP_UNSET_VARIABLE}"));

        std::env::remove_var("TEAM_RSVP_TEST_EVENT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[event]
name = "Practice"

[output]
format = "xml"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[event]\nname = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_event_is_parse_error() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap_err();
        assert!(matches!(err, RsvpError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[event]\nname = \"File test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.event.name, "File test");
    }
}
