use crate::utils::error::{Result, RsvpError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 回覆者身分。`id` 是唯一鍵，`name` 只用於顯示。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ParticipantFields")]
pub struct Participant {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct ParticipantFields {
    id: String,
    name: String,
}

impl TryFrom<ParticipantFields> for Participant {
    type Error = RsvpError;

    fn try_from(fields: ParticipantFields) -> Result<Self> {
        Participant::new(fields.id, fields.name)
    }
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let participant = Self {
            id: id.into(),
            name: name.into(),
        };
        participant.validate_id()?;
        Ok(participant)
    }

    /// 欄位是公開的，寫入 registry 前需再檢查一次
    pub fn validate_id(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RsvpError::InvalidParticipant {
                field: "id".to_string(),
                value: self.id.clone(),
                reason: "id cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// 從表單輸入的名字建立：去除前後空白，id 為小寫名字
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RsvpError::InvalidParticipant {
                field: "name".to_string(),
                value: name.to_string(),
                reason: "name cannot be empty or whitespace-only".to_string(),
            });
        }

        Ok(Self {
            id: name.to_lowercase(),
            name: name.to_string(),
        })
    }
}

/// The three accepted RSVP answers.
///
/// Deserialization goes through [`FromStr`], so `"yes"` is accepted there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ResponseValue {
    Yes,
    No,
    Maybe,
}

impl ResponseValue {
    pub const ALL: [ResponseValue; 3] =
        [ResponseValue::Yes, ResponseValue::No, ResponseValue::Maybe];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseValue::Yes => "Yes",
            ResponseValue::No => "No",
            ResponseValue::Maybe => "Maybe",
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseValue {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self> {
        ResponseValue::ALL
            .into_iter()
            .find(|value| value.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RsvpError::InvalidResponseValue {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ResponseValue {
    type Error = RsvpError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub participant: Participant,
    pub response: ResponseValue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpSummary {
    pub total: usize,
    pub confirmed: usize,
    pub declined: usize,
    pub maybe: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(RsvpError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

/// 尚未驗證的原始輸入 (CSV 列、命令列參數、TOML 項目)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubmission {
    pub name: String,
    pub response: String,
}

impl RawSubmission {
    pub fn new(name: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: response.into(),
        }
    }
}

impl FromStr for RawSubmission {
    type Err = RsvpError;

    /// 解析 `NAME=RESPONSE`
    fn from_str(s: &str) -> Result<Self> {
        let (name, response) =
            s.rsplit_once('=')
                .ok_or_else(|| RsvpError::InvalidConfigValueError {
                    field: "rsvp".to_string(),
                    value: s.to_string(),
                    reason: "expected NAME=RESPONSE".to_string(),
                })?;

        Ok(Self::new(name.trim(), response.trim()))
    }
}
