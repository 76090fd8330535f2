use crate::core::registry::RsvpRegistry;
use crate::core::{
    ConfigProvider, Participant, RawSubmission, RsvpSummary, Storage, SubmissionSource,
};
use crate::utils::error::{Result, RsvpError};
use serde::{Deserialize, Serialize};

/// 命令列 `--rsvp` 或 TOML `[[rsvp]]` 的回覆
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    submissions: Vec<RawSubmission>,
}

impl InlineSource {
    pub fn new(submissions: Vec<RawSubmission>) -> Self {
        Self { submissions }
    }
}

impl SubmissionSource for InlineSource {
    fn submissions(&self) -> Result<Vec<Result<RawSubmission>>> {
        Ok(self.submissions.iter().cloned().map(Ok).collect())
    }
}

/// CSV file with a `name,response` header row, read through a [`Storage`].
///
/// Columns are located by header name. A row with the wrong number of fields
/// becomes a per-row error instead of failing the whole file.
#[derive(Debug, Clone)]
pub struct CsvSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> CsvSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    fn column(&self, headers: &csv::StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .ok_or_else(|| RsvpError::InvalidRow {
                line: 1,
                reason: format!("{} is missing a '{}' header", self.path, name),
            })
    }
}

impl<S: Storage> SubmissionSource for CsvSource<S> {
    fn submissions(&self) -> Result<Vec<Result<RawSubmission>>> {
        let data = self.storage.read_file(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        let name_column = self.column(&headers, "name")?;
        let response_column = self.column(&headers, "response")?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let row = record.map_err(RsvpError::from).and_then(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                if record.len() != headers.len() {
                    return Err(RsvpError::InvalidRow {
                        line,
                        reason: format!(
                            "expected {} fields, found {} ({:?})",
                            headers.len(),
                            record.len(),
                            record.iter().collect::<Vec<_>>().join(",")
                        ),
                    });
                }

                Ok(RawSubmission::new(
                    &record[name_column],
                    &record[response_column],
                ))
            });
            rows.push(row);
        }

        tracing::debug!("Read {} rows from {}", rows.len(), self.path);
        Ok(rows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// 在整批輸入中的位置 (1-based)
    pub position: usize,
    pub name: String,
    pub response: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReport {
    pub event: String,
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
    pub summary: RsvpSummary,
    pub confirmed: Vec<Participant>,
}

/// Feeds raw submissions from every source, in order, into a registry.
pub struct RsvpIntake {
    event: String,
    sources: Vec<Box<dyn SubmissionSource>>,
    strict: bool,
}

impl RsvpIntake {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            sources: Vec::new(),
            strict: false,
        }
    }

    /// 依設定建立：先處理 inline 回覆，再依序讀取 CSV 檔
    pub fn from_config<C, S>(config: &C, storage: S) -> Self
    where
        C: ConfigProvider,
        S: Storage + Clone + 'static,
    {
        let mut intake = Self::new(config.event_name()).strict(config.strict());

        let inline = config.inline_submissions();
        if !inline.is_empty() {
            intake = intake.with_source(InlineSource::new(inline));
        }

        for path in config.input_files() {
            intake = intake.with_source(CsvSource::new(storage.clone(), path.clone()));
        }

        intake
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_source(mut self, source: impl SubmissionSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// 讀取所有來源但不寫入 registry
    pub fn collect(&self) -> Result<Vec<Result<RawSubmission>>> {
        let mut all = Vec::new();
        for source in &self.sources {
            all.extend(source.submissions()?);
        }
        Ok(all)
    }

    pub fn run(&self, registry: &mut RsvpRegistry) -> Result<IntakeReport> {
        tracing::info!("Collecting RSVPs for {}", self.event);
        let submissions = self.collect()?;
        tracing::debug!("Collected {} raw submissions", submissions.len());

        let mut accepted = 0;
        let mut rejected = Vec::new();

        for (index, row) in submissions.into_iter().enumerate() {
            let position = index + 1;

            // 無法解析的列沒有名字與回覆可記錄
            let (raw, applied) = match row {
                Ok(raw) => {
                    let applied = Participant::from_name(&raw.name)
                        .and_then(|participant| registry.submit(participant, &raw.response));
                    (raw, applied)
                }
                Err(e) => (RawSubmission::new("", ""), Err(e)),
            };

            match applied {
                Ok(()) => {
                    tracing::debug!("Recorded {} -> {}", raw.name, raw.response);
                    accepted += 1;
                }
                Err(e) if self.strict => {
                    tracing::error!("❌ Submission #{} rejected in strict mode: {}", position, e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("⚠️ Skipping submission #{} ({:?}): {}", position, raw.name, e);
                    rejected.push(Rejection {
                        position,
                        name: raw.name,
                        response: raw.response,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let summary = registry.summarize();
        tracing::info!(
            "Accepted {} submissions, rejected {} (total {}, confirmed {})",
            accepted,
            rejected.len(),
            summary.total,
            summary.confirmed
        );

        Ok(IntakeReport {
            event: self.event.clone(),
            accepted,
            rejected,
            summary,
            confirmed: registry.list_confirmed(),
        })
    }
}
