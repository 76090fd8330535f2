use crate::core::intake::IntakeReport;
use crate::core::{OutputFormat, Storage};
use crate::utils::error::Result;
use std::fmt::{self, Write as _};

pub const REPORT_FILE_STEM: &str = "rsvp_report";

pub fn render(report: &IntakeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(report).map_err(|e| std::io::Error::other(e).into()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_confirmed_csv(report),
    }
}

fn render_text(report: &IntakeReport) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    let summary = &report.summary;

    writeln!(out, "🎉 {}", report.event)?;
    writeln!(out)?;
    writeln!(out, "📊 RSVP Summary")?;
    writeln!(out, "Total:     {}", summary.total)?;
    writeln!(out, "Confirmed: {}", summary.confirmed)?;
    writeln!(out, "Declined:  {}", summary.declined)?;
    writeln!(out, "Maybe:     {}", summary.maybe)?;
    writeln!(out)?;
    writeln!(out, "✅ Confirmed Attendees")?;
    if report.confirmed.is_empty() {
        writeln!(out, "(none)")?;
    }
    for participant in &report.confirmed {
        writeln!(out, "- {}", participant.name)?;
    }

    if !report.rejected.is_empty() {
        writeln!(out)?;
        writeln!(out, "⚠️  Rejected Submissions ({})", report.rejected.len())?;
        for rejection in &report.rejected {
            writeln!(
                out,
                "#{} {:?}={:?}: {}",
                rejection.position, rejection.name, rejection.response, rejection.reason
            )?;
        }
    }

    Ok(out)
}

fn render_confirmed_csv(report: &IntakeReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name"])?;
    for participant in &report.confirmed {
        writer.write_record([participant.id.as_str(), participant.name.as_str()])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// 透過 Storage 寫出報表，回傳檔名
pub fn write_report<S: Storage>(
    storage: &S,
    report: &IntakeReport,
    format: OutputFormat,
) -> Result<String> {
    let file_name = format!("{}.{}", REPORT_FILE_STEM, format.extension());
    let content = render(report, format)?;

    tracing::debug!("Writing {} ({} bytes)", file_name, content.len());
    storage.write_file(&file_name, content.as_bytes())?;

    Ok(file_name)
}
