// CauseConv - core/render.rs
//
// Text card, JSON, and CSV rendering of classification results.
// Core layer: writes to any Write trait object.

use crate::core::model::{AlternateForm, ClassificationResult, FileColour};
use crate::util::error::RenderError;
use serde::Serialize;
use std::io::Write;

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
    /// CSV with a header row.
    Csv,
}

impl OutputFormat {
    /// Parse a config-file value (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Placeholder shown for an absent field on a text card.
const EMPTY_FIELD: &str = "—";

/// Serialisable view of one result with its list id and file colour.
#[derive(Debug, Serialize)]
struct RenderedResult<'a> {
    id: u64,
    #[serde(flatten)]
    result: &'a ClassificationResult,
    file_colour: Option<FileColour>,
}

/// Write `items` in the given format.
pub fn render<W: Write>(
    format: OutputFormat,
    writer: W,
    items: &[(u64, &ClassificationResult)],
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Text => {
            let mut writer = writer;
            for (i, (id, result)) in items.iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                render_card(&mut writer, *id, result)?;
            }
            Ok(())
        }
        OutputFormat::Json => render_json(writer, items),
        OutputFormat::Csv => render_csv(writer, items),
    }
}

/// Write one result as a text card.
pub fn render_card<W: Write>(
    mut writer: W,
    id: u64,
    result: &ClassificationResult,
) -> Result<(), RenderError> {
    writeln!(writer, "[#{id}]")?;
    writeln!(
        writer,
        "  Year:              {}",
        result.filing_year.as_deref().unwrap_or(EMPTY_FIELD)
    )?;
    if let Some(colour) = result.file_colour() {
        writeln!(writer, "  File colour:       {colour}")?;
    }
    writeln!(writer, "  Location / System: {}", result.scheme_label())?;

    if let Some(canonical) = &result.canonical_form {
        let heading = if result.scheme.is_civil() {
            "Civil cause number"
        } else {
            "FACTS cause number"
        };
        writeln!(writer, "  {heading}: {canonical}")?;
    }

    writeln!(writer, "  Original input:    {}", result.raw)?;
    if let Some(normalized) = &result.normalized {
        writeln!(writer, "  Core sequence:     {normalized}")?;
    }

    if !result.alternate_forms.is_empty() {
        writeln!(writer, "  Other conversions:")?;
        for alternate in &result.alternate_forms {
            writeln!(writer, "    {alternate}")?;
        }
    }
    Ok(())
}

/// Write results as a pretty-printed JSON array.
pub fn render_json<W: Write>(
    mut writer: W,
    items: &[(u64, &ClassificationResult)],
) -> Result<(), RenderError> {
    let rendered: Vec<RenderedResult<'_>> = items
        .iter()
        .map(|(id, result)| RenderedResult {
            id: *id,
            result,
            file_colour: result.file_colour(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &rendered)?;
    writeln!(writer)?;
    Ok(())
}

/// Write results as CSV.
///
/// Columns: id, raw, normalized, canonical_form, filing_year, scheme,
/// file_colour, alternate_forms (`label=value` pairs joined by `; `).
pub fn render_csv<W: Write>(
    writer: W,
    items: &[(u64, &ClassificationResult)],
) -> Result<(), RenderError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "id",
        "raw",
        "normalized",
        "canonical_form",
        "filing_year",
        "scheme",
        "file_colour",
        "alternate_forms",
    ])?;

    for (id, result) in items {
        let id = id.to_string();
        let colour = result.file_colour().map(|c| c.label()).unwrap_or("");
        let alternates = join_alternates(&result.alternate_forms);
        csv_writer.write_record([
            id.as_str(),
            result.raw.as_str(),
            result.normalized.as_deref().unwrap_or(""),
            result.canonical_form.as_deref().unwrap_or(""),
            result.filing_year.as_deref().unwrap_or(""),
            result.scheme_label(),
            colour,
            alternates.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn join_alternates(alternates: &[AlternateForm]) -> String {
    alternates
        .iter()
        .map(|a| format!("{}={}", a.label, a.value))
        .collect::<Vec<_>>()
        .join("; ")
}
