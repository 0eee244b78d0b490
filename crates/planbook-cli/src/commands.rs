//! Subcommand implementations

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use planbook_core::{FileStamp, Renderer, ReportTable};
use planbook_render::{ExcelRenderer, TextRenderer, Theme};
use serde::Serialize;
use tracing::{debug, info};

use crate::reports::ReportId;
use crate::InspectFormat;

/// Render a report into `output_dir`, returning the written path
pub fn generate(
    id: ReportId,
    output_dir: &Path,
    theme: Option<&Path>,
    stamp: Option<FileStamp>,
) -> Result<PathBuf> {
    let mut report = id.build();
    if let Some(stamp) = stamp {
        report.stamp = stamp;
    }

    if !output_dir.is_dir() {
        bail!("output directory does not exist: {}", output_dir.display());
    }

    let mut renderer = ExcelRenderer::new();
    if let Some(theme_path) = theme {
        let base = Theme::for_preset(report.style);
        let theme = Theme::load_over(theme_path, &base)
            .with_context(|| format!("failed to load theme {}", theme_path.display()))?;
        debug!(theme = %theme_path.display(), "theme loaded");
        renderer = renderer.theme(theme);
    }

    let path = output_dir.join(report.file_name(&Local::now()));
    info!(report = id.as_str(), path = %path.display(), "generating workbook");
    renderer
        .save(&report, &path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Generated: {}", path.display());
    println!("Sheets:");
    for (index, name) in report.sheet_names().iter().enumerate() {
        println!("  {}. {}", index + 1, name);
    }
    if !report.closing_notes.is_empty() {
        println!();
        for line in &report.closing_notes {
            println!("{}", line);
        }
    }

    Ok(path)
}

pub fn list() {
    for id in ReportId::ALL {
        let report = id.build();
        println!("{:<12} {}", id.as_str(), report.title);
        println!("{:<12} sheets: {}", "", report.sheet_names().join(", "));
    }
}

#[derive(Serialize)]
struct Inspection<'a> {
    id: &'a str,
    title: &'a str,
    sheets: Vec<&'a str>,
    table: ReportTable,
}

pub fn inspect(id: ReportId, format: InspectFormat) -> Result<()> {
    let report = id.build();

    match format {
        InspectFormat::Text => {
            let preview = TextRenderer
                .render(&report)
                .with_context(|| format!("failed to preview {}", id.as_str()))?;
            print!("{}", preview);
        }
        InspectFormat::Json => {
            let inspection = Inspection {
                id: &report.id,
                title: &report.title,
                sheets: report.sheet_names(),
                table: report.table(),
            };
            println!("{}", serde_json::to_string_pretty(&inspection)?);
        }
    }

    Ok(())
}
