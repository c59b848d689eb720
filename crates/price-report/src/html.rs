//! HTML output generation.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use tracing::info;

use price_model::{ProductRecord, format_number, format_unit_price};

use crate::common::{COLUMN_HEADERS, REPORT_TITLE, write_text_element};

/// Options for HTML output.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    /// Printed under the heading when set.
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            generated_at: None,
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }
}

/// Write the report to a file, creating parent directories as needed.
pub fn export_to_path(
    records: &[ProductRecord],
    output_path: &Path,
    options: &ReportOptions,
) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    export(records, &mut writer, options)?;
    writer
        .flush()
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        path = %output_path.display(),
        rows = records.len(),
        "wrote price report"
    );
    Ok(())
}

/// Write the report to any writer.
pub fn export<W: Write>(records: &[ProductRecord], out: W, options: &ReportOptions) -> Result<()> {
    let mut html = Writer::new_with_indent(out, b' ', 2);
    html.get_mut().write_all(b"<!DOCTYPE html>\n")?;

    let mut root = BytesStart::new("html");
    root.push_attribute(("lang", "ru"));
    html.write_event(Event::Start(root))?;

    html.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "UTF-8"));
    html.write_event(Event::Empty(meta))?;
    write_text_element(&mut html, "title", &options.title)?;
    html.write_event(Event::End(BytesEnd::new("head")))?;

    html.write_event(Event::Start(BytesStart::new("body")))?;
    write_text_element(&mut html, "h1", &options.title)?;
    if let Some(at) = options.generated_at {
        let stamp = at.format("%Y-%m-%d %H:%M").to_string();
        write_text_element(&mut html, "p", &format!("Сформировано: {stamp}"))?;
    }

    html.write_event(Event::Start(BytesStart::new("table")))?;
    html.write_event(Event::Start(BytesStart::new("tr")))?;
    for header in COLUMN_HEADERS {
        write_text_element(&mut html, "th", header)?;
    }
    html.write_event(Event::End(BytesEnd::new("tr")))?;

    for (position, record) in records.iter().enumerate() {
        html.write_event(Event::Start(BytesStart::new("tr")))?;
        for cell in row_cells(position + 1, record) {
            write_text_element(&mut html, "td", &cell)?;
        }
        html.write_event(Event::End(BytesEnd::new("tr")))?;
    }

    html.write_event(Event::End(BytesEnd::new("table")))?;
    html.write_event(Event::End(BytesEnd::new("body")))?;
    html.write_event(Event::End(BytesEnd::new("html")))?;
    html.get_mut().write_all(b"\n")?;
    Ok(())
}

fn row_cells(position: usize, record: &ProductRecord) -> [String; 6] {
    [
        position.to_string(),
        record.name.clone(),
        format_number(record.price),
        format_number(record.weight),
        record.source_file.clone(),
        format_unit_price(record.unit_price()),
    ]
}
