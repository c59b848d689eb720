//! Shared constants and XML helpers for report generation.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Page title and heading.
pub const REPORT_TITLE: &str = "Анализ прайс-листов";

/// Where the report goes unless the caller says otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "prices.html";

/// Table header, in column order.
pub const COLUMN_HEADERS: [&str; 6] = [
    "№",
    "Наименование",
    "Цена",
    "Вес",
    "Файл",
    "Цена за кг",
];

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
