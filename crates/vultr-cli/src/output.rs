//! Output rendering for CLI commands.
//!
//! Every command hands the renderer one [`Renderable`]. Tabular values
//! expose a header row through [`Renderable::columns`] and get aligned
//! columns; keyed values return no columns and are written row by row.
//! JSON and YAML modes serialize the value itself, so paging metadata
//! travels inside the document instead of in a footer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use vultr_api::{Meta, Page};

use crate::error::CliError;

/// One row of cells.
pub type Row = Vec<String>;

/// Separator printed between a table and its paging footer.
const PAGING_SEPARATOR: &str = "======================================";

/// Gutter between table columns.
const GUTTER: &str = "  ";

/// Placeholder cell for an empty table.
const EMPTY_CELL: &str = "---";

/// Build a [`Row`] from displayable values.
macro_rules! cells {
    ($($cell:expr),* $(,)?) => {
        vec![$($cell.to_string()),*]
    };
}

pub(crate) use cells;

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Aligned plain-text columns.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl FromStr for Format {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(CliError::Config(format!(
                "unknown output format {other:?}, expected one of table, json, yaml"
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

/// Anything the [`Renderer`] can emit.
pub trait Renderable: Serialize {
    /// Header rows. Empty for keyed values.
    fn columns(&self) -> Vec<Row>;

    /// Data rows.
    fn rows(&self) -> Vec<Row>;

    /// Paging footer rows, empty when there is no paging metadata.
    fn paging_rows(&self) -> Vec<Row> {
        Vec::new()
    }

    /// JSON document for this value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn as_json(&self) -> Result<Vec<u8>, CliError> {
        let mut bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// YAML document for this value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn as_yaml(&self) -> Result<Vec<u8>, CliError> {
        serde_yaml::to_string(self)
            .map(String::into_bytes)
            .map_err(|e| CliError::Format(format!("YAML serialization failed: {e}")))
    }
}

/// Turns a [`Renderable`] into the bytes for the selected output mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: Format,
}

impl Renderer {
    /// Create a renderer for the given mode.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Output mode in use.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Render `value` completely, so nothing reaches stdout on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render<R: Renderable + ?Sized>(&self, value: &R) -> Result<String, CliError> {
        let bytes = match self.format {
            Format::Json => value.as_json()?,
            Format::Yaml => value.as_yaml()?,
            Format::Table => return Ok(table(value)),
        };
        String::from_utf8(bytes).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

fn table<R: Renderable + ?Sized>(value: &R) -> String {
    let columns = value.columns();
    let mut out = String::new();

    if columns.is_empty() {
        for row in value.rows() {
            push_line(&mut out, &row.join("\t"));
        }
        return out;
    }

    let rows = value.rows();
    if rows.is_empty() {
        // The placeholder row is not aligned under the headers.
        let width = columns.iter().map(Vec::len).max().unwrap_or_default();
        write_aligned(&mut out, &columns);
        push_line(&mut out, &vec![EMPTY_CELL; width].join(GUTTER));
    } else {
        let mut lines = columns;
        lines.extend(rows);
        write_aligned(&mut out, &lines);
    }

    let paging = value.paging_rows();
    if !paging.is_empty() {
        push_line(&mut out, PAGING_SEPARATOR);
        write_aligned(&mut out, &paging);
    }
    out
}

fn write_aligned(out: &mut String, rows: &[Row]) {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(GUTTER);
        push_line(out, &line);
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// A resource that lists as one table row per record.
pub trait Record: Serialize {
    /// Key of the record array in structured output.
    const PLURAL: &'static str;
    /// Key of a single record in structured output.
    const SINGULAR: &'static str;
    /// Column headers.
    const HEADERS: &'static [&'static str];

    /// Cells of this record, one per header.
    fn cells(&self) -> Row;
}

/// A resource with a keyed, sectioned single-record view.
pub trait Detail: Serialize {
    /// Key of the record in structured output.
    const SINGULAR: &'static str;

    /// Keyed rows, headings and blank separators included.
    fn detail_rows(&self) -> Vec<Row>;
}

/// One page of records.
#[derive(Debug, Clone)]
pub struct ListView<R> {
    page: Page<R>,
}

impl<R> ListView<R> {
    /// Wrap a page returned by the API.
    #[must_use]
    pub const fn new(page: Page<R>) -> Self {
        Self { page }
    }
}

impl<R: Record> Serialize for ListView<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(R::PLURAL, &self.page.items)?;
        map.serialize_entry("meta", &self.page.meta.clone().unwrap_or_default())?;
        map.end()
    }
}

impl<R: Record> Renderable for ListView<R> {
    fn columns(&self) -> Vec<Row> {
        vec![headers::<R>()]
    }

    fn rows(&self) -> Vec<Row> {
        self.page.items.iter().map(Record::cells).collect()
    }

    fn paging_rows(&self) -> Vec<Row> {
        self.page.meta.as_ref().map_or_else(Vec::new, paging_rows)
    }
}

fn paging_rows(meta: &Meta) -> Vec<Row> {
    let mut rows = Vec::new();
    if let Some(total) = meta.total {
        rows.push(cells!["TOTAL", total]);
    }
    if let Some(links) = &meta.links {
        rows.push(cells!["NEXT PAGE", links.next]);
        rows.push(cells!["PREV PAGE", links.prev]);
    }
    rows
}

/// A single record shown as one row under the list headers.
#[derive(Debug, Clone)]
pub struct ItemView<R> {
    item: R,
}

impl<R> ItemView<R> {
    /// Wrap a record returned by the API.
    #[must_use]
    pub const fn new(item: R) -> Self {
        Self { item }
    }
}

impl<R: Record> Serialize for ItemView<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::SINGULAR, &self.item)?;
        map.end()
    }
}

impl<R: Record> Renderable for ItemView<R> {
    fn columns(&self) -> Vec<Row> {
        vec![headers::<R>()]
    }

    fn rows(&self) -> Vec<Row> {
        vec![self.item.cells()]
    }
}

/// A single record shown as keyed rows.
#[derive(Debug, Clone)]
pub struct DetailView<R> {
    item: R,
}

impl<R> DetailView<R> {
    /// Wrap a record returned by the API.
    #[must_use]
    pub const fn new(item: R) -> Self {
        Self { item }
    }
}

impl<R: Detail> Serialize for DetailView<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::SINGULAR, &self.item)?;
        map.end()
    }
}

impl<R: Detail> Renderable for DetailView<R> {
    fn columns(&self) -> Vec<Row> {
        Vec::new()
    }

    fn rows(&self) -> Vec<Row> {
        self.item.detail_rows()
    }
}

/// Confirmation for operations that return no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
}

impl Message {
    /// Create a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Renderable for Message {
    fn columns(&self) -> Vec<Row> {
        Vec::new()
    }

    fn rows(&self) -> Vec<Row> {
        vec![vec![self.message.clone()]]
    }
}

fn headers<R: Record>() -> Row {
    R::HEADERS.iter().map(|h| (*h).to_string()).collect()
}

/// Monetary amount with two decimals.
#[must_use]
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Epoch seconds as `YYYY-MM-DD`; anything unparseable is returned as is.
#[must_use]
pub fn epoch_date(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map_or_else(|| raw.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// Comma-separated list for a single cell.
#[must_use]
pub fn list(values: &[String]) -> String {
    values.join(", ")
}

/// A blank separator row for keyed views.
#[must_use]
pub fn blank() -> Row {
    Vec::new()
}
