//! Declarative document descriptions.
//!
//! A description is the content model written as data. It is read from
//! YAML and turned into a validated [`Document`](crate::ooxml::docx::Document)
//! by [`Description::into_document`]; validation failures name the entry
//! they came from, e.g. `sections[0].blocks[3]: undefined list 'bullet1'`.
//!
//! ```yaml
//! properties:
//!   title: User Guide
//! lists:
//!   - id: bullet1
//!     format: bullet
//! sections:
//!   - blocks:
//!       - type: paragraph
//!         style: heading1
//!         text: Introduction
//!       - type: paragraph
//!         list: { id: bullet1 }
//!         runs:
//!           - "Plain text, "
//!           - { text: "bold text", bold: true }
//!       - type: table
//!         width: { percent: 100 }
//!         rows:
//!           - [{ text: Feature, shading: D3D3D3 }, { text: Description, shading: D3D3D3 }]
//!           - [Search, Find text in all documents]
//! ```

mod convert;

use crate::ooxml::docx::format::{
    Alignment, BorderStyle, TableWidth, UnderlineStyle, VerticalAlignment,
};
use crate::ooxml::docx::numbering::NumberFormat;
use crate::ooxml::docx::section::PageOrientation;
use crate::ooxml::docx::styles::StyleRole;
use crate::ooxml::error::{OoxmlError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Description {
    pub properties: PropertiesDescription,
    /// Overrides of the default style table, per role
    pub styles: BTreeMap<StyleRole, RoleStyleDescription>,
    pub lists: Vec<ListDescription>,
    pub sections: Vec<SectionDescription>,
}

impl Description {
    /// Parse a description from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_saphyr::from_str(text).map_err(|err| OoxmlError::Yaml(err.to_string()))
    }

    /// Read and parse a YAML description file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// Values for docProps/core.xml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertiesDescription {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    /// RFC 3339 timestamp
    pub created: Option<DateTime<Utc>>,
}

/// Defaults for one style role.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoleStyleDescription {
    #[serde(flatten)]
    pub run: RunFormatDescription,
    /// Spacing before, in twips
    pub spacing_before: Option<u32>,
    /// Spacing after, in twips
    pub spacing_after: Option<u32>,
}

/// A list scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDescription {
    pub id: String,
    pub format: NumberFormat,
    /// Number of levels (nine when omitted)
    pub levels: Option<usize>,
}

/// One section: page setup and blocks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionDescription {
    pub page: PageDescription,
    pub blocks: Vec<BlockDescription>,
}

/// Named paper sizes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
}

/// Page setup of a section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageDescription {
    pub size: PageSize,
    pub orientation: PageOrientation,
    pub margins: Option<MarginsDescription>,
}

/// Page margins in inches.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarginsDescription {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for MarginsDescription {
    fn default() -> Self {
        Self {
            top: 1.0,
            bottom: 1.0,
            left: 1.0,
            right: 1.0,
        }
    }
}

/// A block, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockDescription {
    Paragraph(ParagraphDescription),
    Table(TableDescription),
}

/// A paragraph. `text` is shorthand for a single unformatted run placed
/// before any `runs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParagraphDescription {
    pub style: StyleRole,
    pub alignment: Alignment,
    pub spacing: Option<SpacingDescription>,
    pub border: Option<BorderDescription>,
    pub shading: Option<String>,
    pub list: Option<ListReferenceDescription>,
    pub text: Option<String>,
    pub runs: Vec<RunDescription>,
}

/// Paragraph spacing in twips. Negative values are rejected on conversion;
/// an omitted side inherits from the style role.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SpacingDescription {
    pub before: Option<i32>,
    pub after: Option<i32>,
}

/// A border drawn on all four sides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BorderDescription {
    pub style: BorderStyle,
    pub color: String,
    /// Width in eighths of a point
    pub size: u32,
    /// Distance from the text in points
    pub space: u32,
}

impl Default for BorderDescription {
    fn default() -> Self {
        Self {
            style: BorderStyle::Single,
            color: "000000".to_string(),
            size: 4,
            space: 1,
        }
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Deserialize)]
pub struct ListReferenceDescription {
    pub id: String,
    #[serde(default)]
    pub level: u8,
}

/// A run: either bare text or text with formatting.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunDescription {
    Text(String),
    Formatted {
        text: String,
        #[serde(flatten)]
        format: RunFormatDescription,
    },
}

/// Character formatting; unset fields inherit from the style role.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunFormatDescription {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<UnderlineStyle>,
    pub font: Option<String>,
    /// Size in half-points
    pub size: Option<u32>,
    pub color: Option<String>,
}

/// A table. Rows are lists of cells.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableDescription {
    /// Column count; taken from the first row when omitted
    pub columns: Option<usize>,
    pub width: TableWidth,
    /// Border line for all edges (single black 1/2pt when omitted)
    pub borders: Option<BorderDescription>,
    /// Draw no borders at all
    pub borderless: bool,
    pub rows: Vec<Vec<CellDescription>>,
}

/// A cell: either bare text or a full cell.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellDescription {
    Text(String),
    Full(CellContent),
}

/// A cell with formatting. `text` is shorthand for one plain paragraph
/// placed before any `paragraphs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CellContent {
    pub text: Option<String>,
    pub bold: Option<bool>,
    pub paragraphs: Vec<ParagraphDescription>,
    pub shading: Option<String>,
    pub vertical_align: Option<VerticalAlignment>,
    pub span: usize,
}

impl Default for CellContent {
    fn default() -> Self {
        Self {
            text: None,
            bold: None,
            paragraphs: Vec::new(),
            shading: None,
            vertical_align: None,
            span: 1,
        }
    }
}
