//! WordprocessingML writer.
//!
//! Turns a [`Document`](crate::ooxml::docx::Document) into the parts of a
//! .docx package. Each module renders one kind of markup by appending to a
//! `String`; [`doc`] assembles the parts into an OPC package.

pub mod doc;
mod numbering;
mod paragraph;
mod props;
mod run;
mod section;
mod settings;
mod style;
mod table;

pub use doc::{build_package, serialize};

use crate::ooxml::docx::numbering::Numbering;
use crate::ooxml::docx::styles::StyleTable;

/// Document-wide lookups needed while writing body content.
pub(crate) struct BodyContext<'a> {
    pub(crate) styles: &'a StyleTable,
    pub(crate) numbering: &'a Numbering,
}
