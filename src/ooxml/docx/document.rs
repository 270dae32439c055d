//! The document tree and its builders.
//!
//! ```
//! use docpack::ooxml::docx::{
//!     DocumentBuilder, ListDefinition, ParagraphBuilder, Run, SectionProperties, StyleRole,
//! };
//!
//! let mut builder = DocumentBuilder::new();
//! builder.define_list(ListDefinition::bullet("bullet1"))?;
//! builder
//!     .add_section(SectionProperties::default())
//!     .paragraph(ParagraphBuilder::heading(StyleRole::Heading1).text("Title"))?
//!     .paragraph(ParagraphBuilder::new().list("bullet1", 0).run(Run::new("First").bold(true)))?;
//! let document = builder.build()?;
//! assert_eq!(document.sections()[0].blocks().len(), 2);
//! # Ok::<(), docpack::ValidationError>(())
//! ```

use super::numbering::{ListDefinition, Numbering};
use super::paragraph::{Paragraph, ParagraphBuilder};
use super::section::{Section, SectionProperties};
use super::styles::StyleTable;
use super::table::{Table, TableBuilder};
use crate::ooxml::error::ValidationError;
use chrono::{DateTime, Utc};

/// A top-level element of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// Descriptive metadata written to `docProps/core.xml`.
///
/// `created` is left out of the package when unset, so documents without a
/// timestamp serialize identically on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

/// A complete, validated document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) sections: Vec<Section>,
    pub(crate) numbering: Numbering,
    pub(crate) styles: StyleTable,
    pub(crate) properties: DocumentProperties,
}

impl Document {
    /// Sections in presentation order (at least one).
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Blocks of all sections, in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|section| section.blocks.iter())
    }
}

/// Builds a [`Document`] top-down.
///
/// Lists must be defined before the paragraphs that use them are added.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    sections: Vec<Section>,
    numbering: Numbering,
    styles: StyleTable,
    properties: DocumentProperties,
}

impl DocumentBuilder {
    /// A builder with the default style table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the style table.
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Set the document properties.
    pub fn properties(&mut self, properties: DocumentProperties) -> &mut Self {
        self.properties = properties;
        self
    }

    /// Register a list definition.
    pub fn define_list(&mut self, definition: ListDefinition) -> Result<&mut Self, ValidationError> {
        self.numbering.define(definition)?;
        Ok(self)
    }

    /// Start a new section; blocks are appended through the returned builder.
    pub fn add_section(&mut self, properties: SectionProperties) -> SectionBuilder<'_> {
        self.sections.push(Section {
            properties,
            blocks: Vec::new(),
        });
        let index = self.sections.len() - 1;
        SectionBuilder {
            numbering: &self.numbering,
            section: &mut self.sections[index],
        }
    }

    /// Finish the document. Fails when no section was added.
    pub fn build(self) -> Result<Document, ValidationError> {
        if self.sections.is_empty() {
            return Err(ValidationError::NoSections);
        }
        log::debug!(
            "built document: {} section(s), {} list(s)",
            self.sections.len(),
            self.numbering.len()
        );
        Ok(Document {
            sections: self.sections,
            numbering: self.numbering,
            styles: self.styles,
            properties: self.properties,
        })
    }
}

/// Appends blocks to one section, validating each against the document's
/// list registry.
#[derive(Debug)]
pub struct SectionBuilder<'a> {
    numbering: &'a Numbering,
    section: &'a mut Section,
}

impl SectionBuilder<'_> {
    /// Build and append a paragraph.
    pub fn paragraph(&mut self, paragraph: ParagraphBuilder) -> Result<&mut Self, ValidationError> {
        let paragraph = paragraph.build(self.numbering)?;
        self.section.blocks.push(Block::Paragraph(paragraph));
        Ok(self)
    }

    /// Build and append a table.
    pub fn table(&mut self, table: TableBuilder) -> Result<&mut Self, ValidationError> {
        let table = table.build(self.numbering)?;
        self.section.blocks.push(Block::Table(table));
        Ok(self)
    }

    /// Number of blocks appended so far.
    pub fn len(&self) -> usize {
        self.section.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.section.blocks.is_empty()
    }
}
