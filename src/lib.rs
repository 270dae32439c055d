//! docpack - build Word (.docx) packages from a validated content model
//!
//! A document is described as a tree (sections, paragraphs, runs, tables,
//! lists) either through builders or through a declarative YAML
//! description, validated as it is built, and serialized into the bytes of
//! a `.docx` package.
//!
//! # Features
//!
//! - **Content model**: typed builders with eager validation
//! - **Explicit styles**: a per-document style table resolved into every run
//! - **Lists and tables**: numbering definitions, column spans, shading, borders
//! - **Deterministic output**: equal documents produce identical bytes
//! - **Descriptions**: the same tree written as YAML data
//!
//! # Example - Building a document
//!
//! ```
//! use docpack::ooxml::docx::{
//!     Alignment, DocumentBuilder, ListDefinition, ParagraphBuilder, Run, SectionProperties,
//!     StyleRole,
//! };
//!
//! # fn main() -> docpack::Result<()> {
//! let mut builder = DocumentBuilder::new();
//! builder.define_list(ListDefinition::bullet("bullet1"))?;
//! builder
//!     .add_section(SectionProperties::default())
//!     .paragraph(
//!         ParagraphBuilder::heading(StyleRole::Heading1)
//!             .alignment(Alignment::Center)
//!             .run(Run::new("User Guide").font("Arial")),
//!     )?
//!     .paragraph(ParagraphBuilder::with_text("Fast startup").list("bullet1", 0))?;
//!
//! let bytes = docpack::serialize(&builder.build()?)?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - From a description
//!
//! ```
//! use docpack::description::Description;
//!
//! # fn main() -> docpack::Result<()> {
//! let description = Description::from_yaml_str(
//!     r#"
//! sections:
//!   - blocks:
//!       - type: paragraph
//!         style: heading1
//!         text: Introduction
//! "#,
//! )?;
//! let document = description.into_document()?;
//! let bytes = document.to_bytes()?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```

/// Common utilities shared by the model and the package writer
pub mod common;

/// Declarative document descriptions
pub mod description;

/// Office Open XML content model, writer and package layer
pub mod ooxml;

pub use ooxml::docx::{Document, DocumentBuilder, build_package, serialize};
pub use ooxml::error::{OoxmlError, Result, SerializationError, ValidationError};
