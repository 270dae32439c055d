/// Word (.docx) document generation.
///
/// A document is built top-down with validating builders, then handed to
/// the writer, which emits the WordprocessingML parts and packs them into
/// a .docx container.
///
/// # Architecture
///
/// - `Document`: sections, list registry, style table and properties
/// - `Section`: page setup plus an ordered list of blocks
/// - `Paragraph` / `Run`: text with paragraph and character formatting
/// - `Table`: rows of cells on a fixed column grid
/// - `writer`: markup generation and packaging
///
/// # Example
///
/// ```rust
/// use docpack::ooxml::docx::{
///     CellBuilder, DocumentBuilder, ParagraphBuilder, RowBuilder, Run, SectionProperties,
///     StyleRole, TableBuilder,
/// };
///
/// let mut builder = DocumentBuilder::new();
/// builder
///     .add_section(SectionProperties::default())
///     .paragraph(ParagraphBuilder::heading(StyleRole::Heading1).run(Run::new("Title").bold(true).size(32)))?
///     .table(
///         TableBuilder::with_columns(2)
///             .row(
///                 RowBuilder::new()
///                     .cell(CellBuilder::with_text("Feature").shading("D3D3D3"))
///                     .cell(CellBuilder::with_text("Description").shading("D3D3D3")),
///             )
///             .row(RowBuilder::new().text("Search").text("Find text in all documents")),
///     )?;
///
/// let bytes = docpack::serialize(&builder.build()?)?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod document;
pub mod format;
pub mod numbering;
pub mod paragraph;
pub mod section;
pub mod styles;
pub mod table;
pub mod writer;

pub use document::{Block, Document, DocumentBuilder, DocumentProperties, SectionBuilder};
pub use format::{AUTO_COLOR, Alignment, BorderStyle, TableWidth, UnderlineStyle, VerticalAlignment};
pub use numbering::{ListDefinition, ListLevel, MAX_LEVELS, NumberFormat, Numbering};
pub use paragraph::{
    BorderLine, ListReference, Paragraph, ParagraphBorder, ParagraphBuilder, Run, RunFormat,
};
pub use section::{PageOrientation, Section, SectionProperties};
pub use styles::{RoleStyle, StyleRole, StyleTable};
pub use table::{CellBuilder, RowBuilder, Table, TableBuilder, TableCell, TableRow};
pub use writer::{build_package, serialize};
