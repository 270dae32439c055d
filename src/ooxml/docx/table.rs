//! Tables: rows of cells on a fixed column grid.

use super::format::{BorderStyle, TableWidth, VerticalAlignment, check_color};
use super::numbering::Numbering;
use super::paragraph::{BorderLine, Paragraph, ParagraphBuilder};
use crate::ooxml::error::ValidationError;

/// A validated table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub(crate) paragraphs: Vec<Paragraph>,
    pub(crate) span: usize,
    pub(crate) shading: Option<String>,
    pub(crate) vertical_align: Option<VerticalAlignment>,
}

impl TableCell {
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of grid columns the cell covers.
    pub fn span(&self) -> usize {
        self.span
    }

    pub fn shading(&self) -> Option<&str> {
        self.shading.as_deref()
    }

    pub fn vertical_align(&self) -> Option<VerticalAlignment> {
        self.vertical_align
    }
}

/// A validated table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub(crate) cells: Vec<TableCell>,
}

impl TableRow {
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Grid columns covered by the row.
    pub fn span_sum(&self) -> usize {
        self.cells.iter().map(|cell| cell.span).sum()
    }
}

/// A validated table. Every row covers exactly `columns` grid columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) columns: usize,
    pub(crate) width: TableWidth,
    pub(crate) borders: Option<BorderLine>,
    pub(crate) rows: Vec<TableRow>,
}

impl Table {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn width(&self) -> TableWidth {
        self.width
    }

    /// Line drawn on every outer and inner border, if any.
    pub fn borders(&self) -> Option<&BorderLine> {
        self.borders.as_ref()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

/// Builder for a table cell.
#[derive(Debug, Clone)]
pub struct CellBuilder {
    paragraphs: Vec<ParagraphBuilder>,
    span: usize,
    shading: Option<String>,
    vertical_align: Option<VerticalAlignment>,
}

impl Default for CellBuilder {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            span: 1,
            shading: None,
            vertical_align: None,
        }
    }
}

impl CellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell holding one plain paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new().paragraph(ParagraphBuilder::with_text(text))
    }

    pub fn paragraph(mut self, paragraph: ParagraphBuilder) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Append a plain paragraph.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.paragraph(ParagraphBuilder::with_text(text))
    }

    /// Set the background fill (hex RGB).
    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlignment) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Number of grid columns the cell covers (default 1).
    pub fn span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    fn build(self, numbering: &Numbering) -> Result<TableCell, ValidationError> {
        if let Some(fill) = &self.shading {
            check_color("shading", fill)?;
        }
        let paragraphs = self
            .paragraphs
            .into_iter()
            .map(|paragraph| paragraph.build(numbering))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TableCell {
            paragraphs,
            span: self.span,
            shading: self.shading,
            vertical_align: self.vertical_align,
        })
    }
}

/// Builder for a table row.
#[derive(Debug, Clone, Default)]
pub struct RowBuilder {
    cells: Vec<CellBuilder>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, cell: CellBuilder) -> Self {
        self.cells.push(cell);
        self
    }

    /// Append a cell holding one plain paragraph.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.cell(CellBuilder::with_text(text))
    }
}

/// Builder for [`Table`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    columns: Option<usize>,
    width: TableWidth,
    borders: Option<BorderLine>,
    rows: Vec<RowBuilder>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            columns: None,
            width: TableWidth::Auto,
            borders: Some(BorderLine::new(BorderStyle::Single, "000000", 4).space(0)),
            rows: Vec::new(),
        }
    }
}

impl TableBuilder {
    /// A table whose column count is taken from its first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with a declared column count.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns: Some(columns),
            ..Self::default()
        }
    }

    pub fn width(mut self, width: TableWidth) -> Self {
        self.width = width;
        self
    }

    /// Draw `line` on every border (single black 1/2pt by default).
    pub fn borders(mut self, line: BorderLine) -> Self {
        self.borders = Some(line);
        self
    }

    pub fn no_borders(mut self) -> Self {
        self.borders = None;
        self
    }

    pub fn row(mut self, row: RowBuilder) -> Self {
        self.rows.push(row);
        self
    }

    /// Validate and build the table.
    ///
    /// Cell errors are reported with their row and cell index.
    pub fn build(self, numbering: &Numbering) -> Result<Table, ValidationError> {
        if self.columns == Some(0) {
            return Err(ValidationError::ZeroColumns);
        }
        if self.rows.is_empty() {
            return Err(ValidationError::EmptyTable);
        }
        self.width.validate()?;
        if let Some(line) = &self.borders {
            line.validate("border")?;
        }

        let mut columns = self.columns;
        let mut rows = Vec::with_capacity(self.rows.len());
        for (row_index, row) in self.rows.into_iter().enumerate() {
            let mut cells = Vec::with_capacity(row.cells.len());
            for (cell_index, cell) in row.cells.into_iter().enumerate() {
                if cell.span == 0 {
                    return Err(ValidationError::ZeroSpan {
                        row: row_index,
                        cell: cell_index,
                    });
                }
                let cell = cell
                    .build(numbering)
                    .map_err(|source| ValidationError::CellContent {
                        row: row_index,
                        cell: cell_index,
                        source: Box::new(source),
                    })?;
                cells.push(cell);
            }

            let row = TableRow { cells };
            let span_sum = row.span_sum();
            let expected = *columns.get_or_insert(span_sum);
            if expected == 0 {
                return Err(ValidationError::ZeroColumns);
            }
            if span_sum != expected {
                return Err(ValidationError::RaggedRow {
                    row: row_index,
                    span_sum,
                    columns: expected,
                });
            }
            rows.push(row);
        }

        Ok(Table {
            columns: columns.unwrap_or_default(),
            width: self.width,
            borders: self.borders,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> TableBuilder {
        TableBuilder::with_columns(2)
            .row(
                RowBuilder::new()
                    .cell(CellBuilder::with_text("Feature").shading("D3D3D3"))
                    .cell(CellBuilder::with_text("Description").shading("D3D3D3")),
            )
            .row(RowBuilder::new().text("Search").text("Full-text search"))
    }

    #[test]
    fn test_build_two_by_two() {
        let table = two_by_two().build(&Numbering::default()).unwrap();
        assert_eq!(table.columns(), 2);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].cells()[1].shading(), Some("D3D3D3"));
        assert!(table.borders().is_some());
    }

    #[test]
    fn test_columns_inferred_from_first_row() {
        let table = TableBuilder::new()
            .row(RowBuilder::new().cell(CellBuilder::with_text("wide").span(3)))
            .row(RowBuilder::new().text("a").text("b").text("c"))
            .build(&Numbering::default())
            .unwrap();
        assert_eq!(table.columns(), 3);
        assert_eq!(table.rows()[0].span_sum(), 3);
    }

    #[test]
    fn test_ragged_row() {
        let err = two_by_two()
            .row(RowBuilder::new().text("only one"))
            .build(&Numbering::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::RaggedRow {
                row: 2,
                span_sum: 1,
                columns: 2
            }
        );
    }

    #[test]
    fn test_structural_errors() {
        let numbering = Numbering::default();
        assert_eq!(TableBuilder::new().build(&numbering), Err(ValidationError::EmptyTable));
        assert_eq!(
            TableBuilder::with_columns(0).row(RowBuilder::new()).build(&numbering),
            Err(ValidationError::ZeroColumns)
        );
        assert_eq!(
            TableBuilder::new()
                .row(RowBuilder::new().cell(CellBuilder::new().span(0)))
                .build(&numbering),
            Err(ValidationError::ZeroSpan { row: 0, cell: 0 })
        );
    }

    #[test]
    fn test_table_width_checked() {
        let numbering = Numbering::default();
        assert!(two_by_two().width(TableWidth::Percent(100)).build(&numbering).is_ok());
        for width in [TableWidth::Percent(0), TableWidth::Percent(500), TableWidth::Twips(0)] {
            let err = two_by_two().width(width).build(&numbering).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidTableWidth { .. }), "{width:?}");
        }
    }

    #[test]
    fn test_cell_errors_carry_coordinates() {
        let err = TableBuilder::new()
            .row(RowBuilder::new().text("a").cell(CellBuilder::new().shading("grey")))
            .build(&Numbering::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::CellContent { row: 0, cell: 1, .. }));
        assert!(matches!(err.root_cause(), ValidationError::InvalidColor { field: "shading", .. }));

        let err = TableBuilder::new()
            .row(RowBuilder::new().cell(
                CellBuilder::new().paragraph(ParagraphBuilder::with_text("x").list("bullet1", 0)),
            ))
            .build(&Numbering::default())
            .unwrap_err();
        assert_eq!(
            err.root_cause(),
            &ValidationError::UndefinedList {
                list_id: "bullet1".to_string()
            }
        );
    }
}
