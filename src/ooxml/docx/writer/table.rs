/// Table markup.
use super::BodyContext;
use super::paragraph::{write_border_line, write_paragraph, write_shading};
use crate::ooxml::docx::format::TableWidth;
use crate::ooxml::docx::table::{Table, TableCell};
use crate::ooxml::error::{Result, SerializationError};
use std::fmt::Write as FmtWrite;

/// Write a `<w:tbl>`.
///
/// `index` identifies the table in errors; `text_width` is the section's
/// width between margins, used to size the column grid.
pub(crate) fn write_table(
    xml: &mut String,
    table: &Table,
    index: usize,
    text_width: u32,
    ctx: &BodyContext<'_>,
) -> Result<()> {
    check_grid(table, index)?;

    let columns = table.columns();
    let total_width = match table.width() {
        TableWidth::Auto => text_width,
        TableWidth::Percent(percent) => text_width.saturating_mul(percent) / 100,
        TableWidth::Twips(twips) => twips,
    };
    let column_width = total_width / columns as u32;

    xml.push_str("<w:tbl>");
    write_table_properties(xml, table)?;

    xml.push_str("<w:tblGrid>");
    for _ in 0..columns {
        write!(xml, r#"<w:gridCol w:w="{}"/>"#, column_width)?;
    }
    xml.push_str("</w:tblGrid>");

    for row in table.rows() {
        xml.push_str("<w:tr>");
        for cell in row.cells() {
            write_cell(xml, cell, column_width, ctx)?;
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
    Ok(())
}

/// Every row must cover the declared grid exactly.
fn check_grid(table: &Table, index: usize) -> Result<()> {
    if table.columns() == 0 {
        return Err(SerializationError::GridMismatch {
            table: index,
            row: 0,
            span_sum: 0,
            columns: 0,
        }
        .into());
    }
    for (row_index, row) in table.rows().iter().enumerate() {
        let span_sum = row.span_sum();
        if span_sum != table.columns() {
            return Err(SerializationError::GridMismatch {
                table: index,
                row: row_index,
                span_sum,
                columns: table.columns(),
            }
            .into());
        }
    }
    Ok(())
}

/// Write `<w:tblPr>`: preferred width, then borders.
fn write_table_properties(xml: &mut String, table: &Table) -> Result<()> {
    xml.push_str("<w:tblPr>");
    match table.width() {
        TableWidth::Auto => xml.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#),
        // Percentages are stored in fiftieths of a percent
        TableWidth::Percent(percent) => {
            write!(xml, r#"<w:tblW w:w="{}" w:type="pct"/>"#, percent.saturating_mul(50))?
        },
        TableWidth::Twips(twips) => write!(xml, r#"<w:tblW w:w="{}" w:type="dxa"/>"#, twips)?,
    }

    if let Some(line) = table.borders() {
        xml.push_str("<w:tblBorders>");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            write_border_line(xml, side, line)?;
        }
        xml.push_str("</w:tblBorders>");
    }
    xml.push_str("</w:tblPr>");
    Ok(())
}

/// Write a `<w:tc>`. Spanned cells emit `w:gridSpan` rather than
/// placeholder cells.
fn write_cell(xml: &mut String, cell: &TableCell, column_width: u32, ctx: &BodyContext<'_>) -> Result<()> {
    xml.push_str("<w:tc><w:tcPr>");
    write!(
        xml,
        r#"<w:tcW w:w="{}" w:type="dxa"/>"#,
        column_width * cell.span() as u32
    )?;
    if cell.span() > 1 {
        write!(xml, r#"<w:gridSpan w:val="{}"/>"#, cell.span())?;
    }
    if let Some(fill) = cell.shading() {
        write_shading(xml, fill)?;
    }
    if let Some(align) = cell.vertical_align() {
        write!(xml, r#"<w:vAlign w:val="{}"/>"#, align.as_str())?;
    }
    xml.push_str("</w:tcPr>");

    // A cell must end with a paragraph
    if cell.paragraphs().is_empty() {
        xml.push_str("<w:p/>");
    }
    for paragraph in cell.paragraphs() {
        write_paragraph(xml, paragraph, ctx)?;
    }

    xml.push_str("</w:tc>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::format::VerticalAlignment;
    use crate::ooxml::docx::numbering::Numbering;
    use crate::ooxml::docx::styles::StyleTable;
    use crate::ooxml::docx::table::{CellBuilder, RowBuilder, TableBuilder};
    use crate::ooxml::error::OoxmlError;

    fn render(table: &Table) -> Result<String> {
        let styles = StyleTable::default();
        let numbering = Numbering::default();
        let ctx = BodyContext {
            styles: &styles,
            numbering: &numbering,
        };
        let mut xml = String::new();
        write_table(&mut xml, table, 0, 9360, &ctx)?;
        Ok(xml)
    }

    #[test]
    fn test_grid_and_header_shading() {
        let table = TableBuilder::with_columns(2)
            .width(TableWidth::Percent(100))
            .row(
                RowBuilder::new()
                    .cell(CellBuilder::with_text("Feature").shading("D3D3D3").vertical_align(VerticalAlignment::Center))
                    .cell(CellBuilder::with_text("Description").shading("D3D3D3")),
            )
            .row(RowBuilder::new().text("a").cell(CellBuilder::new()))
            .build(&Numbering::default())
            .unwrap();

        let xml = render(&table).unwrap();
        assert!(xml.contains(r#"<w:tblW w:w="5000" w:type="pct"/>"#));
        assert_eq!(xml.matches("<w:gridCol ").count(), 2);
        assert!(xml.contains(r#"<w:gridCol w:w="4680"/>"#));
        assert_eq!(xml.matches(r#"w:fill="D3D3D3""#).count(), 2);
        assert!(xml.contains(r#"<w:shd w:val="clear" w:color="auto" w:fill="D3D3D3"/><w:vAlign w:val="center"/>"#));
        assert!(xml.contains("</w:tcPr><w:p/></w:tc>"));
        assert_eq!(xml.matches("<w:insideV ").count(), 1);
    }

    #[test]
    fn test_spanned_cell() {
        let table = TableBuilder::new()
            .no_borders()
            .row(RowBuilder::new().cell(CellBuilder::with_text("all").span(3)))
            .row(RowBuilder::new().text("a").text("b").text("c"))
            .build(&Numbering::default())
            .unwrap();

        let xml = render(&table).unwrap();
        assert!(xml.contains(r#"<w:tcW w:w="9360" w:type="dxa"/><w:gridSpan w:val="3"/>"#));
        assert_eq!(xml.matches("<w:tc>").count(), 4);
        assert!(!xml.contains("<w:tblBorders>"));
    }

    #[test]
    fn test_grid_recheck() {
        let mut table = TableBuilder::new()
            .row(RowBuilder::new().text("a").text("b"))
            .build(&Numbering::default())
            .unwrap();
        table.columns = 3;

        let err = render(&table).unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::Serialization(SerializationError::GridMismatch {
                table: 0,
                row: 0,
                span_sum: 2,
                columns: 3
            })
        ));
    }
}
