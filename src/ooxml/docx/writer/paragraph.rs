/// Paragraph markup.
use super::run::write_run;
use super::BodyContext;
use crate::common::xml::escape_xml;
use crate::ooxml::docx::paragraph::{BorderLine, Paragraph};
use crate::ooxml::docx::styles::StyleRole;
use crate::ooxml::error::{Result, SerializationError};
use std::fmt::Write as FmtWrite;

/// Write a `<w:p>` with its properties and runs.
pub(crate) fn write_paragraph(xml: &mut String, paragraph: &Paragraph, ctx: &BodyContext<'_>) -> Result<()> {
    xml.push_str("<w:p>");
    write_paragraph_properties(xml, paragraph, ctx)?;
    for run in paragraph.runs() {
        let resolved = ctx.styles.resolve(paragraph.role(), run.format());
        write_run(xml, run, &resolved)?;
    }
    xml.push_str("</w:p>");
    Ok(())
}

/// Write `<w:pPr>` in schema order: pStyle, numPr, pBdr, shd, spacing, jc.
fn write_paragraph_properties(xml: &mut String, paragraph: &Paragraph, ctx: &BodyContext<'_>) -> Result<()> {
    let mut props = String::new();

    if paragraph.role() != StyleRole::Body {
        write!(props, r#"<w:pStyle w:val="{}"/>"#, paragraph.role().style_id())?;
    }

    if let Some(list) = paragraph.list() {
        let num_id = ctx
            .numbering
            .num_id(&list.list_id)
            .ok_or_else(|| SerializationError::UndefinedList {
                list_id: list.list_id.clone(),
            })?;
        write!(
            props,
            r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
            list.level, num_id
        )?;
    }

    if let Some(border) = paragraph.border() {
        props.push_str("<w:pBdr>");
        for (side, line) in border.sides() {
            if let Some(line) = line {
                write_border_line(&mut props, side, line)?;
            }
        }
        props.push_str("</w:pBdr>");
    }

    if let Some(fill) = paragraph.shading() {
        write_shading(&mut props, fill)?;
    }

    // An unset side inherits from the style; an explicit zero is written
    let (before, after) = paragraph.spacing();
    if before.is_some() || after.is_some() {
        props.push_str("<w:spacing");
        if let Some(before) = before {
            write!(props, r#" w:before="{}""#, before)?;
        }
        if let Some(after) = after {
            write!(props, r#" w:after="{}""#, after)?;
        }
        props.push_str("/>");
    }

    if let Some(jc) = paragraph.alignment().as_jc() {
        write!(props, r#"<w:jc w:val="{}"/>"#, jc)?;
    }

    if !props.is_empty() {
        xml.push_str("<w:pPr>");
        xml.push_str(&props);
        xml.push_str("</w:pPr>");
    }
    Ok(())
}

/// Write one border side, e.g. `<w:top w:val="single" .../>`.
pub(crate) fn write_border_line(xml: &mut String, side: &str, line: &BorderLine) -> Result<()> {
    write!(
        xml,
        r#"<w:{} w:val="{}" w:sz="{}" w:space="{}" w:color="{}"/>"#,
        side,
        line.style.as_str(),
        line.size,
        line.space,
        escape_xml(&line.color)
    )?;
    Ok(())
}

/// Write a solid background fill.
pub(crate) fn write_shading(xml: &mut String, fill: &str) -> Result<()> {
    write!(
        xml,
        r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
        escape_xml(fill)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::format::{Alignment, BorderStyle};
    use crate::ooxml::docx::numbering::{ListDefinition, Numbering};
    use crate::ooxml::docx::paragraph::{ParagraphBorder, ParagraphBuilder, Run};
    use crate::ooxml::docx::styles::StyleTable;
    use crate::ooxml::error::OoxmlError;

    fn render(builder: ParagraphBuilder, numbering: &Numbering) -> String {
        let styles = StyleTable::default();
        let paragraph = builder.build(numbering).unwrap();
        let ctx = BodyContext {
            styles: &styles,
            numbering,
        };
        let mut xml = String::new();
        write_paragraph(&mut xml, &paragraph, &ctx).unwrap();
        xml
    }

    #[test]
    fn test_body_paragraph_without_properties() {
        assert_eq!(
            render(ParagraphBuilder::with_text("Hello"), &Numbering::default()),
            "<w:p><w:r><w:t>Hello</w:t></w:r></w:p>"
        );
        assert_eq!(render(ParagraphBuilder::new(), &Numbering::default()), "<w:p></w:p>");
    }

    #[test]
    fn test_heading_runs_carry_resolved_formatting() {
        let xml = render(
            ParagraphBuilder::heading(StyleRole::Heading1)
                .alignment(Alignment::Center)
                .run(Run::new("Title").font("Arial")),
            &Numbering::default(),
        );
        assert!(xml.starts_with(r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/><w:jc w:val="center"/></w:pPr>"#));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml.contains(r#"w:ascii="Arial""#));
    }

    #[test]
    fn test_code_block_properties_in_schema_order() {
        let xml = render(
            ParagraphBuilder::new()
                .border(ParagraphBorder::all(BorderLine::new(BorderStyle::Single, "CCCCCC", 4)))
                .shading("F5F5F5")
                .spacing(0, 120)
                .alignment(Alignment::End)
                .run(Run::new("cargo build").font("Courier New").size(20)),
            &Numbering::default(),
        );
        let order = ["<w:pBdr>", "<w:shd ", "<w:spacing", "<w:jc "];
        let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(xml.contains(r#"<w:spacing w:before="0" w:after="120"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="right"/>"#));
        assert!(xml.contains(r#"<w:left w:val="single" w:sz="4" w:space="1" w:color="CCCCCC"/>"#));
    }

    #[test]
    fn test_zero_spacing_overrides_heading_style() {
        let xml = render(
            ParagraphBuilder::heading(StyleRole::Heading1).spacing(0, 0).text("Flush"),
            &Numbering::default(),
        );
        assert!(xml.starts_with(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/><w:spacing w:before="0" w:after="0"/></w:pPr>"#
        ));

        let xml = render(
            ParagraphBuilder::heading(StyleRole::Heading1).spacing_after(100).text("Title"),
            &Numbering::default(),
        );
        assert!(xml.contains(r#"<w:spacing w:after="100"/>"#));
        assert!(!xml.contains("w:before"));
    }

    #[test]
    fn test_list_item() {
        let mut numbering = Numbering::default();
        numbering.define(ListDefinition::decimal("steps")).unwrap();
        numbering.define(ListDefinition::bullet("bullet1")).unwrap();
        let xml = render(ParagraphBuilder::with_text("item").list("bullet1", 1), &numbering);
        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="1"/><w:numId w:val="2"/></w:numPr>"#));
    }

    #[test]
    fn test_undefined_list_recheck() {
        let mut defined = Numbering::default();
        defined.define(ListDefinition::bullet("bullet1")).unwrap();
        let paragraph = ParagraphBuilder::with_text("x").list("bullet1", 0).build(&defined).unwrap();

        let styles = StyleTable::default();
        let empty = Numbering::default();
        let ctx = BodyContext {
            styles: &styles,
            numbering: &empty,
        };
        let err = write_paragraph(&mut String::new(), &paragraph, &ctx).unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::Serialization(SerializationError::UndefinedList { ref list_id }) if list_id == "bullet1"
        ));
    }
}
