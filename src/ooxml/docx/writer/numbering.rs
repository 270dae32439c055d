/// numbering.xml generation.
use crate::common::xml::escape_xml;
use crate::ooxml::docx::numbering::{NumberFormat, Numbering};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Level text shown for bullet levels.
const BULLET_TEXT: &str = "\u{2022}";

/// Generate numbering.xml: one abstract definition and one instance per
/// list, in definition order. Instance ids are 1-based.
pub(crate) fn generate_numbering_xml(numbering: &Numbering) -> Result<String> {
    let mut xml = String::with_capacity(1024 + numbering.len() * 2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:numbering xmlns:w="{}">"#, namespace::WML_MAIN)?;

    for (index, definition) in numbering.iter().enumerate() {
        write!(xml, r#"<w:abstractNum w:abstractNumId="{}">"#, index)?;
        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(definition.id()))?;
        for (level_index, level) in definition.levels().iter().enumerate() {
            let text = match level.format {
                NumberFormat::Bullet => BULLET_TEXT.to_string(),
                NumberFormat::Decimal => format!("%{}.", level_index + 1),
            };
            write!(
                xml,
                concat!(
                    r#"<w:lvl w:ilvl="{}"><w:start w:val="1"/><w:numFmt w:val="{}"/>"#,
                    r#"<w:lvlText w:val="{}"/><w:lvlJc w:val="left"/>"#,
                    r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr></w:lvl>"#
                ),
                level_index,
                level.format.as_str(),
                text,
                level.indent_left,
                level.hanging
            )?;
        }
        xml.push_str("</w:abstractNum>");
    }

    // Instances follow all abstract definitions
    for index in 0..numbering.len() {
        write!(
            xml,
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            index + 1,
            index
        )?;
    }

    xml.push_str("</w:numbering>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::numbering::ListDefinition;

    #[test]
    fn test_definitions_in_order() {
        let mut numbering = Numbering::default();
        numbering.define(ListDefinition::bullet("bullet1")).unwrap();
        numbering.define(ListDefinition::decimal("steps")).unwrap();

        let xml = generate_numbering_xml(&numbering).unwrap();
        assert_eq!(xml.matches("<w:abstractNum ").count(), 2);
        assert_eq!(xml.matches("<w:lvl ").count(), 18);
        assert!(xml.contains(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#));
        assert!(xml.contains(r#"<w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>"#));
        assert!(xml.contains(r#"<w:lvlText w:val="%3."/>"#));
        assert!(xml.contains(r#"<w:ind w:left="720" w:hanging="360"/>"#));

        let last_abstract = xml.rfind("</w:abstractNum>").unwrap();
        let first_num = xml.find("<w:num ").unwrap();
        assert!(last_abstract < first_num);
        assert!(xml.find(r#"w:val="bullet1""#).unwrap() < xml.find(r#"w:val="steps""#).unwrap());
    }
}
