/// Section properties markup.
use crate::ooxml::docx::section::SectionProperties;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Write a `<w:sectPr>` with page size, margins and a single column.
pub(crate) fn write_section_properties(xml: &mut String, props: &SectionProperties) -> Result<()> {
    xml.push_str("<w:sectPr>");
    write!(
        xml,
        r#"<w:pgSz w:w="{}" w:h="{}" w:orient="{}"/>"#,
        props.page_width,
        props.page_height,
        props.orientation.as_str()
    )?;
    write!(
        xml,
        r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
        props.margin_top,
        props.margin_right,
        props.margin_bottom,
        props.margin_left,
        props.header_distance,
        props.footer_distance
    )?;
    xml.push_str(r#"<w:cols w:space="720"/>"#);
    xml.push_str("</w:sectPr>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_portrait() {
        let mut xml = String::new();
        write_section_properties(&mut xml, &SectionProperties::default()).unwrap();
        assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840" w:orient="portrait"/>"#));
        assert!(xml.contains(r#"w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#));
    }

    #[test]
    fn test_landscape() {
        let mut xml = String::new();
        write_section_properties(&mut xml, &SectionProperties::letter().landscape()).unwrap();
        assert!(xml.contains(r#"<w:pgSz w:w="15840" w:h="12240" w:orient="landscape"/>"#));
    }
}
