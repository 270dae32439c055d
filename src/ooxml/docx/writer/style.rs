/// styles.xml generation.
use super::run::{DEFAULT_FONT, DEFAULT_SIZE};
use crate::ooxml::docx::styles::{StyleRole, StyleTable};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Generate styles.xml for a style table.
///
/// Run formatting lives in the document defaults only. Role defaults are
/// resolved into every run by the body writer, so heading styles carry
/// paragraph properties (spacing, outline level) but no run properties.
pub(crate) fn generate_styles_xml(styles: &StyleTable) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:styles xmlns:w="{}">"#, namespace::WML_MAIN)?;

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    write!(
        xml,
        r#"<w:rFonts w:ascii="{0}" w:eastAsia="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
        DEFAULT_FONT
    )?;
    write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, DEFAULT_SIZE)?;
    xml.push_str(r#"<w:lang w:val="en-US"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
    xml.push_str("</w:docDefaults>");

    for role in StyleRole::ALL {
        write_role_style(&mut xml, styles, role)?;
    }

    xml.push_str(concat!(
        r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal">"#,
        r#"<w:name w:val="Normal Table"/><w:uiPriority w:val="99"/><w:semiHidden/>"#,
        r#"<w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar>"#,
        r#"<w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/>"#,
        r#"<w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/>"#,
        r#"</w:tblCellMar></w:tblPr></w:style>"#
    ));

    xml.push_str("</w:styles>");
    Ok(xml)
}

fn write_role_style(xml: &mut String, styles: &StyleTable, role: StyleRole) -> Result<()> {
    let style = styles.role(role);

    xml.push_str(r#"<w:style w:type="paragraph""#);
    if role == StyleRole::Body {
        xml.push_str(r#" w:default="1""#);
    }
    write!(xml, r#" w:styleId="{}">"#, role.style_id())?;
    write!(xml, r#"<w:name w:val="{}"/>"#, role.name())?;

    if role != StyleRole::Body {
        write!(
            xml,
            r#"<w:basedOn w:val="{0}"/><w:next w:val="{0}"/><w:uiPriority w:val="9"/>"#,
            StyleRole::Body.style_id()
        )?;
    }
    xml.push_str("<w:qFormat/>");

    let has_spacing = style.spacing_before > 0 || style.spacing_after > 0;
    if role.outline_level().is_some() || has_spacing {
        xml.push_str("<w:pPr>");
        if role.outline_level().is_some() {
            xml.push_str("<w:keepNext/><w:keepLines/>");
        }
        if has_spacing {
            write!(
                xml,
                r#"<w:spacing w:before="{}" w:after="{}"/>"#,
                style.spacing_before, style.spacing_after
            )?;
        }
        if let Some(level) = role.outline_level() {
            write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?;
        }
        xml.push_str("</w:pPr>");
    }

    xml.push_str("</w:style>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::paragraph::RunFormat;

    #[test]
    fn test_generate_styles_xml() {
        let xml = generate_styles_xml(&StyleTable::default()).unwrap();
        assert!(xml.contains("<w:docDefaults>"));
        assert!(xml.contains(r#"<w:rFonts w:ascii="Calibri""#));
        assert!(xml.contains(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#));
        for id in ["Heading1", "Heading2", "Heading3"] {
            assert!(xml.contains(&format!(r#"w:styleId="{}""#, id)));
        }
        assert!(xml.contains(r#"<w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/>"#));
        assert!(xml.ends_with("</w:styles>"));
    }

    #[test]
    fn test_role_run_formatting_not_in_styles() {
        let styles = StyleTable::default()
            .with_role(
                StyleRole::Heading1,
                RunFormat {
                    font: Some("Arial".to_string()),
                    color: Some("2E74B5".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let xml = generate_styles_xml(&styles).unwrap();
        assert!(!xml.contains("Arial"));
        assert!(!xml.contains("2E74B5"));
        // Only the document defaults carry run properties
        assert_eq!(xml.matches("<w:rPr>").count(), 1);
    }
}
