/// Run markup.
use crate::common::xml::escape_xml;
use crate::ooxml::docx::format::{AUTO_COLOR, UnderlineStyle};
use crate::ooxml::docx::paragraph::{Run, RunFormat};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Font family declared in the package's document defaults.
pub(crate) const DEFAULT_FONT: &str = "Calibri";

/// Run size (half-points) declared in the package's document defaults.
pub(crate) const DEFAULT_SIZE: u32 = 22;

/// Write a `<w:r>` for `run` with its fully resolved formatting.
pub(crate) fn write_run(xml: &mut String, run: &Run, resolved: &RunFormat) -> Result<()> {
    xml.push_str("<w:r>");
    write_run_properties(xml, resolved)?;
    write_text(xml, run.text())?;
    xml.push_str("</w:r>");
    Ok(())
}

/// Write `<w:rPr>` holding only the fields that differ from the document
/// defaults (Calibri, 11pt, regular, automatic colour). Nothing is written
/// when no field differs.
pub(crate) fn write_run_properties(xml: &mut String, format: &RunFormat) -> Result<()> {
    let mut props = String::new();

    if let Some(font) = format.font.as_deref().filter(|font| *font != DEFAULT_FONT) {
        let font = escape_xml(font);
        write!(
            props,
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            font
        )?;
    }
    if format.bold == Some(true) {
        props.push_str("<w:b/><w:bCs/>");
    }
    if format.italic == Some(true) {
        props.push_str("<w:i/><w:iCs/>");
    }
    if let Some(color) = format.color.as_deref().filter(|color| *color != AUTO_COLOR) {
        write!(props, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
    }
    if let Some(size) = format.size.filter(|&size| size != DEFAULT_SIZE) {
        write!(props, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size)?;
    }
    if let Some(underline) = format.underline.filter(|&style| style != UnderlineStyle::None) {
        write!(props, r#"<w:u w:val="{}"/>"#, underline.as_str())?;
    }

    if !props.is_empty() {
        xml.push_str("<w:rPr>");
        xml.push_str(&props);
        xml.push_str("</w:rPr>");
    }
    Ok(())
}

/// Write run text, turning line feeds into breaks and tabs into tab
/// characters.
fn write_text(xml: &mut String, text: &str) -> Result<()> {
    for (line_index, line) in text.split('\n').enumerate() {
        if line_index > 0 {
            xml.push_str("<w:br/>");
        }
        for (piece_index, piece) in line.split('\t').enumerate() {
            if piece_index > 0 {
                xml.push_str("<w:tab/>");
            }
            if piece.is_empty() {
                continue;
            }
            // Leading or trailing whitespace is dropped unless preserved
            if piece.starts_with(char::is_whitespace) || piece.ends_with(char::is_whitespace) {
                write!(xml, r#"<w:t xml:space="preserve">{}</w:t>"#, escape_xml(piece))?;
            } else {
                write!(xml, "<w:t>{}</w:t>", escape_xml(piece))?;
            }
        }
    }
    Ok(())
}
