/// Document property parts: docProps/core.xml and docProps/app.xml.
use crate::common::xml::escape_xml;
use crate::ooxml::docx::document::{Block, Document, DocumentProperties};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use chrono::SecondsFormat;
use std::fmt::Write as FmtWrite;

/// Application name recorded in app.xml.
const APPLICATION: &str = "docpack";

/// Generate docProps/core.xml. Unset properties are omitted.
pub(crate) fn generate_core_xml(props: &DocumentProperties) -> Result<String> {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
        namespace::OPC_CORE_PROPERTIES,
        namespace::DC,
        namespace::DC_TERMS,
        namespace::XSI
    )?;

    let elements = [
        ("dc:title", &props.title),
        ("dc:subject", &props.subject),
        ("dc:creator", &props.creator),
        ("cp:keywords", &props.keywords),
        ("dc:description", &props.description),
    ];
    for (name, value) in elements {
        if let Some(value) = value {
            write!(xml, "<{0}>{1}</{0}>", name, escape_xml(value))?;
        }
    }

    if let Some(created) = props.created {
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            created.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
    }

    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Generate docProps/app.xml with the application name and a paragraph count.
pub(crate) fn generate_app_xml(document: &Document) -> Result<String> {
    let paragraphs: usize = document
        .blocks()
        .map(|block| match block {
            Block::Paragraph(_) => 1,
            Block::Table(table) => table
                .rows()
                .iter()
                .flat_map(|row| row.cells())
                .map(|cell| cell.paragraphs().len().max(1))
                .sum(),
        })
        .sum();

    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<Properties xmlns="{}">"#, namespace::OFC_EXTENDED_PROPERTIES)?;
    write!(xml, "<Application>{}</Application>", APPLICATION)?;
    write!(xml, "<Paragraphs>{}</Paragraphs>", paragraphs)?;
    xml.push_str("</Properties>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::document::DocumentBuilder;
    use crate::ooxml::docx::paragraph::ParagraphBuilder;
    use crate::ooxml::docx::section::SectionProperties;
    use crate::ooxml::docx::table::{CellBuilder, RowBuilder, TableBuilder};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_core_properties() {
        let props = DocumentProperties {
            title: Some("Guide & Notes".to_string()),
            creator: Some("Docs Team".to_string()),
            created: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).single(),
            ..Default::default()
        };
        let xml = generate_core_xml(&props).unwrap();
        assert!(xml.contains("<dc:title>Guide &amp; Notes</dc:title>"));
        assert!(xml.contains("<dc:creator>Docs Team</dc:creator>"));
        assert!(xml.contains(">2024-03-01T09:30:00Z</dcterms:created>"));
        assert!(!xml.contains("dc:subject"));
    }

    #[test]
    fn test_core_properties_without_timestamp() {
        let xml = generate_core_xml(&DocumentProperties::default()).unwrap();
        assert!(!xml.contains("dcterms:created>"));
        assert!(xml.ends_with(r#"XMLSchema-instance"></cp:coreProperties>"#));
    }

    #[test]
    fn test_app_paragraph_count() {
        let mut builder = DocumentBuilder::new();
        builder
            .add_section(SectionProperties::default())
            .paragraph(ParagraphBuilder::with_text("one"))
            .unwrap()
            .table(
                TableBuilder::new()
                    .row(RowBuilder::new().text("a").cell(CellBuilder::new()))
                    .row(RowBuilder::new().cell(CellBuilder::new().text("b").text("c")).text("d")),
            )
            .unwrap();
        let xml = generate_app_xml(&builder.build().unwrap()).unwrap();
        assert!(xml.contains("<Application>docpack</Application>"));
        assert!(xml.contains("<Paragraphs>6</Paragraphs>"));
    }
}
