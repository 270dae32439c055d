/// Document serialization: from the content model to a .docx package.
use super::BodyContext;
use super::numbering::generate_numbering_xml;
use super::paragraph::write_paragraph;
use super::props::{generate_app_xml, generate_core_xml};
use super::section::write_section_properties;
use super::settings::generate_settings_xml;
use super::style::generate_styles_xml;
use super::table::write_table;
use crate::ooxml::docx::document::{Block, Document};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, PackageWriter, Part};
use std::fmt::Write as FmtWrite;
use std::path::Path;

pub const DOCUMENT_PART: &str = "/word/document.xml";
pub const STYLES_PART: &str = "/word/styles.xml";
pub const SETTINGS_PART: &str = "/word/settings.xml";
pub const NUMBERING_PART: &str = "/word/numbering.xml";
pub const CORE_PROPERTIES_PART: &str = "/docProps/core.xml";
pub const APP_PROPERTIES_PART: &str = "/docProps/app.xml";

/// Serialize a document into the bytes of a .docx package.
///
/// The output depends only on the document: equal documents produce
/// byte-identical packages. Nothing is returned unless every part was
/// generated.
pub fn serialize(document: &Document) -> Result<Vec<u8>> {
    let package = build_package(document)?;
    let bytes = PackageWriter::to_bytes(&package)?;
    log::debug!(
        "serialized package: {} part(s), {} bytes",
        package.part_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// Generate every part of the document and assemble them into a package.
pub fn build_package(document: &Document) -> Result<OpcPackage> {
    log::debug!(
        "serializing document: {} section(s), {} list(s)",
        document.sections.len(),
        document.numbering.len()
    );

    let document_xml = generate_document_xml(document)?;
    let styles_xml = generate_styles_xml(&document.styles)?;
    let settings_xml = generate_settings_xml()?;
    let numbering_xml = if document.numbering.is_empty() {
        None
    } else {
        Some(generate_numbering_xml(&document.numbering)?)
    };
    let core_xml = generate_core_xml(&document.properties)?;
    let app_xml = generate_app_xml(document)?;

    let document_uri = PackURI::new(DOCUMENT_PART)?;
    let styles_uri = PackURI::new(STYLES_PART)?;
    let settings_uri = PackURI::new(SETTINGS_PART)?;
    let core_uri = PackURI::new(CORE_PROPERTIES_PART)?;
    let app_uri = PackURI::new(APP_PROPERTIES_PART)?;

    let mut main = BlobPart::new(
        document_uri.clone(),
        ct::WML_DOCUMENT_MAIN,
        document_xml.into_bytes(),
    );
    main.relate_to(&styles_uri, rt::STYLES);
    main.relate_to(&settings_uri, rt::SETTINGS);

    let numbering_part = match numbering_xml {
        Some(xml) => {
            let numbering_uri = PackURI::new(NUMBERING_PART)?;
            main.relate_to(&numbering_uri, rt::NUMBERING);
            Some(BlobPart::new(numbering_uri, ct::WML_NUMBERING, xml.into_bytes()))
        },
        None => None,
    };

    let mut package = OpcPackage::new();
    package.add_part(Box::new(main))?;
    package.add_part(Box::new(BlobPart::new(
        styles_uri,
        ct::WML_STYLES,
        styles_xml.into_bytes(),
    )))?;
    package.add_part(Box::new(BlobPart::new(
        settings_uri,
        ct::WML_SETTINGS,
        settings_xml.into_bytes(),
    )))?;
    if let Some(part) = numbering_part {
        package.add_part(Box::new(part))?;
    }
    package.add_part(Box::new(BlobPart::new(
        core_uri.clone(),
        ct::OPC_CORE_PROPERTIES,
        core_xml.into_bytes(),
    )))?;
    package.add_part(Box::new(BlobPart::new(
        app_uri.clone(),
        ct::OFC_EXTENDED_PROPERTIES,
        app_xml.into_bytes(),
    )))?;

    package.relate_to(&document_uri, rt::OFFICE_DOCUMENT);
    package.relate_to(&core_uri, rt::CORE_PROPERTIES);
    package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

    Ok(package)
}

/// Generate word/document.xml.
///
/// Every section except the last ends with an empty paragraph carrying its
/// `<w:sectPr>`; the last section's `<w:sectPr>` closes the body.
pub(crate) fn generate_document_xml(document: &Document) -> Result<String> {
    let ctx = BodyContext {
        styles: &document.styles,
        numbering: &document.numbering,
    };
    let mut xml = String::with_capacity(8192);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
        namespace::WML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;

    let mut table_index = 0;
    let section_count = document.sections.len();
    for (section_index, section) in document.sections.iter().enumerate() {
        for block in &section.blocks {
            match block {
                Block::Paragraph(paragraph) => write_paragraph(&mut xml, paragraph, &ctx)?,
                Block::Table(table) => {
                    write_table(&mut xml, table, table_index, section.properties.text_width(), &ctx)?;
                    table_index += 1;
                },
            }
        }

        if section_index + 1 < section_count {
            xml.push_str("<w:p><w:pPr>");
            write_section_properties(&mut xml, &section.properties)?;
            xml.push_str("</w:pPr></w:p>");
        } else {
            write_section_properties(&mut xml, &section.properties)?;
        }
    }

    xml.push_str("</w:body></w:document>");
    log::trace!("document.xml: {} bytes, {} table(s)", xml.len(), table_index);
    Ok(xml)
}

impl Document {
    /// Serialize into .docx bytes. See [`serialize`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    /// Serialize and write the package to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = build_package(self)?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }

    /// Serialize and write the package to a stream.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let package = build_package(self)?;
        PackageWriter::write_to_stream(writer, &package)?;
        Ok(())
    }
}
