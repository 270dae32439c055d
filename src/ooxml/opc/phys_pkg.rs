/// Physical package writer: the ZIP container behind an OPC package.
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes parts into an in-memory ZIP archive.
///
/// Every entry gets the same fixed modification time, so identical part
/// sequences produce identical archives.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    deflated: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            deflated,
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive
            .start_file(pack_uri.membername(), self.deflated)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_multiple_parts() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let document = PackURI::new("/word/document.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&document, b"<document/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(zip_data)).unwrap();

        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 3);
        assert_eq!(archive.name_for_index(0), Some("[Content_Types].xml"));

        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<document/>");
    }

    #[test]
    fn test_output_is_stable() {
        let write = || {
            let mut writer = PhysPkgWriter::new();
            writer
                .write(&PackURI::new("/a.xml").unwrap(), b"<a>same</a>")
                .unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(write(), write());
    }
}
