/// The PackURI value type.
///
/// A PackURI is a part name within an OPC package: it begins with a forward
/// slash and uses forward slashes as separators (e.g. "/word/document.xml").
/// The ZIP member name is the same string without the leading slash.
use crate::ooxml::opc::error::{OpcError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/word/document.xml")
    uri: String,
}

impl PackURI {
    /// Create a new PackURI.
    ///
    /// # Errors
    /// Returns [`OpcError::InvalidPackUri`] unless the URI begins with a
    /// slash and has no empty, "." or ".." segments.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        if uri.len() > 1
            && uri[1..]
                .split('/')
                .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI has an empty or relative segment: '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Directory portion, e.g. "/word" for "/word/document.xml".
    ///
    /// The package pseudo-partname "/" is its own base.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Filename portion, e.g. "document.xml". Empty for "/".
    pub fn filename(&self) -> &str {
        self.uri
            .rfind('/')
            .map(|pos| &self.uri[pos + 1..])
            .unwrap_or("")
    }

    /// Extension without the leading period, e.g. "xml".
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename
            .rfind('.')
            .map(|pos| &filename[pos + 1..])
            .unwrap_or("")
    }

    /// ZIP member name: the URI without its leading slash.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Reference to this part relative to `base_uri`, as written in a
    /// relationship's `Target` attribute.
    ///
    /// "/word/styles.xml" relative to "/word" is "styles.xml"; relative to
    /// "/" it is "word/styles.xml".
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments: Vec<&str> = vec![".."; from.len() - common];
        segments.extend_from_slice(&to[common..]);
        segments.join("/")
    }

    /// PackURI of the `.rels` part holding this part's relationships,
    /// e.g. "/word/_rels/document.xml.rels". For the package itself this is
    /// "/_rels/.rels".
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base_uri = self.base_uri();
        let rels_uri = if base_uri == "/" {
            format!("/_rels/{}.rels", self.filename())
        } else {
            format!("{}/_rels/{}.rels", base_uri, self.filename())
        };
        Self::new(rels_uri)
    }

    /// Get the full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_new() {
        assert!(PackURI::new("/word/document.xml").is_ok());
        assert!(PackURI::new("word/document.xml").is_err());
        assert!(PackURI::new("/word//document.xml").is_err());
        assert!(PackURI::new("/word/../document.xml").is_err());
        assert!(PackURI::new(PACKAGE_URI).is_ok());
    }

    #[test]
    fn test_components() {
        let uri = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(uri.base_uri(), "/word");
        assert_eq!(uri.filename(), "document.xml");
        assert_eq!(uri.ext(), "xml");
        assert_eq!(uri.membername(), "word/document.xml");

        let root = PackURI::new("/").unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
        assert_eq!(root.membername(), "");
    }

    #[test]
    fn test_relative_ref() {
        let styles = PackURI::new("/word/styles.xml").unwrap();
        assert_eq!(styles.relative_ref("/word"), "styles.xml");
        assert_eq!(styles.relative_ref("/"), "word/styles.xml");

        let core = PackURI::new("/docProps/core.xml").unwrap();
        assert_eq!(core.relative_ref("/word"), "../docProps/core.xml");
    }

    #[test]
    fn test_rels_uri() {
        let doc = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(doc.rels_uri().unwrap().as_str(), "/word/_rels/document.xml.rels");

        let pkg = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(pkg.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }
}
