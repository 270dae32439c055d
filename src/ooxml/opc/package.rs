/// In-memory OPC package.
///
/// An `OpcPackage` owns its parts in insertion order together with the
/// package-level relationships. Insertion order is the order in which parts
/// are written to the container.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An Open Packaging Conventions package held in memory.
#[derive(Default)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the main document part.
    ///
    /// This is the target of the package's officeDocument relationship.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    /// Get a part by the type of its package-level relationship.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&dyn Part> {
        let rel = self
            .rels
            .part_with_reltype(reltype)
            .ok_or_else(|| OpcError::RelationshipNotFound(reltype.to_string()))?;
        let partname = PackURI::new(format!("{}{}", PACKAGE_URI, rel.target_ref()))?;
        self.get_part(&partname)
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .iter()
            .find(|part| part.partname() == partname)
            .map(|part| &**part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get a mutable reference to a part by its partname.
    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut dyn Part> {
        match self.parts.iter_mut().find(|part| part.partname() == partname) {
            Some(part) => Ok(&mut **part),
            None => Err(OpcError::PartNotFound(partname.to_string())),
        }
    }

    /// Add a new part to the package.
    ///
    /// Partnames are unique within a package; adding a second part under
    /// an existing name fails.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains_part(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        log::trace!("adding part {} ({})", part.partname(), part.content_type());
        self.parts.push(part);
        Ok(())
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|part| part.partname() == partname)
    }

    /// Get an iterator over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|part| &**part)
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::part::BlobPart;

    fn document_part() -> Box<BlobPart> {
        Box::new(BlobPart::new(
            PackURI::new("/word/document.xml").unwrap(),
            ct::WML_DOCUMENT_MAIN,
            b"<w:document/>".to_vec(),
        ))
    }

    #[test]
    fn test_main_document_part() {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/word/document.xml").unwrap();
        pkg.add_part(document_part()).unwrap();
        let r_id = pkg.relate_to(&partname, relationship_type::OFFICE_DOCUMENT);

        assert_eq!(r_id, "rId1");
        assert_eq!(pkg.rels().get("rId1").unwrap().target_ref(), "word/document.xml");
        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::WML_DOCUMENT_MAIN);
    }

    #[test]
    fn test_main_document_part_missing() {
        let pkg = OpcPackage::new();
        assert!(matches!(
            pkg.main_document_part(),
            Err(OpcError::RelationshipNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(document_part()).unwrap();
        let err = pkg.add_part(document_part()).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(name) if name == "/word/document.xml"));
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_part_relationships_through_package() {
        let mut pkg = OpcPackage::new();
        let document = PackURI::new("/word/document.xml").unwrap();
        let styles = PackURI::new("/word/styles.xml").unwrap();
        pkg.add_part(document_part()).unwrap();

        let r_id = pkg
            .get_part_mut(&document)
            .unwrap()
            .relate_to(&styles, relationship_type::STYLES);
        assert_eq!(r_id, "rId1");
        assert_eq!(pkg.get_part(&document).unwrap().rels().len(), 1);
        assert!(pkg.get_part(&styles).is_err());
    }
}
