/// Relationship-related objects for OPC packages.
///
/// A relationship links a source (the package or a part) to a target part
/// and is identified by an rId that markup can refer to.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::Result;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Relationships from a single source, kept in creation order.
///
/// rIds are assigned sequentially, so the same sequence of `get_or_add`
/// calls always yields the same ids and the same `.rels` markup.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get or add a relationship to a target part.
    ///
    /// An existing relationship with the same type and target is reused;
    /// otherwise a new one is created with the next rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> &Relationship {
        let existing = self
            .rels
            .iter()
            .position(|rel| rel.reltype == reltype && rel.target_ref == target_ref);

        let index = match existing {
            Some(index) => index,
            None => {
                let r_id = self.next_r_id();
                self.rels.push(Relationship {
                    r_id,
                    reltype: reltype.to_string(),
                    target_ref: target_ref.to_string(),
                });
                self.rels.len() - 1
            },
        };
        &self.rels[index]
    }

    /// Next unused rId of the form "rIdN".
    fn next_r_id(&self) -> String {
        let mut n = self.rels.len() + 1;
        loop {
            let candidate = format!("rId{}", n);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Get the single relationship of a given type, if there is one.
    pub fn part_with_reltype(&self, reltype: &str) -> Option<&Relationship> {
        let mut matching = self.rels.iter().filter(|rel| rel.reltype == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Some(rel),
            _ => None,
        }
    }

    /// Iterate relationships in creation order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get the number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the markup of a `.rels` part.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        )?;

        for rel in &self.rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref)
            )?;
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }
}
