/// Open Packaging Conventions (OPC) writer.
///
/// An OPC package is a ZIP archive of named parts. Each part has a content
/// type declared in `[Content_Types].xml`, and parts are linked to the
/// package and to each other through `.rels` relationship parts.
///
/// - [`PackURI`]: part names and their derived `.rels` names
/// - [`Relationships`]: ordered relationship collections
/// - [`OpcPackage`]: the in-memory package
/// - [`PackageWriter`]: serialization of a package to ZIP bytes

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
