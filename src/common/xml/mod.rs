//! XML helpers.

mod escape;

pub use escape::escape_xml;
