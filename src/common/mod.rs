//! Common utilities shared by the model and the package writer.
//!
//! Contains XML text escaping and conversions between the length units used
//! by WordprocessingML (twips, half-points, eighths of a point).

pub mod unit;
pub mod xml;

pub use unit::{inches_to_twips, points_to_half_points, points_to_twips};
pub use xml::escape_xml;
