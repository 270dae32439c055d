//! Office Open XML output.
//!
//! - [`opc`]: the Open Packaging Conventions container (parts, relationships,
//!   content types, ZIP)
//! - [`docx`]: the WordprocessingML content model and writer

pub mod docx;
pub mod error;
pub mod opc;

pub use error::{OoxmlError, Result, SerializationError, ValidationError};
