//! Error types for document construction and packaging.
//!
//! Construction problems surface as [`ValidationError`] from the builder call
//! that introduced them. [`SerializationError`] is raised by the writer's own
//! re-check of the model. Both are wrapped by the crate-wide [`OoxmlError`].
use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

/// Result type for docpack operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// A malformed content model, reported when the offending node is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Paragraph spacing below zero
    #[error("paragraph spacing '{field}' must be non-negative, got {value}")]
    NegativeSpacing { field: &'static str, value: i32 },

    /// Paragraph references a list id with no definition
    #[error("undefined list '{list_id}'")]
    UndefinedList { list_id: String },

    /// Paragraph references a level the list does not define
    #[error("list '{list_id}' defines {levels} level(s), level {level} requested")]
    ListLevelOutOfRange {
        list_id: String,
        level: u8,
        levels: usize,
    },

    /// Two list definitions share an id
    #[error("list '{list_id}' is already defined")]
    DuplicateList { list_id: String },

    /// List definition without levels
    #[error("list '{list_id}' has no levels")]
    EmptyList { list_id: String },

    /// List definition with more levels than a numbering part allows
    #[error("list '{list_id}' has {levels} levels, at most 9 are allowed")]
    TooManyLevels { list_id: String, levels: usize },

    /// Colour that is not six hexadecimal digits
    #[error("{field} must be six hexadecimal digits, got '{value}'")]
    InvalidColor { field: &'static str, value: String },

    /// Zero-sized font or border
    #[error("{field} must be greater than zero")]
    InvalidSize { field: &'static str },

    /// Table without rows
    #[error("table has no rows")]
    EmptyTable,

    /// Table width of zero or beyond the page
    #[error("table width {value}{unit} is out of range, expected 1 to {max}")]
    InvalidTableWidth {
        value: u32,
        unit: &'static str,
        max: u32,
    },

    /// Table declaring zero columns
    #[error("table must declare at least one column")]
    ZeroColumns,

    /// Cell with a column span of zero
    #[error("row {row}, cell {cell}: column span must be at least 1")]
    ZeroSpan { row: usize, cell: usize },

    /// Row whose spans do not add up to the table's column count
    #[error("row {row} spans {span_sum} column(s), table declares {columns}")]
    RaggedRow {
        row: usize,
        span_sum: usize,
        columns: usize,
    },

    /// Invalid content inside a table cell
    #[error("row {row}, cell {cell}: {source}")]
    CellContent {
        row: usize,
        cell: usize,
        source: Box<ValidationError>,
    },

    /// Document without sections
    #[error("document must contain at least one section")]
    NoSections,
}

impl ValidationError {
    /// The innermost error, looking through cell coordinates.
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            Self::CellContent { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A model that passed construction but failed the writer's re-check.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Paragraph references a list the document does not define
    #[error("paragraph references undefined list '{list_id}'")]
    UndefinedList { list_id: String },

    /// Table row that does not fill the declared grid
    #[error("table {table}, row {row} spans {span_sum} column(s), grid has {columns}")]
    GridMismatch {
        table: usize,
        row: usize,
        span_sum: usize,
        columns: usize,
    },

    /// Formatting into the markup buffer failed
    #[error("failed to format markup: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Content model validation failure
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Serializer re-check failure
    #[error("serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] OpcError),

    /// Validation failure located inside a document description
    #[error("{path}: {source}")]
    Description {
        path: String,
        source: ValidationError,
    },

    /// Malformed description text
    #[error("invalid description: {0}")]
    Yaml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Serialization(SerializationError::Fmt(err))
    }
}
