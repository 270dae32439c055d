//! List definitions and the per-document list registry.

use crate::ooxml::error::ValidationError;
use serde::Deserialize;
use std::collections::HashMap;

/// Number of levels created by the convenience constructors.
pub const DEFAULT_LEVELS: usize = 9;

/// Most levels an abstract numbering definition may hold (`w:ilvl` 0 to 8).
pub const MAX_LEVELS: usize = 9;

/// Marker kind of a list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    Bullet,
    Decimal,
}

impl NumberFormat {
    /// Value of `w:numFmt`.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Decimal => "decimal",
        }
    }
}

/// One level of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLevel {
    pub format: NumberFormat,
    /// Left indent in twips
    pub indent_left: u32,
    /// Hanging indent in twips
    pub hanging: u32,
}

impl ListLevel {
    /// Level `index` of a standard scheme: each level indents half an inch
    /// further, with a quarter-inch hanging marker.
    pub fn standard(format: NumberFormat, index: usize) -> Self {
        Self {
            format,
            indent_left: u32::try_from(index)
                .map_or(u32::MAX, |index| index.saturating_add(1))
                .saturating_mul(720),
            hanging: 360,
        }
    }
}

/// A named list scheme that paragraphs can refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDefinition {
    id: String,
    levels: Vec<ListLevel>,
}

impl ListDefinition {
    pub fn new(id: impl Into<String>, levels: Vec<ListLevel>) -> Self {
        Self {
            id: id.into(),
            levels,
        }
    }

    /// Nine-level bulleted list.
    pub fn bullet(id: impl Into<String>) -> Self {
        Self::uniform(id, NumberFormat::Bullet)
    }

    /// Nine-level numbered list (1. 2. 3. ...).
    pub fn decimal(id: impl Into<String>) -> Self {
        Self::uniform(id, NumberFormat::Decimal)
    }

    fn uniform(id: impl Into<String>, format: NumberFormat) -> Self {
        let levels = (0..DEFAULT_LEVELS)
            .map(|index| ListLevel::standard(format, index))
            .collect();
        Self::new(id, levels)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn levels(&self) -> &[ListLevel] {
        &self.levels
    }
}

/// Registry of the list definitions of one document, in definition order.
#[derive(Debug, Clone, Default)]
pub struct Numbering {
    definitions: Vec<ListDefinition>,
    by_id: HashMap<String, usize>,
}

impl Numbering {
    /// Register a definition. Ids must be unique and lists must hold one
    /// to [`MAX_LEVELS`] levels.
    pub fn define(&mut self, definition: ListDefinition) -> Result<(), ValidationError> {
        if definition.levels.is_empty() {
            return Err(ValidationError::EmptyList {
                list_id: definition.id,
            });
        }
        check_level_count(&definition.id, definition.levels.len())?;
        if self.by_id.contains_key(&definition.id) {
            return Err(ValidationError::DuplicateList {
                list_id: definition.id,
            });
        }
        self.by_id
            .insert(definition.id.clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    pub fn get(&self, list_id: &str) -> Option<&ListDefinition> {
        self.by_id.get(list_id).map(|&index| &self.definitions[index])
    }

    /// Numbering instance id (`w:numId`) of a list: its 1-based position
    /// in definition order.
    pub fn num_id(&self, list_id: &str) -> Option<usize> {
        self.by_id.get(list_id).map(|&index| index + 1)
    }

    /// Check that `list_id` exists and defines `level`.
    pub fn check_reference(&self, list_id: &str, level: u8) -> Result<(), ValidationError> {
        let definition = self.get(list_id).ok_or_else(|| ValidationError::UndefinedList {
            list_id: list_id.to_string(),
        })?;
        if usize::from(level) >= definition.levels.len() {
            return Err(ValidationError::ListLevelOutOfRange {
                list_id: list_id.to_string(),
                level,
                levels: definition.levels.len(),
            });
        }
        Ok(())
    }

    /// Definitions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ListDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Reject level counts beyond what `w:abstractNum` can hold.
pub(crate) fn check_level_count(list_id: &str, levels: usize) -> Result<(), ValidationError> {
    if levels > MAX_LEVELS {
        return Err(ValidationError::TooManyLevels {
            list_id: list_id.to_string(),
            levels,
        });
    }
    Ok(())
}

impl PartialEq for Numbering {
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions
    }
}

impl Eq for Numbering {}
