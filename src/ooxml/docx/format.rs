//! Shared formatting types for the content model and the writer.

use crate::ooxml::error::ValidationError;
use serde::Deserialize;

/// Paragraph alignment.
///
/// `Start` is the format's own default and produces no markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

impl Alignment {
    /// Value of `w:jc`, or `None` for start alignment.
    pub(crate) fn as_jc(&self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::Center => Some("center"),
            Self::End => Some("right"),
            Self::Justify => Some("both"),
        }
    }
}

/// Underline styles for text.
///
/// `None` switches off an underline inherited from the style role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderlineStyle {
    None,
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
    Wave,
}

impl UnderlineStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::Wave => "wave",
        }
    }
}

/// Line styles for paragraph and table borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
}

impl BorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }
}

/// Vertical alignment of content inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Preferred table width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableWidth {
    /// Sized to content
    #[default]
    Auto,
    /// Percentage of the text width (100 = full width)
    Percent(u32),
    /// Absolute width in twips
    Twips(u32),
}

/// Widest absolute table width accepted: 22 inches, the largest page width
/// word processors offer.
pub const MAX_TABLE_TWIPS: u32 = 31_680;

impl TableWidth {
    /// Percentages must lie in 1..=100 and absolute widths in
    /// 1..=[`MAX_TABLE_TWIPS`].
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let (value, unit, max) = match *self {
            Self::Auto => return Ok(()),
            Self::Percent(percent) => (percent, "%", 100),
            Self::Twips(twips) => (twips, " twips", MAX_TABLE_TWIPS),
        };
        if value == 0 || value > max {
            return Err(ValidationError::InvalidTableWidth { value, unit, max });
        }
        Ok(())
    }
}

/// Run colour value meaning "automatic", i.e. no explicit colour.
pub const AUTO_COLOR: &str = "auto";

/// Check a run colour: six hexadecimal digits, or [`AUTO_COLOR`].
pub(crate) fn check_run_color(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value == AUTO_COLOR {
        return Ok(());
    }
    check_color(field, value)
}

/// Check that `value` is an RGB colour written as six hexadecimal digits.
pub(crate) fn check_color(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_markup() {
        assert_eq!(Alignment::Start.as_jc(), None);
        assert_eq!(Alignment::Center.as_jc(), Some("center"));
        assert_eq!(Alignment::End.as_jc(), Some("right"));
        assert_eq!(Alignment::Justify.as_jc(), Some("both"));
    }

    #[test]
    fn test_check_color() {
        assert!(check_color("color", "D3D3D3").is_ok());
        assert!(check_color("color", "f5f5f5").is_ok());
        assert_eq!(
            check_color("shading", "#CCCCCC"),
            Err(ValidationError::InvalidColor {
                field: "shading",
                value: "#CCCCCC".to_string()
            })
        );
        assert!(check_color("color", "auto").is_err());
        assert!(check_color("color", "12345").is_err());
    }

    #[test]
    fn test_table_width_range() {
        assert!(TableWidth::Auto.validate().is_ok());
        assert!(TableWidth::Percent(100).validate().is_ok());
        assert!(TableWidth::Twips(9360).validate().is_ok());
        assert_eq!(
            TableWidth::Percent(500).validate(),
            Err(ValidationError::InvalidTableWidth {
                value: 500,
                unit: "%",
                max: 100
            })
        );
        assert!(TableWidth::Percent(0).validate().is_err());
        assert!(TableWidth::Twips(0).validate().is_err());
        assert!(TableWidth::Twips(MAX_TABLE_TWIPS + 1).validate().is_err());
    }

    #[test]
    fn test_run_color_accepts_auto() {
        assert!(check_run_color("color", AUTO_COLOR).is_ok());
        assert!(check_run_color("color", "666666").is_ok());
        assert!(check_run_color("color", "Auto").is_err());
        assert!(check_color("shading", AUTO_COLOR).is_err());
    }
}
