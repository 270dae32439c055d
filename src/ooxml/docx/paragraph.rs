//! Paragraphs, runs and their formatting.

use super::format::{Alignment, BorderStyle, UnderlineStyle, check_color, check_run_color};
use super::numbering::Numbering;
use super::styles::StyleRole;
use crate::common::unit::{points_to_eighths, points_to_half_points, points_to_twips};
use crate::ooxml::error::ValidationError;

/// Character formatting of a run.
///
/// Every field is optional; `None` means "inherit from the paragraph's
/// style role".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFormat {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// `Some(UnderlineStyle::None)` switches an inherited underline off
    pub underline: Option<UnderlineStyle>,
    /// Font family name
    pub font: Option<String>,
    /// Size in half-points (22 = 11pt)
    pub size: Option<u32>,
    /// RGB colour as six hex digits, or `"auto"` to drop an inherited colour
    pub color: Option<String>,
}

impl RunFormat {
    /// Field-by-field merge: values set on `self` win, unset ones come
    /// from `fallback`.
    pub fn or(&self, fallback: &RunFormat) -> RunFormat {
        RunFormat {
            bold: self.bold.or(fallback.bold),
            italic: self.italic.or(fallback.italic),
            underline: self.underline.or(fallback.underline),
            font: self.font.clone().or_else(|| fallback.font.clone()),
            size: self.size.or(fallback.size),
            color: self.color.clone().or_else(|| fallback.color.clone()),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.size == Some(0) {
            return Err(ValidationError::InvalidSize { field: "size" });
        }
        if let Some(color) = &self.color {
            check_run_color("color", color)?;
        }
        Ok(())
    }
}

/// A span of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
    format: RunFormat,
}

impl Run {
    /// Create a run with no explicit formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    /// Create a run with the given formatting.
    pub fn with_format(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.format.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.format.italic = Some(italic);
        self
    }

    pub fn underline(mut self, style: UnderlineStyle) -> Self {
        self.format.underline = Some(style);
        self
    }

    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.format.font = Some(name.into());
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn size(mut self, half_points: u32) -> Self {
        self.format.size = Some(half_points);
        self
    }

    /// Set font size in points.
    pub fn size_points(self, points: f64) -> Self {
        self.size(points_to_half_points(points))
    }

    /// Set text color using hex RGB (e.g., "FF0000" for red), or
    /// [`AUTO_COLOR`](super::format::AUTO_COLOR).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.format.color = Some(color.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Explicit formatting, before style-role resolution.
    pub fn format(&self) -> &RunFormat {
        &self.format
    }
}

/// One side of a paragraph border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderLine {
    pub style: BorderStyle,
    /// Line width in eighths of a point
    pub size: u32,
    /// Distance from the text in points
    pub space: u32,
    /// RGB colour as six hex digits
    pub color: String,
}

impl BorderLine {
    /// A line of the given style, colour and width (in eighths of a point).
    pub fn new(style: BorderStyle, color: impl Into<String>, size: u32) -> Self {
        Self {
            style,
            size,
            space: 1,
            color: color.into(),
        }
    }

    /// Set the line width in points.
    pub fn width_points(mut self, points: f64) -> Self {
        self.size = points_to_eighths(points);
        self
    }

    /// Set the distance from the text in points.
    pub fn space(mut self, points: u32) -> Self {
        self.space = points;
        self
    }

    pub(crate) fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.size == 0 {
            return Err(ValidationError::InvalidSize { field });
        }
        check_color(field, &self.color)
    }
}

impl Default for BorderLine {
    fn default() -> Self {
        Self::new(BorderStyle::Single, "000000", 4)
    }
}

/// Borders around a paragraph, per side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphBorder {
    pub top: Option<BorderLine>,
    pub left: Option<BorderLine>,
    pub bottom: Option<BorderLine>,
    pub right: Option<BorderLine>,
}

impl ParagraphBorder {
    /// The same line on all four sides.
    pub fn all(line: BorderLine) -> Self {
        Self {
            top: Some(line.clone()),
            left: Some(line.clone()),
            bottom: Some(line.clone()),
            right: Some(line),
        }
    }

    /// Sides in schema order, with their element names.
    pub(crate) fn sides(&self) -> [(&'static str, Option<&BorderLine>); 4] {
        [
            ("top", self.top.as_ref()),
            ("left", self.left.as_ref()),
            ("bottom", self.bottom.as_ref()),
            ("right", self.right.as_ref()),
        ]
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for (_, line) in self.sides() {
            if let Some(line) = line {
                line.validate("border")?;
            }
        }
        Ok(())
    }
}

/// Membership of a paragraph in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListReference {
    pub list_id: String,
    /// Zero-based nesting level
    pub level: u8,
}

/// A validated paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub(crate) role: StyleRole,
    pub(crate) alignment: Alignment,
    pub(crate) spacing_before: Option<u32>,
    pub(crate) spacing_after: Option<u32>,
    pub(crate) border: Option<ParagraphBorder>,
    pub(crate) shading: Option<String>,
    pub(crate) list: Option<ListReference>,
    pub(crate) runs: Vec<Run>,
}

impl Paragraph {
    pub fn role(&self) -> StyleRole {
        self.role
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Spacing before and after, in twips. `None` leaves the side to the
    /// style role.
    pub fn spacing(&self) -> (Option<u32>, Option<u32>) {
        (self.spacing_before, self.spacing_after)
    }

    pub fn border(&self) -> Option<&ParagraphBorder> {
        self.border.as_ref()
    }

    pub fn shading(&self) -> Option<&str> {
        self.shading.as_deref()
    }

    pub fn list(&self) -> Option<&ListReference> {
        self.list.as_ref()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// Builder for [`Paragraph`].
///
/// Nothing is checked until [`build`](Self::build), which validates the
/// paragraph against the document's list registry.
#[derive(Debug, Clone, Default)]
pub struct ParagraphBuilder {
    role: StyleRole,
    alignment: Alignment,
    spacing_before: Option<i32>,
    spacing_after: Option<i32>,
    border: Option<ParagraphBorder>,
    shading: Option<String>,
    list: Option<ListReference>,
    runs: Vec<Run>,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A body paragraph holding a single unformatted run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    /// A paragraph in the given heading (or body) role.
    pub fn heading(role: StyleRole) -> Self {
        Self::new().role(role)
    }

    pub fn role(mut self, role: StyleRole) -> Self {
        self.role = role;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set spacing before and after the paragraph, in twips.
    pub fn spacing(self, before: i32, after: i32) -> Self {
        self.spacing_before(before).spacing_after(after)
    }

    /// Set spacing before the paragraph only, in twips.
    pub fn spacing_before(mut self, before: i32) -> Self {
        self.spacing_before = Some(before);
        self
    }

    /// Set spacing after the paragraph only, in twips.
    pub fn spacing_after(mut self, after: i32) -> Self {
        self.spacing_after = Some(after);
        self
    }

    /// Set spacing before and after the paragraph, in points.
    pub fn spacing_points(self, before: f64, after: f64) -> Self {
        self.spacing(points_to_twips(before), points_to_twips(after))
    }

    pub fn border(mut self, border: ParagraphBorder) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the background fill (hex RGB).
    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    /// Make the paragraph an item of list `list_id` at `level`.
    pub fn list(mut self, list_id: impl Into<String>, level: u8) -> Self {
        self.list = Some(ListReference {
            list_id: list_id.into(),
            level,
        });
        self
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run with no explicit formatting.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.run(Run::new(text))
    }

    /// Validate and build the paragraph.
    pub fn build(self, numbering: &Numbering) -> Result<Paragraph, ValidationError> {
        let spacing_before = self
            .spacing_before
            .map(|value| non_negative("before", value))
            .transpose()?;
        let spacing_after = self
            .spacing_after
            .map(|value| non_negative("after", value))
            .transpose()?;

        if let Some(list) = &self.list {
            numbering.check_reference(&list.list_id, list.level)?;
        }
        for run in &self.runs {
            run.format.validate()?;
        }
        if let Some(border) = &self.border {
            border.validate()?;
        }
        if let Some(fill) = &self.shading {
            check_color("shading", fill)?;
        }

        Ok(Paragraph {
            role: self.role,
            alignment: self.alignment,
            spacing_before,
            spacing_after,
            border: self.border,
            shading: self.shading,
            list: self.list,
            runs: self.runs,
        })
    }
}

fn non_negative(field: &'static str, value: i32) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::NegativeSpacing { field, value })
}
