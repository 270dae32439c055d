//! Style roles and the per-document style table.
//!
//! A paragraph names a [`StyleRole`]; the document's [`StyleTable`] maps
//! each role to default run formatting. Resolution is a two-level lookup:
//! explicit run formatting first, then the role default.

use super::paragraph::RunFormat;
use crate::ooxml::error::ValidationError;
use serde::Deserialize;

/// The role a paragraph plays in the document outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRole {
    #[default]
    Body,
    #[serde(alias = "heading_1")]
    Heading1,
    #[serde(alias = "heading_2")]
    Heading2,
    #[serde(alias = "heading_3")]
    Heading3,
}

impl StyleRole {
    /// All roles, in outline order.
    pub const ALL: [StyleRole; 4] = [
        StyleRole::Body,
        StyleRole::Heading1,
        StyleRole::Heading2,
        StyleRole::Heading3,
    ];

    /// Style ID in styles.xml.
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::Body => "Normal",
            Self::Heading1 => "Heading1",
            Self::Heading2 => "Heading2",
            Self::Heading3 => "Heading3",
        }
    }

    /// Display name in styles.xml.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Body => "Normal",
            Self::Heading1 => "heading 1",
            Self::Heading2 => "heading 2",
            Self::Heading3 => "heading 3",
        }
    }

    /// Outline level for headings (0-based), `None` for body text.
    pub fn outline_level(&self) -> Option<u8> {
        match self {
            Self::Body => None,
            Self::Heading1 => Some(0),
            Self::Heading2 => Some(1),
            Self::Heading3 => Some(2),
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Body => 0,
            Self::Heading1 => 1,
            Self::Heading2 => 2,
            Self::Heading3 => 3,
        }
    }
}

/// Defaults attached to one style role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleStyle {
    /// Default run formatting for paragraphs in this role
    pub run: RunFormat,
    /// Spacing before paragraphs in this role, in twips
    pub spacing_before: u32,
    /// Spacing after paragraphs in this role, in twips
    pub spacing_after: u32,
}

/// Role to default formatting, owned by a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    roles: [RoleStyle; 4],
}

impl Default for StyleTable {
    /// Bold headings at 16, 13 and 12pt; plain body text.
    fn default() -> Self {
        let heading = |size: u32, before: u32| RoleStyle {
            run: RunFormat {
                bold: Some(true),
                size: Some(size),
                ..Default::default()
            },
            spacing_before: before,
            spacing_after: 120,
        };
        Self {
            roles: [
                RoleStyle::default(),
                heading(32, 240),
                heading(26, 200),
                heading(24, 160),
            ],
        }
    }
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table where no role carries any defaults.
    pub fn empty() -> Self {
        Self {
            roles: Default::default(),
        }
    }

    /// Replace the default run formatting of `role`.
    pub fn with_role(mut self, role: StyleRole, run: RunFormat) -> Result<Self, ValidationError> {
        run.validate()?;
        self.roles[role.index()].run = run;
        Ok(self)
    }

    /// Replace the spacing of `role`, in twips.
    pub fn with_spacing(mut self, role: StyleRole, before: u32, after: u32) -> Self {
        let style = &mut self.roles[role.index()];
        style.spacing_before = before;
        style.spacing_after = after;
        self
    }

    pub fn role(&self, role: StyleRole) -> &RoleStyle {
        &self.roles[role.index()]
    }

    /// Resolve `explicit` against the defaults of `role`, field by field.
    pub fn resolve(&self, role: StyleRole, explicit: &RunFormat) -> RunFormat {
        explicit.or(&self.role(role).run)
    }
}
