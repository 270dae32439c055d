//! Sections and page setup.

use super::document::Block;
use crate::common::unit::inches_to_twips;
use serde::Deserialize;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Page setup of a section. All lengths are in twips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProperties {
    pub page_width: u32,
    pub page_height: u32,
    pub orientation: PageOrientation,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    /// Header distance from the top edge
    pub header_distance: u32,
    /// Footer distance from the bottom edge
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    /// US Letter, portrait, one-inch margins.
    fn default() -> Self {
        Self {
            page_width: 12240,
            page_height: 15840,
            orientation: PageOrientation::Portrait,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl SectionProperties {
    /// US Letter (8.5" x 11").
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 (210mm x 297mm).
    pub fn a4() -> Self {
        Self {
            page_width: 11906,
            page_height: 16838,
            ..Default::default()
        }
    }

    /// US Legal (8.5" x 14").
    pub fn legal() -> Self {
        Self {
            page_height: 20160,
            ..Default::default()
        }
    }

    /// Turn the page sideways, swapping width and height.
    pub fn landscape(mut self) -> Self {
        if self.orientation == PageOrientation::Portrait {
            self.orientation = PageOrientation::Landscape;
            std::mem::swap(&mut self.page_width, &mut self.page_height);
        }
        self
    }

    /// Set margins (all in inches). Negative values are treated as zero.
    pub fn margins(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        let twips = |inches: f64| inches_to_twips(inches).max(0) as u32;
        self.margin_top = twips(top);
        self.margin_bottom = twips(bottom);
        self.margin_left = twips(left);
        self.margin_right = twips(right);
        self
    }

    /// Width between the left and right margins.
    pub fn text_width(&self) -> u32 {
        self.page_width
            .saturating_sub(self.margin_left)
            .saturating_sub(self.margin_right)
    }
}

/// A run of blocks sharing one page setup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub(crate) properties: SectionProperties,
    pub(crate) blocks: Vec<Block>,
}

impl Section {
    pub fn properties(&self) -> &SectionProperties {
        &self.properties
    }

    /// Blocks in presentation order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_text_width() {
        assert_eq!(SectionProperties::letter().text_width(), 9360);
    }

    #[test]
    fn test_landscape_swaps_once() {
        let props = SectionProperties::a4().landscape().landscape();
        assert_eq!(props.orientation, PageOrientation::Landscape);
        assert_eq!((props.page_width, props.page_height), (16838, 11906));
    }

    #[test]
    fn test_margins_in_inches() {
        let props = SectionProperties::default().margins(0.5, 0.5, 1.25, -1.0);
        assert_eq!(props.margin_top, 720);
        assert_eq!(props.margin_left, 1800);
        assert_eq!(props.margin_right, 0);
        assert_eq!(props.text_width(), 12240 - 1800);
    }
}
