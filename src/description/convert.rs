//! Conversion from descriptions to the content model.

use super::{
    BlockDescription, BorderDescription, CellDescription, CellContent, Description, ListDescription,
    PageDescription, PageSize, ParagraphDescription, PropertiesDescription, RunDescription,
    RunFormatDescription, TableDescription,
};
use crate::ooxml::docx::document::{Document, DocumentBuilder, DocumentProperties};
use crate::ooxml::docx::numbering::{DEFAULT_LEVELS, ListDefinition, ListLevel, check_level_count};
use crate::ooxml::docx::paragraph::{BorderLine, ParagraphBorder, ParagraphBuilder, Run, RunFormat};
use crate::ooxml::docx::section::{PageOrientation, SectionProperties};
use crate::ooxml::docx::styles::StyleTable;
use crate::ooxml::docx::table::{CellBuilder, RowBuilder, TableBuilder};
use crate::ooxml::error::{OoxmlError, Result, ValidationError};

/// Attach the path of the offending entry to a validation error.
fn at(path: impl Into<String>) -> impl FnOnce(ValidationError) -> OoxmlError {
    let path = path.into();
    move |source| OoxmlError::Description { path, source }
}

impl Description {
    /// Build the described document, validating every entry.
    pub fn into_document(self) -> Result<Document> {
        let mut styles = StyleTable::default();
        for (role, style) in self.styles {
            let path = format!("styles.{}", role.style_id().to_ascii_lowercase());
            let defaults = styles.role(role).clone();
            styles = styles
                .with_role(role, style.run.into_format())
                .map_err(at(path))?
                .with_spacing(
                    role,
                    style.spacing_before.unwrap_or(defaults.spacing_before),
                    style.spacing_after.unwrap_or(defaults.spacing_after),
                );
        }

        let mut builder = DocumentBuilder::new().with_styles(styles);
        builder.properties(self.properties.into());

        for (index, list) in self.lists.into_iter().enumerate() {
            let path = format!("lists[{}]", index);
            let definition = list.into_definition().map_err(at(path.clone()))?;
            builder.define_list(definition).map_err(at(path))?;
        }

        for (section_index, section) in self.sections.into_iter().enumerate() {
            let mut section_builder = builder.add_section(section.page.into_properties());
            for (block_index, block) in section.blocks.into_iter().enumerate() {
                let path = format!("sections[{}].blocks[{}]", section_index, block_index);
                match block {
                    BlockDescription::Paragraph(paragraph) => {
                        section_builder
                            .paragraph(paragraph.into_builder())
                            .map_err(at(path))?;
                    },
                    BlockDescription::Table(table) => {
                        section_builder.table(table.into_builder()).map_err(at(path))?;
                    },
                }
            }
        }

        builder.build().map_err(at("sections"))
    }
}

impl From<PropertiesDescription> for DocumentProperties {
    fn from(props: PropertiesDescription) -> Self {
        DocumentProperties {
            title: props.title,
            subject: props.subject,
            creator: props.creator,
            keywords: props.keywords,
            description: props.description,
            created: props.created,
        }
    }
}

impl ListDescription {
    /// The level count is checked before any level is created.
    fn into_definition(self) -> std::result::Result<ListDefinition, ValidationError> {
        let count = self.levels.unwrap_or(DEFAULT_LEVELS);
        check_level_count(&self.id, count)?;
        let levels = (0..count)
            .map(|index| ListLevel::standard(self.format, index))
            .collect();
        Ok(ListDefinition::new(self.id, levels))
    }
}

impl PageDescription {
    fn into_properties(self) -> SectionProperties {
        let mut props = match self.size {
            PageSize::Letter => SectionProperties::letter(),
            PageSize::A4 => SectionProperties::a4(),
            PageSize::Legal => SectionProperties::legal(),
        };
        if let Some(margins) = self.margins {
            props = props.margins(margins.top, margins.bottom, margins.left, margins.right);
        }
        if self.orientation == PageOrientation::Landscape {
            props = props.landscape();
        }
        props
    }
}

impl RunFormatDescription {
    fn into_format(self) -> RunFormat {
        RunFormat {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            font: self.font,
            size: self.size,
            color: self.color,
        }
    }
}

impl RunDescription {
    fn into_run(self) -> Run {
        match self {
            RunDescription::Text(text) => Run::new(text),
            RunDescription::Formatted { text, format } => Run::with_format(text, format.into_format()),
        }
    }
}

impl BorderDescription {
    fn into_line(self) -> BorderLine {
        BorderLine::new(self.style, self.color, self.size).space(self.space)
    }
}

impl ParagraphDescription {
    fn into_builder(self) -> ParagraphBuilder {
        let mut builder = ParagraphBuilder::new()
            .role(self.style)
            .alignment(self.alignment);
        if let Some(spacing) = self.spacing {
            if let Some(before) = spacing.before {
                builder = builder.spacing_before(before);
            }
            if let Some(after) = spacing.after {
                builder = builder.spacing_after(after);
            }
        }
        if let Some(border) = self.border {
            builder = builder.border(ParagraphBorder::all(border.into_line()));
        }
        if let Some(fill) = self.shading {
            builder = builder.shading(fill);
        }
        if let Some(list) = self.list {
            builder = builder.list(list.id, list.level);
        }
        if let Some(text) = self.text {
            builder = builder.text(text);
        }
        self.runs
            .into_iter()
            .fold(builder, |builder, run| builder.run(run.into_run()))
    }
}

impl CellDescription {
    fn into_builder(self) -> CellBuilder {
        match self {
            CellDescription::Text(text) => CellBuilder::with_text(text),
            CellDescription::Full(cell) => cell.into_builder(),
        }
    }
}

impl CellContent {
    fn into_builder(self) -> CellBuilder {
        let mut builder = CellBuilder::new().span(self.span);
        if let Some(text) = self.text {
            let mut run = Run::new(text);
            if let Some(bold) = self.bold {
                run = run.bold(bold);
            }
            builder = builder.paragraph(ParagraphBuilder::new().run(run));
        }
        for paragraph in self.paragraphs {
            builder = builder.paragraph(paragraph.into_builder());
        }
        if let Some(fill) = self.shading {
            builder = builder.shading(fill);
        }
        if let Some(align) = self.vertical_align {
            builder = builder.vertical_align(align);
        }
        builder
    }
}

impl TableDescription {
    fn into_builder(self) -> TableBuilder {
        let mut builder = match self.columns {
            Some(columns) => TableBuilder::with_columns(columns),
            None => TableBuilder::new(),
        }
        .width(self.width);
        if let Some(border) = self.borders {
            builder = builder.borders(border.into_line());
        }
        if self.borderless {
            builder = builder.no_borders();
        }
        for row in self.rows {
            let row = row
                .into_iter()
                .fold(RowBuilder::new(), |row, cell| row.cell(cell.into_builder()));
            builder = builder.row(row);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::document::Block;
    use crate::ooxml::docx::format::{Alignment, TableWidth, VerticalAlignment};
    use crate::ooxml::docx::styles::StyleRole;

    fn document(yaml: &str) -> Result<Document> {
        Description::from_yaml_str(yaml)?.into_document()
    }

    #[test]
    fn test_paragraphs_and_runs() {
        let doc = document(
            r#"
sections:
  - blocks:
      - type: paragraph
        style: heading1
        alignment: center
        spacing: { before: 240, after: 120 }
        runs:
          - { text: "Title", font: Arial, size: 32 }
      - type: paragraph
        text: "Plain "
        runs:
          - "more "
          - { text: "bold", bold: true, underline: single }
"#,
        )
        .unwrap();

        let blocks = doc.sections()[0].blocks();
        let Block::Paragraph(heading) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(heading.role(), StyleRole::Heading1);
        assert_eq!(heading.alignment(), Alignment::Center);
        assert_eq!(heading.spacing(), (Some(240), Some(120)));
        assert_eq!(heading.runs()[0].format().font.as_deref(), Some("Arial"));

        let Block::Paragraph(body) = &blocks[1] else {
            panic!("expected a paragraph");
        };
        assert_eq!(body.text(), "Plain more bold");
        assert_eq!(body.runs()[2].format().bold, Some(true));
    }

    #[test]
    fn test_tables() {
        let doc = document(
            r#"
sections:
  - blocks:
      - type: table
        width: { percent: 100 }
        rows:
          - - { text: Feature, bold: true, shading: D3D3D3, vertical_align: center }
            - { text: Description, bold: true, shading: D3D3D3 }
          - [Search, Full-text search]
          - [{ text: Merged, span: 2 }]
"#,
        )
        .unwrap();

        let Block::Table(table) = &doc.sections()[0].blocks()[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.columns(), 2);
        assert_eq!(table.width(), TableWidth::Percent(100));
        assert_eq!(table.rows().len(), 3);
        let header = &table.rows()[0].cells()[0];
        assert_eq!(header.shading(), Some("D3D3D3"));
        assert_eq!(header.vertical_align(), Some(VerticalAlignment::Center));
        assert_eq!(header.paragraphs()[0].runs()[0].format().bold, Some(true));
        assert_eq!(table.rows()[2].cells()[0].span(), 2);
    }

    #[test]
    fn test_error_paths() {
        let err = document(
            r#"
sections:
  - blocks:
      - type: paragraph
        text: fine
  - blocks:
      - type: paragraph
        text: fine
      - type: paragraph
        list: { id: bullet1 }
        text: missing list
"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "sections[1].blocks[1]: undefined list 'bullet1'");

        let err = document(
            r#"
lists:
  - { id: steps, format: decimal }
  - { id: steps, format: bullet }
sections:
  - blocks: []
"#,
        )
        .unwrap_err();
        assert!(matches!(err, OoxmlError::Description { ref path, source: ValidationError::DuplicateList { .. } } if path == "lists[1]"));

        let err = document("sections: []").unwrap_err();
        assert!(matches!(err, OoxmlError::Description { source: ValidationError::NoSections, .. }));
    }

    #[test]
    fn test_list_level_count_located() {
        let err = document(
            r#"
lists:
  - { id: bullet1, format: bullet }
  - { id: deep, format: decimal, levels: 6000000 }
sections:
  - blocks:
      - type: paragraph
        list: { id: deep, level: 11 }
        text: too deep
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::Description {
                ref path,
                source: ValidationError::TooManyLevels { levels: 6_000_000, .. },
            } if path == "lists[1]"
        ));
    }

    #[test]
    fn test_negative_spacing_located() {
        let err = document(
            r#"
sections:
  - blocks:
      - type: paragraph
        spacing: { before: -1 }
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::Description {
                source: ValidationError::NegativeSpacing { field: "before", value: -1 },
                ..
            }
        ));
    }

    #[test]
    fn test_spacing_sides_are_independent() {
        let doc = document(
            r#"
sections:
  - blocks:
      - type: paragraph
        style: heading1
        spacing: { after: 100 }
        text: Title
      - type: paragraph
        style: heading2
        spacing: { before: 0, after: 0 }
        text: Flush
"#,
        )
        .unwrap();

        let blocks = doc.sections()[0].blocks();
        let Block::Paragraph(title) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(title.spacing(), (None, Some(100)));
        let Block::Paragraph(flush) = &blocks[1] else {
            panic!("expected a paragraph");
        };
        assert_eq!(flush.spacing(), (Some(0), Some(0)));
    }

    #[test]
    fn test_styles_lists_and_pages() {
        let doc = document(
            r#"
properties:
  title: Guide
  created: "2024-03-01T09:30:00Z"
styles:
  heading1: { font: Arial, bold: true, size: 32, spacing_after: 240 }
lists:
  - { id: bullet1, format: bullet }
  - { id: short, format: decimal, levels: 2 }
sections:
  - page: { size: a4, orientation: landscape, margins: { top: 0.5, bottom: 0.5, left: 0.75, right: 0.75 } }
    blocks:
      - type: paragraph
        list: { id: short, level: 1 }
        text: nested
"#,
        )
        .unwrap();

        assert_eq!(doc.properties().title.as_deref(), Some("Guide"));
        assert!(doc.properties().created.is_some());
        let heading = doc.styles().role(StyleRole::Heading1);
        assert_eq!(heading.run.font.as_deref(), Some("Arial"));
        assert_eq!(heading.spacing_after, 240);
        assert_eq!(heading.spacing_before, 240);
        assert_eq!(doc.numbering().get("short").unwrap().levels().len(), 2);

        let props = doc.sections()[0].properties();
        assert_eq!(props.orientation, PageOrientation::Landscape);
        assert_eq!((props.page_width, props.page_height), (16838, 11906));
        assert_eq!(props.margin_left, 1080);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Description::from_yaml_str("sections: [ {").unwrap_err();
        assert!(matches!(err, OoxmlError::Yaml(_)));
    }
}
