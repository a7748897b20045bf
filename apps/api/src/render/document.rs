//! Rendered document tree: the structured output of every template variant.
//!
//! Exporters and previews consume this tree as-is; it carries content, order,
//! and decoration hints, never pixel layout.

use serde::Serialize;

use crate::render::templates::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    Single,
    MainWithSidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    References,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Contact => "contact",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::References => "references",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeDocument {
    pub template: TemplateId,
    pub columns: ColumnLayout,
    pub header: DocumentHeader,
    /// Sections in reading order; sidebar sections carry `Region::Sidebar`.
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn sections_in(&self, region: Region) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.region == region)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHeader {
    pub full_name: String,
    pub headline: Option<String>,
    pub contact: Vec<String>,
    pub links: Vec<String>,
    /// Drawn between contact items, e.g. "•".
    pub contact_separator: Option<String>,
    /// Drawn before each contact item, e.g. ">".
    pub contact_prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub region: Region,
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Lines { lines: Vec<String> },
    Entry(Entry),
    SkillGroup(SkillGroup),
}

/// One experience/education/project/certification/reference item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub details: Vec<String>,
    pub bullets: Vec<String>,
    pub bullet_marker: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
    /// `Some(sep)`: items render inline joined by `sep`; `None`: one item per line.
    pub separator: Option<String>,
}
