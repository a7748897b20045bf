//! Template catalog: the closed set of layout variants and the layout contract
//! each one follows. Variants differ only in section order, visibility, and
//! decoration; the renderer applies a contract to produce a `ResumeDocument`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::document::{ColumnLayout, Region, SectionKind};

pub const DEFAULT_TEMPLATE_ID: &str = "professional-classic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    ProfessionalClassic,
    ProfessionalExecutive,
    ProfessionalCorporate,
    ProfessionalMinimal,
    ProfessionalTraditional,
    ProfessionalAcademic,
    /// Sidebar layout: contact, skills, education and references on the left.
    ProfessionalModern,
    ModernCreative,
    ModernTech,
    ModernDesigner,
    ModernMinimalist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Professional,
    Modern,
}

/// Catalog entry shown in the template picker.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
}

impl TemplateId {
    pub const ALL: [TemplateId; 11] = [
        TemplateId::ProfessionalClassic,
        TemplateId::ProfessionalExecutive,
        TemplateId::ProfessionalCorporate,
        TemplateId::ProfessionalMinimal,
        TemplateId::ProfessionalTraditional,
        TemplateId::ProfessionalAcademic,
        TemplateId::ProfessionalModern,
        TemplateId::ModernCreative,
        TemplateId::ModernTech,
        TemplateId::ModernDesigner,
        TemplateId::ModernMinimalist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::ProfessionalClassic => "professional-classic",
            TemplateId::ProfessionalExecutive => "professional-executive",
            TemplateId::ProfessionalCorporate => "professional-corporate",
            TemplateId::ProfessionalMinimal => "professional-minimal",
            TemplateId::ProfessionalTraditional => "professional-traditional",
            TemplateId::ProfessionalAcademic => "professional-academic",
            TemplateId::ProfessionalModern => "professional-modern",
            TemplateId::ModernCreative => "modern-creative",
            TemplateId::ModernTech => "modern-tech",
            TemplateId::ModernDesigner => "modern-designer",
            TemplateId::ModernMinimalist => "modern-minimalist",
        }
    }

    /// Exact lookup; `None` for ids outside the catalog.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Lookup that never fails: unknown ids fall back to the classic layout.
    pub fn resolve(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            debug!("Unknown template '{id}', falling back to {DEFAULT_TEMPLATE_ID}");
            TemplateId::ProfessionalClassic
        })
    }

    pub fn info(&self) -> TemplateInfo {
        let (name, category, description) = match self {
            TemplateId::ProfessionalClassic => (
                "Classic Professional",
                TemplateCategory::Professional,
                "Clean, traditional layout perfect for corporate environments",
            ),
            TemplateId::ProfessionalExecutive => (
                "Executive",
                TemplateCategory::Professional,
                "Sophisticated design for senior leadership positions",
            ),
            TemplateId::ProfessionalCorporate => (
                "Corporate",
                TemplateCategory::Professional,
                "Business-focused template with emphasis on achievements",
            ),
            TemplateId::ProfessionalMinimal => (
                "Minimal Professional",
                TemplateCategory::Professional,
                "Simple, elegant design that highlights content",
            ),
            TemplateId::ProfessionalTraditional => (
                "Traditional",
                TemplateCategory::Professional,
                "Time-tested format favored by traditional industries",
            ),
            TemplateId::ProfessionalAcademic => (
                "Academic",
                TemplateCategory::Professional,
                "Education-first curriculum vitae for research and teaching roles",
            ),
            TemplateId::ProfessionalModern => (
                "Modern Sidebar",
                TemplateCategory::Professional,
                "Two-column layout with a contact and skills sidebar",
            ),
            TemplateId::ModernCreative => (
                "Creative Modern",
                TemplateCategory::Modern,
                "Innovative design for creative professionals",
            ),
            TemplateId::ModernTech => (
                "Tech Forward",
                TemplateCategory::Modern,
                "Contemporary style perfect for tech industry",
            ),
            TemplateId::ModernDesigner => (
                "Designer Portfolio",
                TemplateCategory::Modern,
                "Visual-first approach for design professionals",
            ),
            TemplateId::ModernMinimalist => (
                "Modern Minimalist",
                TemplateCategory::Modern,
                "Quiet typography with generous whitespace",
            ),
        };
        TemplateInfo {
            id: *self,
            name,
            category,
            description,
        }
    }

    pub fn layout(&self) -> &'static LayoutSpec {
        match self {
            TemplateId::ProfessionalClassic => &CLASSIC,
            TemplateId::ProfessionalExecutive => &EXECUTIVE,
            TemplateId::ProfessionalCorporate => &CORPORATE,
            TemplateId::ProfessionalMinimal => &MINIMAL,
            TemplateId::ProfessionalTraditional => &TRADITIONAL,
            TemplateId::ProfessionalAcademic => &ACADEMIC,
            TemplateId::ProfessionalModern => &SIDEBAR_MODERN,
            TemplateId::ModernCreative => &CREATIVE,
            TemplateId::ModernTech => &TECH,
            TemplateId::ModernDesigner => &DESIGNER,
            TemplateId::ModernMinimalist => &MINIMALIST,
        }
    }
}

pub fn catalog() -> Vec<TemplateInfo> {
    TemplateId::ALL.iter().map(TemplateId::info).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Layout contracts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineStyle {
    None,
    /// "SOFTWARE ENGINEER"
    Upper,
    /// "$ software_engineer"
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactStyle {
    pub include_links: bool,
    pub separator: Option<&'static str>,
    pub prefix: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStyle {
    /// "Degree in Field", institution, GPA, start–end range.
    Full,
    /// "Degree in Field", institution, end date.
    DegreeInField,
    /// Degree, field as a detail line, institution, end date.
    DegreeThenField,
    /// Degree, institution, end date.
    Brief,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillStyle {
    Joined(&'static str),
    Itemized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStyle {
    /// "Technologies: ..." detail line.
    TechnologiesLine,
    /// Technologies as typed, one detail line.
    RawTechnologies,
    /// Technologies split on commas into tags.
    TechnologyTags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTruncation {
    All,
    /// Limited to `RenderOptions::condensed_reference_limit`.
    Condensed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceStyle {
    pub truncation: ReferenceTruncation,
    pub show_company: bool,
    pub show_phone: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub kind: SectionKind,
    pub region: Region,
    pub heading: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpec {
    pub columns: ColumnLayout,
    pub headline: HeadlineStyle,
    pub contact: ContactStyle,
    pub sections: &'static [SectionSpec],
    pub bullet_marker: Option<&'static str>,
    pub quote_summary: bool,
    pub education: EducationStyle,
    pub skills: SkillStyle,
    pub projects: ProjectStyle,
    pub show_links: bool,
    pub references: ReferenceStyle,
}

const fn main(kind: SectionKind, heading: &'static str) -> SectionSpec {
    SectionSpec {
        kind,
        region: Region::Main,
        heading: Some(heading),
    }
}

const fn side(kind: SectionKind, heading: &'static str) -> SectionSpec {
    SectionSpec {
        kind,
        region: Region::Sidebar,
        heading: Some(heading),
    }
}

const PLAIN_CONTACT: ContactStyle = ContactStyle {
    include_links: false,
    separator: None,
    prefix: None,
};

const DOTTED_CONTACT: ContactStyle = ContactStyle {
    separator: Some("•"),
    ..PLAIN_CONTACT
};

const ALL_REFERENCES_FULL: ReferenceStyle = ReferenceStyle {
    truncation: ReferenceTruncation::All,
    show_company: true,
    show_phone: true,
};

const ALL_REFERENCES_NO_PHONE: ReferenceStyle = ReferenceStyle {
    show_phone: false,
    ..ALL_REFERENCES_FULL
};

const CONDENSED_REFERENCES: ReferenceStyle = ReferenceStyle {
    truncation: ReferenceTruncation::Condensed,
    show_company: true,
    show_phone: false,
};

use SectionKind::*;

static CLASSIC: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::Single,
    headline: HeadlineStyle::None,
    contact: ContactStyle {
        include_links: true,
        ..PLAIN_CONTACT
    },
    sections: &[
        main(Summary, "PROFESSIONAL SUMMARY"),
        main(Experience, "PROFESSIONAL EXPERIENCE"),
        main(Education, "EDUCATION"),
        main(Skills, "SKILLS"),
        main(Projects, "PROJECTS"),
        main(Certifications, "CERTIFICATIONS"),
        main(References, "REFERENCES"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::Full,
    skills: SkillStyle::Joined(", "),
    projects: ProjectStyle::TechnologiesLine,
    show_links: true,
    references: ALL_REFERENCES_FULL,
};

static EXECUTIVE: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::Single,
    headline: HeadlineStyle::None,
    contact: PLAIN_CONTACT,
    sections: &[
        main(Summary, "EXECUTIVE SUMMARY"),
        main(Skills, "CORE COMPETENCIES"),
        main(Experience, "PROFESSIONAL EXPERIENCE"),
        main(Education, "EDUCATION"),
        main(References, "REFERENCES"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::DegreeThenField,
    skills: SkillStyle::Itemized,
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: CONDENSED_REFERENCES,
};

static CORPORATE: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::Single,
    headline: HeadlineStyle::Upper,
    contact: PLAIN_CONTACT,
    sections: &[
        main(Summary, "EXECUTIVE SUMMARY"),
        main(Skills, "CORE COMPETENCIES"),
        main(Experience, "PROFESSIONAL EXPERIENCE"),
        main(Education, "EDUCATION"),
        main(References, "REFERENCES"),
    ],
    bullet_marker: Some("▶"),
    quote_summary: false,
    education: EducationStyle::Brief,
    skills: SkillStyle::Itemized,
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: CONDENSED_REFERENCES,
};

static MINIMAL: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::Single,
    headline: HeadlineStyle::None,
    contact: PLAIN_CONTACT,
    sections: &[
        main(Summary, "Summary"),
        main(Experience, "Experience"),
        main(Skills, "Skills"),
        main(Education, "Education"),
        main(References, "References"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::Brief,
    skills: SkillStyle::Joined(", "),
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: ALL_REFERENCES_NO_PHONE,
};

static TRADITIONAL: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::Single,
    headline: HeadlineStyle::None,
    contact: DOTTED_CONTACT,
    sections: &[
        main(Summary, "OBJECTIVE"),
        main(Experience, "PROFESSIONAL EXPERIENCE"),
        main(Education, "EDUCATION"),
        main(Skills, "SKILLS"),
        main(References, "REFERENCES"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::DegreeInField,
    skills: SkillStyle::Joined(" • "),
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: ALL_REFERENCES_FULL,
};

static ACADEMIC: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::Single,
    headline: HeadlineStyle::None,
    contact: PLAIN_CONTACT,
    sections: &[
        main(Summary, "RESEARCH INTERESTS"),
        main(Education, "EDUCATION"),
        main(Experience, "PROFESSIONAL EXPERIENCE"),
        main(Skills, "TECHNICAL COMPETENCIES"),
        main(Certifications, "CERTIFICATIONS & LICENSES"),
        main(References, "PROFESSIONAL REFERENCES"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::Full,
    skills: SkillStyle::Joined(", "),
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: ALL_REFERENCES_FULL,
};

static SIDEBAR_MODERN: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::MainWithSidebar,
    headline: HeadlineStyle::Upper,
    contact: PLAIN_CONTACT,
    sections: &[
        side(Contact, "CONTACT"),
        side(Skills, "SKILLS"),
        side(Education, "EDUCATION"),
        side(References, "REFERENCES"),
        main(Summary, "PROFESSIONAL SUMMARY"),
        main(Experience, "EXPERIENCE"),
        main(Certifications, "CERTIFICATIONS"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::Brief,
    skills: SkillStyle::Itemized,
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: CONDENSED_REFERENCES,
};

static CREATIVE: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::MainWithSidebar,
    headline: HeadlineStyle::Upper,
    contact: PLAIN_CONTACT,
    sections: &[
        main(Summary, "ABOUT ME"),
        main(Experience, "EXPERIENCE"),
        side(Skills, "SKILLS"),
        side(Education, "EDUCATION"),
        side(Projects, "PROJECTS"),
    ],
    bullet_marker: Some("•"),
    quote_summary: false,
    education: EducationStyle::Brief,
    skills: SkillStyle::Itemized,
    projects: ProjectStyle::RawTechnologies,
    show_links: false,
    references: CONDENSED_REFERENCES,
};

static TECH: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::MainWithSidebar,
    headline: HeadlineStyle::Prompt,
    contact: ContactStyle {
        prefix: Some(">"),
        ..PLAIN_CONTACT
    },
    sections: &[
        main(Summary, "// ABOUT"),
        main(Experience, "// EXPERIENCE"),
        main(Projects, "// PROJECTS"),
        side(Skills, "// STACK"),
        side(Education, "// EDUCATION"),
        side(References, "// REFS"),
    ],
    bullet_marker: Some(">"),
    quote_summary: false,
    education: EducationStyle::Brief,
    skills: SkillStyle::Itemized,
    projects: ProjectStyle::TechnologyTags,
    show_links: false,
    references: ReferenceStyle {
        show_company: false,
        ..CONDENSED_REFERENCES
    },
};

static DESIGNER: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::MainWithSidebar,
    headline: HeadlineStyle::Upper,
    contact: PLAIN_CONTACT,
    sections: &[
        main(Summary, "CREATIVE VISION"),
        main(Experience, "EXPERIENCE"),
        main(Projects, "PORTFOLIO"),
        side(Skills, "SKILLS"),
        side(Education, "EDUCATION"),
        side(References, "REFERENCES"),
    ],
    bullet_marker: Some("◆"),
    quote_summary: false,
    education: EducationStyle::Brief,
    skills: SkillStyle::Itemized,
    projects: ProjectStyle::TechnologyTags,
    show_links: false,
    references: CONDENSED_REFERENCES,
};

static MINIMALIST: LayoutSpec = LayoutSpec {
    columns: ColumnLayout::MainWithSidebar,
    headline: HeadlineStyle::None,
    contact: DOTTED_CONTACT,
    sections: &[
        SectionSpec {
            kind: Summary,
            region: Region::Main,
            heading: None,
        },
        main(Experience, "Experience"),
        main(Projects, "Selected Projects"),
        side(Skills, "Skills"),
        side(Education, "Education"),
        side(References, "References"),
    ],
    bullet_marker: None,
    quote_summary: true,
    education: EducationStyle::Brief,
    skills: SkillStyle::Joined(" • "),
    projects: ProjectStyle::TechnologiesLine,
    show_links: false,
    references: CONDENSED_REFERENCES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_round_trip_through_serde_and_as_str() {
        for id in TemplateId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            assert_eq!(TemplateId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_unknown_id_resolves_to_classic() {
        assert_eq!(TemplateId::parse("neon-vaporwave"), None);
        assert_eq!(
            TemplateId::resolve("neon-vaporwave"),
            TemplateId::ProfessionalClassic
        );
        assert_eq!(TemplateId::resolve(""), TemplateId::ProfessionalClassic);
        assert_eq!(
            TemplateId::resolve(DEFAULT_TEMPLATE_ID),
            TemplateId::ProfessionalClassic
        );
    }

    #[test]
    fn test_catalog_lists_all_eleven_templates() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 11);
        let modern = catalog
            .iter()
            .filter(|t| t.category == TemplateCategory::Modern)
            .count();
        assert_eq!(modern, 4);
    }

    #[test]
    fn test_no_layout_repeats_a_section() {
        for id in TemplateId::ALL {
            let mut seen = HashSet::new();
            for spec in id.layout().sections {
                assert!(seen.insert(spec.kind), "{} repeats {:?}", id.as_str(), spec.kind);
            }
        }
    }

    #[test]
    fn test_only_two_column_layouts_use_the_sidebar() {
        for id in TemplateId::ALL {
            let layout = id.layout();
            let uses_sidebar = layout.sections.iter().any(|s| s.region == Region::Sidebar);
            assert_eq!(
                uses_sidebar,
                layout.columns == ColumnLayout::MainWithSidebar,
                "{}",
                id.as_str()
            );
        }
    }
}
