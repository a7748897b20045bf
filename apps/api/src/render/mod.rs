// Template Renderer: ResumeRecord + template id → ResumeDocument.
// Every variant runs through the same builder; variants only differ in the
// LayoutSpec they hand it. Pure and deterministic.

pub mod document;
pub mod export;
pub mod format;
pub mod handlers;
pub mod templates;

use serde::Deserialize;

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ReferenceEntry, ResumeRecord, SkillCategory,
};
use document::{Block, DocumentHeader, Entry, ResumeDocument, Section, SectionKind, SkillGroup};
use format::{
    format_date_range, format_single_date, non_empty, profession_headline, profession_prompt,
    split_bullets, split_technologies,
};
use templates::{
    EducationStyle, HeadlineStyle, LayoutSpec, ProjectStyle, ReferenceTruncation, SkillStyle,
    TemplateId,
};

/// References shown by condensed (sidebar/executive) layouts.
pub const DEFAULT_CONDENSED_REFERENCE_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub condensed_reference_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            condensed_reference_limit: DEFAULT_CONDENSED_REFERENCE_LIMIT,
        }
    }
}

/// Renders `record` with the layout named by `template_id`.
/// Unknown ids render the classic layout.
pub fn render(
    record: &ResumeRecord,
    template_id: &str,
    options: &RenderOptions,
) -> ResumeDocument {
    render_template(record, TemplateId::resolve(template_id), options)
}

fn render_template(
    record: &ResumeRecord,
    template: TemplateId,
    options: &RenderOptions,
) -> ResumeDocument {
    let layout = template.layout();
    let builder = SectionBuilder { layout, options };

    let sections = layout
        .sections
        .iter()
        .filter_map(|spec| {
            let blocks = builder.blocks(spec.kind, record);
            if blocks.is_empty() {
                return None;
            }
            Some(Section {
                kind: spec.kind,
                region: spec.region,
                heading: spec.heading.map(str::to_string),
                blocks,
            })
        })
        .collect();

    ResumeDocument {
        template,
        columns: layout.columns,
        header: build_header(layout, record),
        sections,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

fn build_header(layout: &LayoutSpec, record: &ResumeRecord) -> DocumentHeader {
    let info = &record.personal_info;

    let headline = if record.profession.is_empty() {
        None
    } else {
        match layout.headline {
            HeadlineStyle::None => None,
            HeadlineStyle::Upper => Some(profession_headline(&record.profession)),
            HeadlineStyle::Prompt => Some(profession_prompt(&record.profession)),
        }
    };

    // Layouts with a dedicated contact section keep it out of the header.
    let has_contact_section = layout
        .sections
        .iter()
        .any(|s| s.kind == SectionKind::Contact);
    let contact = if has_contact_section {
        vec![]
    } else {
        contact_lines(info)
    };

    let links = if layout.contact.include_links {
        [&info.linkedin, &info.website]
            .into_iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect()
    } else {
        vec![]
    };

    DocumentHeader {
        full_name: info.full_name.clone(),
        headline,
        contact,
        links,
        contact_separator: layout.contact.separator.map(str::to_string),
        contact_prefix: layout.contact.prefix.map(str::to_string),
    }
}

fn contact_lines(info: &PersonalInfo) -> Vec<String> {
    [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

struct SectionBuilder<'a> {
    layout: &'a LayoutSpec,
    options: &'a RenderOptions,
}

impl SectionBuilder<'_> {
    /// Blocks for one section; empty means the section is omitted.
    fn blocks(&self, kind: SectionKind, record: &ResumeRecord) -> Vec<Block> {
        match kind {
            SectionKind::Contact => {
                let lines = contact_lines(&record.personal_info);
                if lines.is_empty() {
                    vec![]
                } else {
                    vec![Block::Lines { lines }]
                }
            }
            SectionKind::Summary => self.summary(&record.personal_info.summary),
            SectionKind::Experience => record
                .experience
                .iter()
                .map(|e| Block::Entry(self.experience(e)))
                .collect(),
            SectionKind::Education => record
                .education
                .iter()
                .map(|e| Block::Entry(self.education(e)))
                .collect(),
            SectionKind::Skills => record
                .skills
                .iter()
                .filter(|s| !s.items.is_empty())
                .map(|s| Block::SkillGroup(self.skill_group(s)))
                .collect(),
            SectionKind::Projects => record
                .projects
                .iter()
                .map(|p| Block::Entry(self.project(p)))
                .collect(),
            SectionKind::Certifications => record
                .certifications
                .iter()
                .map(|c| Block::Entry(self.certification(c)))
                .collect(),
            SectionKind::References => {
                let limit = match self.layout.references.truncation {
                    ReferenceTruncation::All => record.references.len(),
                    ReferenceTruncation::Condensed => self.options.condensed_reference_limit,
                };
                record
                    .references
                    .iter()
                    .take(limit)
                    .map(|r| Block::Entry(self.reference(r)))
                    .collect()
            }
        }
    }

    fn summary(&self, summary: &str) -> Vec<Block> {
        if summary.is_empty() {
            return vec![];
        }
        let text = if self.layout.quote_summary {
            format!("\"{summary}\"")
        } else {
            summary.to_string()
        };
        vec![Block::Paragraph { text }]
    }

    fn experience(&self, entry: &ExperienceEntry) -> Entry {
        Entry {
            title: entry.position.clone(),
            subtitle: non_empty(entry.company.clone()),
            date: format_date_range(&entry.start_date, &entry.end_date, entry.current),
            bullets: split_bullets(&entry.description),
            bullet_marker: self.layout.bullet_marker.map(str::to_string),
            ..Default::default()
        }
    }

    fn education(&self, entry: &EducationEntry) -> Entry {
        let subtitle = non_empty(entry.institution.clone());
        match self.layout.education {
            EducationStyle::Full => Entry {
                title: degree_in_field(entry),
                subtitle,
                date: format_date_range(&entry.start_date, &entry.end_date, false),
                details: entry
                    .gpa
                    .iter()
                    .filter(|gpa| !gpa.is_empty())
                    .map(|gpa| format!("GPA: {gpa}"))
                    .collect(),
                ..Default::default()
            },
            EducationStyle::DegreeInField => Entry {
                title: degree_in_field(entry),
                subtitle,
                date: format_single_date(&entry.end_date),
                ..Default::default()
            },
            EducationStyle::DegreeThenField => Entry {
                title: entry.degree.clone(),
                subtitle,
                date: format_single_date(&entry.end_date),
                details: non_empty(entry.field.clone()).into_iter().collect(),
                ..Default::default()
            },
            EducationStyle::Brief => Entry {
                title: entry.degree.clone(),
                subtitle,
                date: format_single_date(&entry.end_date),
                ..Default::default()
            },
        }
    }

    fn skill_group(&self, skills: &SkillCategory) -> SkillGroup {
        SkillGroup {
            category: skills.category.clone(),
            items: skills.items.clone(),
            separator: match self.layout.skills {
                SkillStyle::Joined(sep) => Some(sep.to_string()),
                SkillStyle::Itemized => None,
            },
        }
    }

    fn project(&self, project: &ProjectEntry) -> Entry {
        let mut entry = Entry {
            title: project.name.clone(),
            summary: non_empty(project.description.clone()),
            link: self.link(&project.url),
            ..Default::default()
        };
        if !project.technologies.is_empty() {
            match self.layout.projects {
                ProjectStyle::TechnologiesLine => {
                    entry.details = vec![format!("Technologies: {}", project.technologies)];
                }
                ProjectStyle::RawTechnologies => {
                    entry.details = vec![project.technologies.clone()];
                }
                ProjectStyle::TechnologyTags => {
                    entry.tags = split_technologies(&project.technologies);
                }
            }
        }
        entry
    }

    fn certification(&self, cert: &CertificationEntry) -> Entry {
        Entry {
            title: cert.name.clone(),
            subtitle: non_empty(cert.issuer.clone()),
            date: format_single_date(&cert.date),
            link: self.link(&cert.url),
            ..Default::default()
        }
    }

    fn reference(&self, reference: &ReferenceEntry) -> Entry {
        let style = self.layout.references;
        let mut details = vec![];
        if style.show_company {
            details.push(reference.company.clone());
        }
        details.push(reference.email.clone());
        if style.show_phone {
            details.push(reference.phone.clone());
        }
        details.retain(|d| !d.is_empty());

        Entry {
            title: reference.name.clone(),
            subtitle: non_empty(reference.position.clone()),
            details,
            ..Default::default()
        }
    }

    fn link(&self, url: &Option<String>) -> Option<String> {
        if !self.layout.show_links {
            return None;
        }
        url.clone().and_then(non_empty)
    }
}

fn degree_in_field(entry: &EducationEntry) -> String {
    match (entry.degree.is_empty(), entry.field.is_empty()) {
        (false, false) => format!("{} in {}", entry.degree, entry.field),
        (false, true) => entry.degree.clone(),
        (true, _) => entry.field.clone(),
    }
}
