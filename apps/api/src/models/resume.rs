use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::render::templates::DEFAULT_TEMPLATE_ID;

/// The single résumé record edited by the wizard and read by the analyzer and renderer.
///
/// Field names follow the persisted camelCase JSON shape. Fields missing from a
/// stored or submitted document take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub references: Vec<ReferenceEntry>,
    pub profession: String,
    pub selected_template: String,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experience: vec![],
            education: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            references: vec![],
            profession: String::new(),
            selected_template: DEFAULT_TEMPLATE_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    /// Free text shown as the summary and scanned for keywords.
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, `end_date` is ignored and the role is open-ended.
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub id: String,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Comma-separated technology list, kept as typed.
    pub technologies: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

/// Whole-section replacement of a `ResumeRecord`.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    PersonalInfo(PersonalInfo),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<SkillCategory>),
    Projects(Vec<ProjectEntry>),
    Certifications(Vec<CertificationEntry>),
    References(Vec<ReferenceEntry>),
    Profession(String),
    SelectedTemplate(String),
}

#[derive(Debug, Error)]
pub enum SectionUpdateError {
    #[error("Unknown resume section '{0}'")]
    UnknownSection(String),

    #[error("Invalid body for section '{section}': {source}")]
    InvalidBody {
        section: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SectionUpdate {
    /// Builds an update from a section name as it appears in the record JSON
    /// (`personalInfo`, `experience`, ..., `selectedTemplate`) and its new value.
    pub fn from_json(section: &str, value: serde_json::Value) -> Result<Self, SectionUpdateError> {
        fn parse<T: serde::de::DeserializeOwned>(
            section: &str,
            value: serde_json::Value,
        ) -> Result<T, SectionUpdateError> {
            serde_json::from_value(value).map_err(|source| SectionUpdateError::InvalidBody {
                section: section.to_string(),
                source,
            })
        }

        Ok(match section {
            "personalInfo" => SectionUpdate::PersonalInfo(parse(section, value)?),
            "experience" => SectionUpdate::Experience(parse(section, value)?),
            "education" => SectionUpdate::Education(parse(section, value)?),
            "skills" => SectionUpdate::Skills(parse(section, value)?),
            "projects" => SectionUpdate::Projects(parse(section, value)?),
            "certifications" => SectionUpdate::Certifications(parse(section, value)?),
            "references" => SectionUpdate::References(parse(section, value)?),
            "profession" => SectionUpdate::Profession(parse(section, value)?),
            "selectedTemplate" => SectionUpdate::SelectedTemplate(parse(section, value)?),
            other => return Err(SectionUpdateError::UnknownSection(other.to_string())),
        })
    }
}

impl ResumeRecord {
    /// Applies a whole-section replacement. Other sections are left untouched.
    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::PersonalInfo(v) => self.personal_info = v,
            SectionUpdate::Experience(v) => self.experience = v,
            SectionUpdate::Education(v) => self.education = v,
            SectionUpdate::Skills(v) => self.skills = v,
            SectionUpdate::Projects(v) => self.projects = v,
            SectionUpdate::Certifications(v) => self.certifications = v,
            SectionUpdate::References(v) => self.references = v,
            SectionUpdate::Profession(v) => self.profession = v,
            SectionUpdate::SelectedTemplate(v) => self.selected_template = v,
        }
        self.assign_missing_ids();
    }

    /// Gives every list entry without an id a fresh one. Existing ids are kept as-is.
    pub fn assign_missing_ids(&mut self) {
        fn fill(id: &mut String) {
            if id.is_empty() {
                *id = Uuid::new_v4().to_string();
            }
        }

        self.experience.iter_mut().for_each(|e| fill(&mut e.id));
        self.education.iter_mut().for_each(|e| fill(&mut e.id));
        self.skills.iter_mut().for_each(|e| fill(&mut e.id));
        self.projects.iter_mut().for_each(|e| fill(&mut e.id));
        self.certifications.iter_mut().for_each(|e| fill(&mut e.id));
        self.references.iter_mut().for_each(|e| fill(&mut e.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_is_empty_with_classic_template() {
        let record = ResumeRecord::default();
        assert!(record.personal_info.full_name.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.profession.is_empty());
        assert_eq!(record.selected_template, "professional-classic");
    }

    #[test]
    fn test_record_uses_camel_case_field_names() {
        let mut record = ResumeRecord::default();
        record.personal_info.full_name = "Ada Lovelace".to_string();
        record.experience.push(ExperienceEntry {
            id: "1".to_string(),
            start_date: "2020-01".to_string(),
            current: true,
            ..Default::default()
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["personalInfo"]["fullName"], "Ada Lovelace");
        assert_eq!(value["experience"][0]["startDate"], "2020-01");
        assert_eq!(value["selectedTemplate"], "professional-classic");
    }

    #[test]
    fn test_optional_fields_are_omitted_when_absent() {
        let edu = EducationEntry {
            id: "e1".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&edu).unwrap();
        assert!(value.get("gpa").is_none());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record: ResumeRecord =
            serde_json::from_value(json!({ "profession": "data-scientist" })).unwrap();
        assert_eq!(record.profession, "data-scientist");
        assert!(record.skills.is_empty());
        assert_eq!(record.selected_template, "professional-classic");
    }

    #[test]
    fn test_section_update_replaces_whole_section() {
        let mut record = ResumeRecord::default();
        record.skills.push(SkillCategory {
            id: "old".to_string(),
            category: "Old".to_string(),
            items: vec!["COBOL".to_string()],
        });

        let update = SectionUpdate::from_json(
            "skills",
            json!([{ "id": "s1", "category": "Languages", "items": ["Rust"] }]),
        )
        .unwrap();
        record.apply(update);

        assert_eq!(record.skills.len(), 1);
        assert_eq!(record.skills[0].id, "s1");
        assert_eq!(record.skills[0].items, vec!["Rust"]);
    }

    #[test]
    fn test_section_update_unknown_section_is_rejected() {
        let err = SectionUpdate::from_json("hobbies", json!([])).unwrap_err();
        assert!(matches!(err, SectionUpdateError::UnknownSection(s) if s == "hobbies"));
    }

    #[test]
    fn test_section_update_wrong_shape_is_rejected() {
        let err = SectionUpdate::from_json("experience", json!("not a list")).unwrap_err();
        assert!(matches!(err, SectionUpdateError::InvalidBody { .. }));
    }

    #[test]
    fn test_missing_ids_are_assigned_and_existing_kept() {
        let mut record = ResumeRecord::default();
        record.apply(SectionUpdate::Experience(vec![
            ExperienceEntry {
                id: "keep-me".to_string(),
                ..Default::default()
            },
            ExperienceEntry::default(),
            ExperienceEntry::default(),
        ]));

        assert_eq!(record.experience[0].id, "keep-me");
        assert!(!record.experience[1].id.is_empty());
        assert!(!record.experience[2].id.is_empty());
        assert_ne!(record.experience[1].id, record.experience[2].id);
    }
}
