//! Resume text extraction. Flattens a `ResumeRecord` into one lowercased string
//! used only as keyword-matcher input.

use crate::models::ResumeRecord;

/// Builds the searchable text for a record.
///
/// Fragment order: summary; per experience `position company description`;
/// per education `degree field institution`; every skill item; per project
/// `name description technologies`; per certification `name issuer`.
/// Empty fields contribute nothing; fragments are joined by single spaces.
pub fn extract_text(record: &ResumeRecord) -> String {
    let mut fragments: Vec<&str> = vec![record.personal_info.summary.as_str()];

    for exp in &record.experience {
        fragments.extend([
            exp.position.as_str(),
            exp.company.as_str(),
            exp.description.as_str(),
        ]);
    }
    for edu in &record.education {
        fragments.extend([edu.degree.as_str(), edu.field.as_str(), edu.institution.as_str()]);
    }
    for skill in &record.skills {
        fragments.extend(skill.items.iter().map(String::as_str));
    }
    for project in &record.projects {
        fragments.extend([
            project.name.as_str(),
            project.description.as_str(),
            project.technologies.as_str(),
        ]);
    }
    for cert in &record.certifications {
        fragments.extend([cert.name.as_str(), cert.issuer.as_str()]);
    }

    fragments
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, ReferenceEntry,
        SkillCategory,
    };

    #[test]
    fn test_empty_record_yields_empty_text() {
        assert_eq!(extract_text(&ResumeRecord::default()), "");
    }

    #[test]
    fn test_text_is_lowercased_and_ordered() {
        let mut record = ResumeRecord::default();
        record.personal_info.summary = "Built APIs".to_string();
        record.experience.push(ExperienceEntry {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Shipped React apps".to_string(),
            ..Default::default()
        });
        record.education.push(EducationEntry {
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            institution: "MIT".to_string(),
            ..Default::default()
        });
        record.skills.push(SkillCategory {
            id: "s".to_string(),
            category: "Tools".to_string(),
            items: vec!["Docker".to_string(), "Git".to_string()],
        });
        record.projects.push(ProjectEntry {
            name: "Site".to_string(),
            description: "Portfolio".to_string(),
            technologies: "Node.js, GraphQL".to_string(),
            ..Default::default()
        });
        record.certifications.push(CertificationEntry {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            ..Default::default()
        });

        assert_eq!(
            extract_text(&record),
            "built apis engineer acme shipped react apps bsc computer science mit \
             docker git site portfolio node.js, graphql cka cncf"
        );
    }

    #[test]
    fn test_empty_fields_leave_no_gaps() {
        let mut record = ResumeRecord::default();
        record.experience.push(ExperienceEntry {
            position: "Analyst".to_string(),
            description: "SQL reports".to_string(),
            ..Default::default()
        });
        assert_eq!(extract_text(&record), "analyst sql reports");
    }

    #[test]
    fn test_skill_categories_and_references_are_not_scanned() {
        let mut record = ResumeRecord::default();
        record.skills.push(SkillCategory {
            id: "s".to_string(),
            category: "Kubernetes".to_string(),
            items: vec![],
        });
        record.references.push(ReferenceEntry {
            name: "Docker Smith".to_string(),
            ..Default::default()
        });
        assert_eq!(extract_text(&record), "");
    }
}
