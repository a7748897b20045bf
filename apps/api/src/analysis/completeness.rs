use serde::{Deserialize, Serialize};

use crate::models::ResumeRecord;

/// Minimum summary length; the check passes only when strictly longer.
pub const SUMMARY_MIN_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessCheck {
    pub label: String,
    pub passed: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub checks: Vec<CompletenessCheck>,
    pub passed: usize,
    /// `passed / checks.len()`.
    pub ratio: f64,
}

struct CheckRule {
    label: &'static str,
    description: &'static str,
    predicate: fn(&ResumeRecord) -> bool,
}

const CHECK_RULES: &[CheckRule] = &[
    CheckRule {
        label: "Contact Information",
        description: "Name and email are required",
        predicate: |r| !r.personal_info.full_name.is_empty() && !r.personal_info.email.is_empty(),
    },
    CheckRule {
        label: "Professional Summary",
        description: "Summary should be 50+ characters",
        predicate: |r| r.personal_info.summary.chars().count() > SUMMARY_MIN_CHARS,
    },
    CheckRule {
        label: "Work Experience",
        description: "At least one work experience entry",
        predicate: |r| !r.experience.is_empty(),
    },
    CheckRule {
        label: "Skills Section",
        description: "Skills section with relevant keywords",
        predicate: |r| r.skills.iter().any(|s| !s.items.is_empty()),
    },
    CheckRule {
        label: "Education",
        description: "Education information included",
        predicate: |r| !r.education.is_empty(),
    },
    // Templates only emit supported layouts, so format compliance always holds.
    CheckRule {
        label: "Standard Format",
        description: "Uses ATS-compatible formatting",
        predicate: |_| true,
    },
];

/// Number of completeness checks; the denominator of the completeness ratio.
pub const CHECK_COUNT: usize = CHECK_RULES.len();

pub fn compute_completeness_report(record: &ResumeRecord) -> CompletenessReport {
    let checks: Vec<CompletenessCheck> = CHECK_RULES
        .iter()
        .map(|rule| CompletenessCheck {
            label: rule.label.to_string(),
            passed: (rule.predicate)(record),
            description: rule.description.to_string(),
        })
        .collect();

    let passed = checks.iter().filter(|c| c.passed).count();

    CompletenessReport {
        passed,
        ratio: passed as f64 / CHECK_COUNT as f64,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, SkillCategory};

    fn check<'a>(report: &'a CompletenessReport, label: &str) -> &'a CompletenessCheck {
        report
            .checks
            .iter()
            .find(|c| c.label == label)
            .expect("check present")
    }

    #[test]
    fn test_empty_record_passes_only_standard_format() {
        let report = compute_completeness_report(&ResumeRecord::default());
        assert_eq!(report.checks.len(), 6);
        assert_eq!(report.passed, 1);
        assert!(check(&report, "Standard Format").passed);
        assert!((report.ratio - 1.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_check_order_is_fixed() {
        let report = compute_completeness_report(&ResumeRecord::default());
        let labels: Vec<&str> = report.checks.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Contact Information",
                "Professional Summary",
                "Work Experience",
                "Skills Section",
                "Education",
                "Standard Format",
            ]
        );
    }

    #[test]
    fn test_contact_requires_name_and_email() {
        let mut record = ResumeRecord::default();
        record.personal_info.full_name = "Grace Hopper".to_string();
        assert!(!check(&compute_completeness_report(&record), "Contact Information").passed);

        record.personal_info.email = "grace@navy.mil".to_string();
        assert!(check(&compute_completeness_report(&record), "Contact Information").passed);
    }

    #[test]
    fn test_summary_boundary_is_strictly_greater_than_50() {
        let mut record = ResumeRecord::default();
        record.personal_info.summary = "a".repeat(50);
        assert!(!check(&compute_completeness_report(&record), "Professional Summary").passed);

        record.personal_info.summary = "a".repeat(51);
        assert!(check(&compute_completeness_report(&record), "Professional Summary").passed);
    }

    #[test]
    fn test_summary_length_counts_characters_not_bytes() {
        let mut record = ResumeRecord::default();
        // 50 two-byte characters: 100 bytes, still only 50 characters.
        record.personal_info.summary = "é".repeat(50);
        assert!(!check(&compute_completeness_report(&record), "Professional Summary").passed);
    }

    #[test]
    fn test_skills_need_at_least_one_item() {
        let mut record = ResumeRecord::default();
        record.skills.push(SkillCategory {
            id: "s1".to_string(),
            category: "Languages".to_string(),
            items: vec![],
        });
        assert!(!check(&compute_completeness_report(&record), "Skills Section").passed);

        record.skills.push(SkillCategory {
            id: "s2".to_string(),
            category: "Tools".to_string(),
            items: vec!["Git".to_string()],
        });
        assert!(check(&compute_completeness_report(&record), "Skills Section").passed);
    }

    #[test]
    fn test_full_record_passes_everything() {
        let mut record = ResumeRecord::default();
        record.personal_info.full_name = "Grace Hopper".to_string();
        record.personal_info.email = "grace@navy.mil".to_string();
        record.personal_info.summary =
            "Computer scientist and rear admiral who pioneered compiler design.".to_string();
        record.experience.push(ExperienceEntry::default());
        record.education.push(EducationEntry::default());
        record.skills.push(SkillCategory {
            id: "s".to_string(),
            category: "Languages".to_string(),
            items: vec!["COBOL".to_string()],
        });

        let report = compute_completeness_report(&record);
        assert_eq!(report.passed, 6);
        assert_eq!(report.ratio, 1.0);
    }
}
