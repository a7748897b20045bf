use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the `Excellent` band.
pub const EXCELLENT_THRESHOLD: f64 = 0.80;
/// Lower bound (inclusive) of the `Good` band.
pub const GOOD_THRESHOLD: f64 = 0.60;

/// Qualitative band of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            ScoreBand::Excellent
        } else if score >= GOOD_THRESHOLD {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Display tier: "good", "warning" or "critical".
    pub fn tier(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "good",
            ScoreBand::Good => "warning",
            ScoreBand::NeedsImprovement => "critical",
        }
    }
}

/// Unweighted mean of completeness and keyword coverage.
pub fn overall_score(completeness: f64, keyword_coverage: f64) -> f64 {
    (completeness + keyword_coverage) / 2.0
}

/// Rounds a ratio to a whole percentage for display.
pub fn to_percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

/// Builds a human-readable recommendation from the overall score and the
/// keywords still missing.
pub fn build_recommendation(score: f64, missing_keywords: &[String]) -> String {
    let percent = to_percent(score);
    let top_missing: Vec<&str> = missing_keywords.iter().take(3).map(String::as_str).collect();

    match ScoreBand::from_score(score) {
        ScoreBand::Excellent => {
            "Excellent. Your resume covers the structure and keywords screeners look for."
                .to_string()
        }
        ScoreBand::Good if top_missing.is_empty() => {
            format!("Good ({percent}%). Fill the remaining checklist items to reach excellent.")
        }
        ScoreBand::Good => format!(
            "Good ({percent}%). Consider adding keywords such as: {}.",
            top_missing.join(", ")
        ),
        ScoreBand::NeedsImprovement if top_missing.is_empty() => format!(
            "Needs improvement ({percent}%). Complete the failed checklist items and choose a profession to get keyword guidance."
        ),
        ScoreBand::NeedsImprovement => format!(
            "Needs improvement ({percent}%). Complete the failed checklist items and work in keywords such as: {}.",
            top_missing.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_unweighted_mean() {
        assert_eq!(overall_score(1.0, 0.0), 0.5);
        assert_eq!(overall_score(1.0 / 6.0, 0.0), 1.0 / 12.0);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(0.80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(0.79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(0.60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(0.59), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_band_labels_and_tiers() {
        assert_eq!(ScoreBand::Excellent.label(), "Excellent");
        assert_eq!(ScoreBand::Excellent.tier(), "good");
        assert_eq!(ScoreBand::Good.tier(), "warning");
        assert_eq!(ScoreBand::NeedsImprovement.label(), "Needs Improvement");
        assert_eq!(ScoreBand::NeedsImprovement.tier(), "critical");
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(to_percent(1.0 / 12.0), 8);
        assert_eq!(to_percent(0.836), 84);
        assert_eq!(to_percent(1.0), 100);
    }

    #[test]
    fn test_recommendation_excellent() {
        let rec = build_recommendation(0.9, &[]);
        assert!(rec.starts_with("Excellent"));
    }

    #[test]
    fn test_recommendation_good_lists_missing_keywords() {
        let missing = vec!["Docker".to_string(), "AWS".to_string()];
        let rec = build_recommendation(0.65, &missing);
        assert!(rec.contains("65%"));
        assert!(rec.contains("Docker, AWS"));
    }

    #[test]
    fn test_recommendation_low_without_keywords() {
        let rec = build_recommendation(1.0 / 12.0, &[]);
        assert!(rec.contains("8%"));
        assert!(rec.contains("choose a profession"));
    }
}
