// ATS Analyzer: keyword coverage + structural completeness → overall score.
// Pure functions of the ResumeRecord; recomputed on every read, never persisted.

pub mod catalog;
pub mod completeness;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod scoring;

use serde::Serialize;
use tracing::debug;

use crate::models::ResumeRecord;
use completeness::{compute_completeness_report, CompletenessCheck};
use matcher::{match_keywords, MatchPolicy};
use scoring::{build_recommendation, overall_score, to_percent, ScoreBand};

/// How many missing keywords are offered as suggestions.
pub const SUGGESTED_KEYWORD_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSummary {
    pub band: ScoreBand,
    pub label: &'static str,
    pub tier: &'static str,
}

/// Derived analysis of one resume. All ratios are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub profession: String,
    pub keyword_coverage: f64,
    pub completeness: f64,
    /// `(completeness + keyword_coverage) / 2`.
    pub overall_score: f64,
    pub score_percent: u32,
    pub band: BandSummary,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub keywords_total: usize,
    pub checks: Vec<CompletenessCheck>,
    pub recommendation: String,
}

/// Keyword + completeness analyzer. Carries only the matching policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtsAnalyzer {
    policy: MatchPolicy,
}

impl AtsAnalyzer {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn analyze(&self, record: &ResumeRecord) -> AnalysisResult {
        let keywords = catalog::keywords_for(&record.profession);
        if keywords.is_empty() && !record.profession.is_empty() {
            debug!(
                "No keyword catalog for profession '{}'; keyword coverage is 0",
                record.profession
            );
        }

        let text = extractor::extract_text(record);
        let keyword_match = match_keywords(&text, keywords, self.policy);
        let keyword_coverage = keyword_match.coverage();

        let report = compute_completeness_report(record);
        let overall = overall_score(report.ratio, keyword_coverage);
        let band = ScoreBand::from_score(overall);

        let suggested_keywords = keyword_match
            .missing
            .iter()
            .take(SUGGESTED_KEYWORD_LIMIT)
            .cloned()
            .collect();

        AnalysisResult {
            profession: record.profession.clone(),
            keyword_coverage,
            completeness: report.ratio,
            overall_score: overall,
            score_percent: to_percent(overall),
            band: BandSummary {
                band,
                label: band.label(),
                tier: band.tier(),
            },
            keywords_total: keyword_match.total(),
            recommendation: build_recommendation(overall, &keyword_match.missing),
            found_keywords: keyword_match.found,
            missing_keywords: keyword_match.missing,
            suggested_keywords,
            checks: report.checks,
        }
    }
}
