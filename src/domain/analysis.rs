//! Analysis domain model: requests, results, and score tiers.
//!
//! This module defines the core types exchanged with the analysis service and
//! rendered on the result screen. An [`AnalysisRequest`] carries exactly one
//! draft payload (URL, text, or image bytes); an [`AnalysisResult`] carries
//! the verdict, the explainable findings, and the fact-check sources.
//!
//! The [`ScoreTier`] is derived from the truth score for presentation only
//! and is never stored alongside the result.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A single analysis request sent to the analysis service.
///
/// Exactly one payload variant is submitted per analysis, matching the
/// active input mode at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisRequest {
    /// Analyze the article behind a URL.
    Url(String),
    /// Analyze pasted article text.
    Text(String),
    /// Analyze a screenshot or photo of an article.
    Image(Vec<u8>),
}

impl AnalysisRequest {
    /// Returns a short label for the request kind, used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
        }
    }
}

/// Findings about digital manipulation of visual content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualAnalysis {
    /// Whether the image or embedded visuals show signs of editing.
    pub is_manipulated: bool,
    /// Human-readable description of the evidence.
    pub description: String,
}

/// A logical fallacy detected in the analyzed content.
///
/// Fallacies are presented in the order the service returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalFallacy {
    /// Fallacy name, e.g. "Ad Hominem".
    pub kind: String,
    /// The quoted passage the fallacy was found in.
    pub quoted_text: String,
    /// Why the passage is fallacious.
    pub explanation: String,
}

/// A fact-check source cross-referenced against the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Publisher name, e.g. "Reuters".
    pub name: String,
    /// Link to the source.
    pub url: String,
    /// Whether the source supports the analyzed claim.
    pub is_supporting: bool,
}

/// The outcome of one analysis.
///
/// Stored whole in application state; each completed submission fully
/// overwrites the previous result. `analyzed_at` exists for the result
/// header's relative timestamp and plays no role in the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Confidence-of-authenticity metric in `[0, 100]`.
    pub truth_score: u8,
    /// Short verdict label, e.g. "Propaganda".
    pub verdict_category: String,
    /// Executive summary of the findings.
    pub summary: String,
    /// Visual manipulation findings.
    pub visual_analysis: VisualAnalysis,
    /// Detected fallacies, in service order. May be empty.
    pub logical_fallacies: Vec<LogicalFallacy>,
    /// Cross-referenced sources, in service order. May be empty.
    pub sources: Vec<Source>,
    /// Unix timestamp of when the analysis completed.
    pub analyzed_at: i64,
}

impl AnalysisResult {
    /// Returns the presentation tier derived from the truth score.
    #[must_use]
    pub const fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.truth_score)
    }

    /// Returns a human-readable string describing how long ago the analysis ran.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.analyzed_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Presentation-only severity bucket derived from the truth score.
///
/// Drives the gauge and badge colors on the result screen. The tier is
/// recomputed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Score below 40: likely false or manipulative content.
    Low,
    /// Score 40 to 79: mixed or unverified content.
    Medium,
    /// Score 80 and above: likely authentic content.
    High,
}

impl ScoreTier {
    /// Derives the tier from a truth score.
    ///
    /// Boundaries are exact: `0..=39` is `Low`, `40..=79` is `Medium`,
    /// `80..=100` is `High`.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < 40 {
            Self::Low
        } else if score < 80 {
            Self::Medium
        } else {
            Self::High
        }
    }
}
