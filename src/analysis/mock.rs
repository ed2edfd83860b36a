//! Mock analysis backend.
//!
//! Returns a canned verdict for every request. This is the stand-in for the
//! real analysis service while the plugin's UI and state machine are
//! developed; the payload exercises every card on the result screen
//! (manipulation finding, two fallacies, two contradicting sources).

use crate::analysis::Analyzer;
use crate::domain::error::Result;
use crate::domain::{AnalysisRequest, AnalysisResult, LogicalFallacy, Source, VisualAnalysis};

/// Analyzer that answers every request with the same fixed verdict.
#[derive(Debug, Default)]
pub struct MockAnalyzer;

impl Analyzer for MockAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        tracing::debug!(request_kind = request.kind(), "mock analysis requested");

        Ok(AnalysisResult {
            truth_score: 25,
            verdict_category: "Propaganda".to_string(),
            summary: "This content uses emotionally charged language to promote a political \
                      agenda without factual backing."
                .to_string(),
            visual_analysis: VisualAnalysis {
                is_manipulated: true,
                description: "Mismatched font sizes in the headline suggest digital editing."
                    .to_string(),
            },
            logical_fallacies: vec![
                LogicalFallacy {
                    kind: "Ad Hominem".to_string(),
                    quoted_text: "Only a traitor would support this law.".to_string(),
                    explanation: "Attacks the person rather than the argument.".to_string(),
                },
                LogicalFallacy {
                    kind: "Slippery Slope".to_string(),
                    quoted_text: "If we pass this, society will collapse.".to_string(),
                    explanation: "Assumes extreme consequences without evidence.".to_string(),
                },
            ],
            sources: vec![
                Source {
                    name: "FactCheck.org".to_string(),
                    url: "https://factcheck.org".to_string(),
                    is_supporting: false,
                },
                Source {
                    name: "Reuters".to_string(),
                    url: "https://reuters.com".to_string(),
                    is_supporting: false,
                },
            ],
            analyzed_at: chrono::Utc::now().timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScoreTier;

    #[test]
    fn mock_verdict_exercises_every_card() {
        let result = MockAnalyzer
            .analyze(&AnalysisRequest::Text("Breaking: ...".to_string()))
            .unwrap();

        assert_eq!(result.truth_score, 25);
        assert_eq!(result.verdict_category, "Propaganda");
        assert_eq!(result.tier(), ScoreTier::Low);
        assert!(result.visual_analysis.is_manipulated);
        assert_eq!(result.logical_fallacies.len(), 2);
        assert_eq!(result.logical_fallacies[0].kind, "Ad Hominem");
        assert_eq!(result.logical_fallacies[1].kind, "Slippery Slope");
        assert_eq!(result.sources.len(), 2);
        assert!(result.sources.iter().all(|s| !s.is_supporting));
    }

    #[test]
    fn mock_answers_every_request_kind() {
        for request in [
            AnalysisRequest::Url("https://example.com/news".to_string()),
            AnalysisRequest::Text("body".to_string()),
            AnalysisRequest::Image(vec![0xff, 0xd8, 0xff]),
        ] {
            assert!(MockAnalyzer.analyze(&request).is_ok());
        }
    }
}
