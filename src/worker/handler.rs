//! Worker thread implementation for analysis requests.
//!
//! This module implements the Zellij worker thread interface, running the
//! analysis backend so the main plugin rendering loop never blocks on it.
//! The backend is initialized lazily on first message receipt.

use crate::analysis::{Analyzer, MockAnalyzer};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling analysis requests.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The analyzer backend is
/// behind the [`Analyzer`] trait so the mock can be replaced by a real
/// service client without touching the protocol.
#[derive(Serialize, Deserialize, Default)]
pub struct TruthLensWorker {
    /// Analysis backend, initialized lazily on first use.
    #[serde(skip)]
    analyzer: Option<Box<dyn Analyzer>>,
}

impl TruthLensWorker {
    /// Creates a worker with the given analysis backend.
    #[must_use]
    pub fn with_analyzer(analyzer: Box<dyn Analyzer>) -> Self {
        Self {
            analyzer: Some(analyzer),
        }
    }

    /// Returns the analyzer, installing the default mock backend on first use.
    fn analyzer(&mut self) -> &dyn Analyzer {
        &**self.analyzer.get_or_insert_with(|| Box::new(MockAnalyzer))
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// The response always carries the request id from the message, so the
    /// plugin can match it against its pending submission.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::Analyze {
                request_id,
                request,
            } => {
                tracing::debug!(
                    request_id = request_id,
                    request_kind = request.kind(),
                    "running analysis"
                );

                match self.analyzer().analyze(&request) {
                    Ok(result) => {
                        tracing::debug!(
                            request_id = request_id,
                            truth_score = result.truth_score,
                            "analysis complete"
                        );
                        WorkerResponse::AnalysisComplete { request_id, result }
                    }
                    Err(e) => {
                        tracing::debug!(request_id = request_id, error = %e, "analysis failed");
                        WorkerResponse::AnalysisFailed {
                            request_id,
                            message: e.to_string(),
                        }
                    }
                }
            }
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for TruthLensWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Result;
    use crate::domain::{AnalysisRequest, AnalysisResult, TruthLensError};

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult> {
            Err(TruthLensError::AnalysisService(
                "connection refused".to_string(),
            ))
        }
    }

    #[test]
    fn analyze_message_round_trips_the_request_id() {
        let mut worker = TruthLensWorker::default();
        let response = worker.handle_message(WorkerMessage::analyze(
            7,
            AnalysisRequest::Text("Breaking: ...".to_string()),
        ));

        match response {
            WorkerResponse::AnalysisComplete { request_id, result } => {
                assert_eq!(request_id, 7);
                assert_eq!(result.truth_score, 25);
            }
            WorkerResponse::AnalysisFailed { .. } => panic!("mock analysis should not fail"),
        }
    }

    #[test]
    fn backend_failure_becomes_a_failed_response() {
        let mut worker = TruthLensWorker::with_analyzer(Box::new(FailingAnalyzer));
        let response = worker.handle_message(WorkerMessage::analyze(
            3,
            AnalysisRequest::Url("https://example.com".to_string()),
        ));

        match response {
            WorkerResponse::AnalysisFailed {
                request_id,
                message,
            } => {
                assert_eq!(request_id, 3);
                assert!(message.contains("connection refused"));
            }
            WorkerResponse::AnalysisComplete { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn message_payloads_survive_json_round_trip() {
        let message = WorkerMessage::analyze(1, AnalysisRequest::Image(vec![0xff, 0xd8, 0xff]));
        let payload = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }
}
