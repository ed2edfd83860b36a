//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that runs analysis calls.
//!
//! Every message carries the `request_id` the plugin allocated for the
//! submission. The id travels out with the request and back with the
//! response, which is how the plugin discards responses for requests it has
//! since cancelled: only the response matching the currently pending id is
//! applied.

use crate::domain::{AnalysisRequest, AnalysisResult};
use serde::{Deserialize, Serialize};

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Run one analysis request.
    Analyze {
        /// Id allocated by the plugin for this submission.
        request_id: u64,

        /// The draft payload to analyze.
        request: AnalysisRequest,
    },
}

impl WorkerMessage {
    /// Creates an `Analyze` message.
    #[must_use]
    pub const fn analyze(request_id: u64, request: AnalysisRequest) -> Self {
        Self::Analyze {
            request_id,
            request,
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The analysis completed successfully.
    AnalysisComplete {
        /// Id of the submission this result answers.
        request_id: u64,

        /// The verdict to store and present.
        result: AnalysisResult,
    },

    /// The analysis failed.
    AnalysisFailed {
        /// Id of the submission that failed.
        request_id: u64,

        /// Human-readable error message.
        message: String,
    },
}
