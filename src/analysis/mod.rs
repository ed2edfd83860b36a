//! Analysis service abstraction.
//!
//! This module defines the [`Analyzer`] trait that abstracts over analysis
//! backends. The plugin core only ever talks to this trait, so the mock
//! backend used today can be swapped for a real remote service without
//! touching the event handler or the worker protocol.
//!
//! # Design Philosophy
//!
//! The trait is deliberately a single method mirroring the one external
//! collaborator this plugin has. It runs on the worker thread, never on the
//! UI thread.

pub mod mock;

pub use mock::MockAnalyzer;

use crate::domain::error::Result;
use crate::domain::{AnalysisRequest, AnalysisResult};

/// Abstraction over analysis backends.
///
/// # Implementations
///
/// - [`MockAnalyzer`]: returns a fixed result without any network call
///   (default)
pub trait Analyzer: Send {
    /// Analyzes one request and returns the verdict.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::TruthLensError::AnalysisService`] when the
    /// backend cannot produce a result.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}
