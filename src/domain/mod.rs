//! Domain layer for the Truth Lens plugin.
//!
//! This module contains the core domain types and business rules for the
//! plugin, independent of Zellij-specific APIs or infrastructure concerns.
//! It covers the analysis data model (requests, results, score tiers), the
//! user draft with its image attachment lifecycle, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`analysis`]: Analysis request/result model and score tiers
//! - [`draft`]: Input draft and image attachment/preview pairing

pub mod analysis;
pub mod draft;
pub mod error;

pub use analysis::{
    AnalysisRequest, AnalysisResult, LogicalFallacy, ScoreTier, Source, VisualAnalysis,
};
pub use draft::{ImageAttachment, ImageFormat, InputDraft, PreviewHandle};
pub use error::{Result, TruthLensError};
