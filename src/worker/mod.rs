//! Background worker thread for the analysis service call.
//!
//! This module implements the worker thread that runs analysis requests off
//! the main plugin UI thread. It uses Zellij's worker API for cross-thread
//! communication: the plugin posts an [`WorkerMessage::Analyze`] message and
//! later receives a [`WorkerResponse`] as a custom message event, so the UI
//! stays responsive for the duration of the call.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types tagged with request ids
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::TruthLensWorker;
pub use messages::{WorkerMessage, WorkerResponse};
