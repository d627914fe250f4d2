//! The guided lifestyle questionnaire.
//!
//! A session opens with a fixed multiple-choice question, then alternates
//! user replies and model questions until the model emits
//! `[[GENERATE_REPORT]]`. The controller then requests a one-shot report
//! built from the whole transcript and holds it until restart.

pub mod controller;
pub mod prompts;
pub mod report;
pub mod state;

pub use controller::{InterviewController, SessionSnapshot, SubmitOutcome};
pub use report::{REPORT_NOTICE, ReportLine, classify_lines};
pub use state::{SessionPhase, Speaker, Transcript, Turn};
