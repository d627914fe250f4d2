//! InterviewController owns the session, drives the interview loop and
//! requests the final report.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ControllerConfig;
use crate::error::SessionError;
use crate::llm::{CompletionClient, Content, GenerateContentRequest};

use super::prompts::{
    INTERVIEW_CONNECTION_FAILED, INTERVIEW_MISSING_TEXT, REPORT_CONNECTION_FAILED,
    REPORT_MISSING_TEXT, SEED_QUESTION, SYSTEM_INSTRUCTION, contains_report_marker,
    report_prompt_for,
};
use super::state::{SessionPhase, Transcript, Turn};

/// What a submitted reply led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The next interview question (or an interview fallback).
    Reply(String),
    /// The model ended the interview; this is the finished report.
    Report(String),
    /// The session was restarted while the call was in flight; the result
    /// was dropped.
    Stale,
}

/// Read-only copy of the session for front ends.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Option<Uuid>,
    pub phase: SessionPhase,
    pub turns: Vec<Turn>,
    pub report: Option<String>,
    pub busy: bool,
}

#[derive(Debug, Default)]
struct SessionState {
    phase: SessionPhase,
    transcript: Transcript,
    report: Option<String>,
    /// Bumped on every start and restart. In-flight results carry the epoch
    /// they were issued under and are applied only if it still matches.
    epoch: u64,
    in_flight: bool,
    session_id: Option<Uuid>,
}

/// Drives one questionnaire session at a time.
///
/// State sits behind an `RwLock` that is never held across a network call,
/// so `restart` can run while a completion is pending.
pub struct InterviewController {
    client: Arc<dyn CompletionClient>,
    config: ControllerConfig,
    state: RwLock<SessionState>,
}

impl InterviewController {
    pub fn new(client: Arc<dyn CompletionClient>, config: ControllerConfig) -> Self {
        Self {
            client,
            config,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// `intro → interviewing`. Seeds the transcript and returns the opening
    /// question.
    pub async fn start(&self) -> Result<String, SessionError> {
        let mut state = self.state.write().await;
        if !state.phase.can_transition_to(SessionPhase::Interviewing) {
            return Err(SessionError::InvalidPhase {
                phase: state.phase,
                action: "start a session",
            });
        }

        let session_id = Uuid::new_v4();
        state.epoch += 1;
        state.session_id = Some(session_id);
        state.transcript = Transcript::seeded(SEED_QUESTION);
        state.report = None;
        state.in_flight = false;
        state.phase = SessionPhase::Interviewing;

        info!(%session_id, epoch = state.epoch, "Session started");
        Ok(SEED_QUESTION.to_string())
    }

    /// Submit a user reply.
    ///
    /// 1. Append the user turn and send the history with the system instruction.
    /// 2. Without the report marker, append the reply and keep interviewing.
    /// 3. With it, drop the reply, move to `generating_report`, and request
    ///    the report from the rendered transcript.
    ///
    /// Network and decoding failures become fallback text; only caller misuse
    /// is an error.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let (epoch, request) = {
            let mut state = self.state.write().await;
            if !state.phase.accepts_replies() {
                return Err(SessionError::InvalidPhase {
                    phase: state.phase,
                    action: "submit a reply",
                });
            }
            if state.in_flight {
                return Err(SessionError::Busy);
            }
            if text.trim().is_empty() {
                return Err(SessionError::EmptyInput);
            }

            state.transcript.push(Turn::user(text));
            state.in_flight = true;

            let request = GenerateContentRequest::new(
                state
                    .transcript
                    .to_contents(self.config.include_seed_in_history),
            )
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_max_output_tokens(self.config.max_output_tokens);

            debug!(
                epoch = state.epoch,
                contents = request.contents.len(),
                "Sending interview turn"
            );
            (state.epoch, request)
        };

        let reply = self
            .complete_or_fallback(&request, INTERVIEW_MISSING_TEXT, INTERVIEW_CONNECTION_FAILED)
            .await;

        let report_request = {
            let mut state = self.state.write().await;
            if state.epoch != epoch {
                debug!(epoch, current = state.epoch, "Discarding stale interview reply");
                return Ok(SubmitOutcome::Stale);
            }

            if !contains_report_marker(&reply) {
                state.transcript.push(Turn::assistant(reply.clone()));
                state.in_flight = false;
                return Ok(SubmitOutcome::Reply(reply));
            }

            state.phase = SessionPhase::GeneratingReport;
            info!(
                session_id = ?state.session_id,
                turns = state.transcript.len(),
                "Interview complete, generating report"
            );
            GenerateContentRequest::new(vec![Content::text(
                None,
                report_prompt_for(&state.transcript),
            )])
        };

        let report = self
            .complete_or_fallback(&report_request, REPORT_MISSING_TEXT, REPORT_CONNECTION_FAILED)
            .await;

        let mut state = self.state.write().await;
        if state.epoch != epoch {
            debug!(epoch, current = state.epoch, "Discarding stale report");
            return Ok(SubmitOutcome::Stale);
        }
        state.report = Some(report.clone());
        state.phase = SessionPhase::ReportReady;
        state.in_flight = false;
        info!(session_id = ?state.session_id, chars = report.len(), "Report ready");

        Ok(SubmitOutcome::Report(report))
    }

    /// Any phase `→ intro`. Drops the transcript, the report, and any pending
    /// call's eventual result.
    pub async fn restart(&self) {
        let mut state = self.state.write().await;
        let previous = state.phase;
        state.epoch += 1;
        state.transcript.clear();
        state.report = None;
        state.in_flight = false;
        state.session_id = None;
        state.phase = SessionPhase::Intro;
        info!(from = %previous, epoch = state.epoch, "Session reset");
    }

    pub async fn phase(&self) -> SessionPhase {
        self.state.read().await.phase
    }

    /// True while a completion call is outstanding (input should be disabled).
    pub async fn is_busy(&self) -> bool {
        self.state.read().await.in_flight
    }

    pub async fn report(&self) -> Option<String> {
        self.state.read().await.report.clone()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            session_id: state.session_id,
            phase: state.phase,
            turns: state.transcript.turns().to_vec(),
            report: state.report.clone(),
            busy: state.in_flight,
        }
    }

    async fn complete_or_fallback(
        &self,
        request: &GenerateContentRequest,
        missing_text: &str,
        connection_failed: &str,
    ) -> String {
        match self.client.generate(request).await {
            Ok(response) => match response.first_text() {
                Some(text) => text.to_string(),
                None => {
                    warn!(
                        endpoint = self.client.endpoint(),
                        "Completion reply had no text, using fallback"
                    );
                    missing_text.to_string()
                }
            },
            Err(e) => {
                warn!(error = %e, "Completion call failed, using fallback");
                connection_failed.to_string()
            }
        }
    }
}
