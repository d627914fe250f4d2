//! Session phases, turns and the transcript.

use serde::{Deserialize, Serialize};

use crate::llm::{Content, ContentRole};

/// The phases of a questionnaire session.
///
/// Progresses linearly: Intro → Interviewing → GeneratingReport →
/// ReportReady. Any phase may reset to Intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Intro,
    Interviewing,
    GeneratingReport,
    ReportReady,
}

impl SessionPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SessionPhase) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (Intro, Interviewing)
                | (Interviewing, GeneratingReport)
                | (GeneratingReport, ReportReady)
                | (_, Intro)
        )
    }

    /// Whether a user reply may be submitted in this phase.
    pub fn accepts_replies(&self) -> bool {
        matches!(self, Self::Interviewing)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Interviewing => "interviewing",
            Self::GeneratingReport => "generating_report",
            Self::ReportReady => "report_ready",
        };
        write!(f, "{s}")
    }
}

/// Who said a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Label used in the report conversation log.
    pub fn log_label(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Assistant => "BOT",
        }
    }

    pub fn content_role(&self) -> ContentRole {
        match self {
            Self::User => ContentRole::User,
            Self::Assistant => ContentRole::Model,
        }
    }
}

/// One utterance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `"<LABEL>: <text>"`
    pub fn log_line(&self) -> String {
        format!("{}: {}", self.speaker.log_label(), self.text)
    }

    fn to_content(&self) -> Content {
        Content::text(Some(self.speaker.content_role()), self.text.clone())
    }
}

/// Ordered, append-only conversation history.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    seeded: bool,
}

impl Transcript {
    /// Start a transcript with the synthetic opening question.
    pub fn seeded(question: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::assistant(question)],
            seeded: true,
        }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
        self.seeded = false;
    }

    /// Turns as `generateContent` contents, optionally dropping the seed.
    pub fn to_contents(&self, include_seed: bool) -> Vec<Content> {
        let skip = usize::from(self.seeded && !include_seed);
        self.turns.iter().skip(skip).map(Turn::to_content).collect()
    }

    /// Every turn as a log line, newline-joined.
    pub fn render_log(&self) -> String {
        self.turns
            .iter()
            .map(Turn::log_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
