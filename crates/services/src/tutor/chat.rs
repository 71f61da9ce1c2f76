use chrono::{DateTime, Utc};

use study_core::{Clock, GenerationCounter, GenerationTicket, SessionStore};

use crate::error::ServiceError;
use crate::fallback::TUTOR_APOLOGY;
use crate::outcome::LoadOutcome;

pub const GREETING: &str = "Hello! I'm your AI tutor. Ask me anything about your studies and I'll help explain concepts, solve problems, or clarify doubts. What would you like to learn today?";

/// Tutor replies longer than this offer save / quiz / flashcard actions.
pub const ACTION_THRESHOLD_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Tutor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn offers_actions(&self) -> bool {
        self.role == ChatRole::Tutor && self.content.chars().count() > ACTION_THRESHOLD_CHARS
    }
}

/// Conversation shown on the tutor screen.
///
/// At most one question is in flight. Answers are saved to the notebook as they arrive.
#[derive(Debug)]
pub struct TutorChat {
    clock: Clock,
    messages: Vec<ChatMessage>,
    next_id: u64,
    requests: GenerationCounter,
    pending: Option<GenerationTicket>,
}

impl TutorChat {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        let mut chat = Self {
            clock,
            messages: Vec::new(),
            next_id: 1,
            requests: GenerationCounter::new(),
            pending: None,
        };
        chat.push(ChatRole::Tutor, GREETING.to_string());
        chat
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends the user's question and returns what to send.
    ///
    /// Blank input, or a question while another is pending, returns `None`.
    pub fn submit_question(&mut self, question: &str) -> Option<(String, GenerationTicket)> {
        let question = question.trim();
        if question.is_empty() || self.pending.is_some() {
            return None;
        }
        self.push(ChatRole::User, question.to_string());
        let ticket = self.requests.issue();
        self.pending = Some(ticket);
        Some((question.to_string(), ticket))
    }

    /// Appends the tutor's reply, or the apology when the call failed.
    /// A successful answer is saved to the notebook.
    pub fn receive(
        &mut self,
        ticket: GenerationTicket,
        result: Result<String, ServiceError>,
        store: &mut SessionStore,
    ) -> LoadOutcome {
        if self.pending != Some(ticket) || !self.requests.is_current(ticket) {
            return LoadOutcome::Ignored;
        }
        self.pending = None;

        match result {
            Ok(answer) => {
                let saved = store.add_to_saved_content(answer.clone());
                tracing::debug!(saved, "tutor answer received");
                self.push(ChatRole::Tutor, answer);
                LoadOutcome::Loaded { count: 1 }
            }
            Err(err) => {
                tracing::warn!(error = %err, "tutor request failed");
                self.push(ChatRole::Tutor, TUTOR_APOLOGY.to_string());
                LoadOutcome::FellBack
            }
        }
    }

    /// Back to just the greeting. A reply still in flight is dropped.
    pub fn clear(&mut self) {
        self.requests.invalidate();
        self.pending = None;
        self.messages.clear();
        self.next_id = 1;
        self.push(ChatRole::Tutor, GREETING.to_string());
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            sent_at: self.clock.now(),
        });
        self.next_id += 1;
    }
}
