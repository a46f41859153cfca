//! Conversation orchestration.
//!
//! Coordinates the full turn lifecycle: input validation, optimistic echo,
//! the outbound backend call, session migration, transcript mutation, and
//! pipeline syncs. Owns the busy/typing state machine: at most one request
//! is outstanding at any time, so responses can never race to append out of
//! order.

use shopchat_types::config::WidgetConfig;
use shopchat_types::error::WidgetError;
use shopchat_types::message::{Message, MessageMeta, SuggestedAction};
use shopchat_types::wire::ChatRequest;

use tracing::{debug, warn};

use crate::render::pipeline::RenderPipeline;
use crate::render::surface::RenderSurface;
use crate::session::{SessionBackend, SessionStore};
use crate::transcript::Transcript;
use crate::transport::ChatTransport;

/// Controller request state. `AwaitingResponse` gates new submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

/// What `submit` did with the input.
///
/// Rejections are silent no-ops from the user's perspective; the variants
/// exist for hosts and tests, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A full turn ran (including the failure path, which still appends the
    /// fallback message and returns the widget to idle).
    Completed,
    /// Empty after trimming.
    RejectedEmpty,
    /// Longer than the configured maximum.
    RejectedTooLong,
    /// A request was already outstanding.
    RejectedBusy,
}

/// Orchestrates one widget instance.
///
/// Generic over its three ports: the backend transport, the session
/// persistence surface, and the render surface. All state is instance-owned
/// so multiple independent widgets can coexist.
pub struct ConversationController<T, B: SessionBackend, S> {
    config: WidgetConfig,
    transport: T,
    session: SessionStore<B>,
    surface: S,
    transcript: Transcript,
    pipeline: RenderPipeline,
    phase: Phase,
    is_open: bool,
}

impl<T, B, S> ConversationController<T, B, S>
where
    T: ChatTransport,
    B: SessionBackend,
    S: RenderSurface,
{
    /// Build a controller over the given ports.
    ///
    /// Reads the persisted session identifier; a storage failure here is
    /// fatal to activation (fail fast at startup).
    pub fn new(
        config: WidgetConfig,
        transport: T,
        backend: B,
        surface: S,
    ) -> Result<Self, WidgetError> {
        let session = SessionStore::load(backend)?;
        let initial_actions = config
            .initial_actions
            .iter()
            .map(|label| SuggestedAction::labeled(label.clone()))
            .collect();
        Ok(Self {
            config,
            transport,
            session,
            surface,
            transcript: Transcript::new(),
            pipeline: RenderPipeline::new(initial_actions),
            phase: Phase::Idle,
            is_open: false,
        })
    }

    /// Activate the widget: ensure a session identifier exists, seed the
    /// greeting into an empty transcript, and render the initial state.
    ///
    /// Returns the session identifier in effect.
    pub fn start(&mut self) -> Result<String, WidgetError> {
        let session_id = self.session.ensure()?;
        if self.transcript.is_empty() && !self.config.greeting.is_empty() {
            self.transcript.append(Message::bot(self.config.greeting.clone()));
        }
        self.pipeline.sync(&self.transcript, &mut self.surface);
        self.pipeline.show_initial_actions(&mut self.surface);
        Ok(session_id)
    }

    /// Public control surface: show the widget.
    pub fn open(&mut self) {
        self.is_open = true;
        self.surface.set_visible(true);
    }

    /// Public control surface: hide the widget. Data is untouched.
    pub fn close(&mut self) {
        self.is_open = false;
        self.surface.set_visible(false);
    }

    /// Public control surface: submit text exactly as if typed.
    pub async fn send_message(&mut self, text: &str) -> SubmitOutcome {
        self.submit(text).await
    }

    /// Run one conversation turn.
    ///
    /// Guard violations reject silently without any state change. A
    /// transport failure is absorbed into the fixed fallback message; the
    /// widget always returns to idle and stays usable.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::RejectedEmpty;
        }
        if trimmed.chars().count() > self.config.max_message_len {
            debug!(len = trimmed.len(), "submission over length limit");
            return SubmitOutcome::RejectedTooLong;
        }
        if self.phase != Phase::Idle {
            debug!("submission while awaiting response");
            return SubmitOutcome::RejectedBusy;
        }

        let session_id = match self.session.ensure() {
            Ok(id) => id,
            Err(err) => {
                // The in-memory identifier is still set; only persistence failed.
                warn!(error = %err, "failed to persist session id");
                self.session.current().unwrap_or_default().to_string()
            }
        };

        // Optimistic echo: the user message lands before the backend answers.
        self.transcript.append(Message::user(trimmed));
        self.phase = Phase::AwaitingResponse;
        self.surface.clear_actions();
        self.pipeline.sync(&self.transcript, &mut self.surface);
        self.surface.set_typing(true);

        let request = ChatRequest {
            message: trimmed.to_string(),
            session_id,
            channel: self.config.channel.clone(),
        };

        match self.transport.send(&request).await {
            Ok(reply) => {
                if let Some(new_id) = reply.session_id.as_deref() {
                    if self.session.current() != Some(new_id) {
                        debug!(new_id, "session migration");
                        if let Err(err) = self.session.update(new_id) {
                            warn!(error = %err, "failed to persist migrated session id");
                        }
                    }
                }

                let escalate = reply.escalate;
                let suggested = reply.suggested_actions.clone();
                let meta = MessageMeta {
                    order_info: reply.order_info,
                    escalate,
                    suggested_actions: reply.suggested_actions,
                };
                self.transcript
                    .append(Message::bot_with_meta(reply.response, meta));
                if escalate {
                    self.transcript
                        .append(Message::system(self.config.escalation_notice.clone()));
                }
                self.pipeline.sync(&self.transcript, &mut self.surface);
                if !suggested.is_empty() {
                    self.surface.show_actions(&suggested);
                }
            }
            Err(err) => {
                warn!(error = %err, "chat request failed");
                self.transcript
                    .append(Message::bot(self.config.fallback_text.clone()));
                self.pipeline.sync(&self.transcript, &mut self.surface);
            }
        }

        self.surface.set_typing(false);
        self.phase = Phase::Idle;
        SubmitOutcome::Completed
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True exactly while a request is outstanding.
    pub fn is_typing(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The session identifier currently in memory.
    pub fn session_id(&self) -> Option<&str> {
        self.session.current()
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
