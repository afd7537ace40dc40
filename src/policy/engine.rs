//! Decision engine — applies the allow/block precedence policy to one
//! incoming message exactly once.
//!
//! Flow per message:
//! 1. Idempotency guard — a recorded decision (by this engine, the user,
//!    or any other actor) is never overwritten
//! 2. Rule evaluation — `block_first` picks which rule is tested first;
//!    the first match wins and the losing rule is never evaluated
//! 3. No match — the property stays unset and the host default applies

use std::sync::Arc;

use tracing::debug;

use crate::config::ConfigSource;
use crate::policy::matcher;
use crate::policy::types::{
    CONTENT_POLICY_PROPERTY, EvaluationOutcome, MessageHeader, RemoteContentPolicy,
};

/// Which configured rule is being tested.
#[derive(Debug, Clone, Copy)]
enum RuleKind {
    Allow,
    Block,
}

impl RuleKind {
    fn decision(self) -> RemoteContentPolicy {
        match self {
            Self::Allow => RemoteContentPolicy::Allow,
            Self::Block => RemoteContentPolicy::Block,
        }
    }
}

/// Decides, per newly arrived message, whether remote content should be
/// blocked, allowed, or left to the host's default policy.
///
/// The engine is stateless: all durable state lives in the host's message
/// property store and configuration store.
pub struct DecisionEngine {
    config: Arc<dyn ConfigSource>,
}

impl DecisionEngine {
    /// Create an engine reading rules from the given configuration source.
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self { config }
    }

    /// Evaluate one newly arrived message.
    ///
    /// Configuration is read fresh on every call so preference changes
    /// take effect for the next message. Writes the decision property at
    /// most once over the message's lifetime.
    pub fn on_message_arrived<M: MessageHeader + ?Sized>(
        &self,
        message: &mut M,
    ) -> EvaluationOutcome {
        // Idempotency guard. Absence and read failure are both the
        // undecided state; any non-zero stored value is a prior decision.
        match message.remote_content_policy_raw() {
            Ok(Some(raw)) if raw != RemoteContentPolicy::NoPolicy.as_raw() => {
                debug!(
                    property = CONTENT_POLICY_PROPERTY,
                    value = raw,
                    folder = %message.folder_name(),
                    "Decision already recorded, not modifying"
                );
                return EvaluationOutcome::AlreadyDecided;
            }
            Ok(_) => {}
            Err(e) => {
                debug!(
                    property = CONTENT_POLICY_PROPERTY,
                    error = %e,
                    "Decision property unreadable, treating as undecided"
                );
            }
        }

        let block_first = self.config.block_first();

        if block_first && self.try_rule(message, RuleKind::Block) {
            return EvaluationOutcome::Decided(RemoteContentPolicy::Block);
        }
        if self.try_rule(message, RuleKind::Allow) {
            return EvaluationOutcome::Decided(RemoteContentPolicy::Allow);
        }
        if !block_first && self.try_rule(message, RuleKind::Block) {
            return EvaluationOutcome::Decided(RemoteContentPolicy::Block);
        }

        debug!(
            folder = %message.folder_name(),
            "No rule matched, leaving the host default policy in effect"
        );
        EvaluationOutcome::NoMatch
    }

    /// Evaluate a batch of messages (e.g. from a folder rescan).
    ///
    /// Each message is evaluated independently; recorded decisions in the
    /// batch are skipped like anywhere else.
    pub fn evaluate_batch<M: MessageHeader>(&self, messages: &mut [M]) -> Vec<EvaluationOutcome> {
        let outcomes: Vec<EvaluationOutcome> = messages
            .iter_mut()
            .map(|message| self.on_message_arrived(message))
            .collect();

        debug!(count = outcomes.len(), "Batch evaluation complete");
        outcomes
    }

    /// Test one rule against the message's folder name, recording the
    /// rule's decision on a match.
    fn try_rule<M: MessageHeader + ?Sized>(&self, message: &mut M, rule: RuleKind) -> bool {
        // The pattern is fetched only when the rule is actually evaluated,
        // so a short-circuited rule never reads its preference.
        let pattern = match rule {
            RuleKind::Allow => self.config.allow_pattern(),
            RuleKind::Block => self.config.block_pattern(),
        };

        if !matcher::matches(message.folder_name(), &pattern) {
            return false;
        }

        let decision = rule.decision();
        message.set_remote_content_policy(decision);
        debug!(
            folder = %message.folder_name(),
            decision = decision.label(),
            "Recorded remote-content decision"
        );
        true
    }
}
