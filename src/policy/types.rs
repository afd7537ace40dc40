//! Shared types for policy evaluation.

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;

/// Name of the per-message property the host stores the decision under.
pub const CONTENT_POLICY_PROPERTY: &str = "remoteContentPolicy";

// ── Decision ────────────────────────────────────────────────────────

/// Per-message remote-content decision, as persisted by the host.
///
/// The host stores this as an integer property: `0 = NoPolicy`,
/// `1 = Block`, `2 = Allow`. Once a message carries `Block` or `Allow`
/// the engine never touches it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteContentPolicy {
    /// No decision recorded — the host's default policy applies.
    NoPolicy,
    /// Remote content is blocked for this message.
    Block,
    /// Remote content is allowed for this message.
    Allow,
}

impl RemoteContentPolicy {
    /// Map a stored host integer to a known decision value.
    ///
    /// Returns `None` for integers this crate never writes. Callers must
    /// still treat such values as recorded decisions (see
    /// [`MessageHeader::remote_content_policy_raw`]).
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::NoPolicy),
            1 => Some(Self::Block),
            2 => Some(Self::Allow),
            _ => None,
        }
    }

    /// The integer value the host stores for this decision.
    pub fn as_raw(self) -> u32 {
        match self {
            Self::NoPolicy => 0,
            Self::Block => 1,
            Self::Allow => 2,
        }
    }

    /// Short label for logging.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoPolicy => "no_policy",
            Self::Block => "block",
            Self::Allow => "allow",
        }
    }
}

// ── Evaluation outcome ──────────────────────────────────────────────

/// What one engine evaluation did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationOutcome {
    /// The message already carried a decision; nothing was touched.
    AlreadyDecided,
    /// A rule matched and the decision was written.
    Decided(RemoteContentPolicy),
    /// Neither rule matched; the property was left unset.
    NoMatch,
}

impl EvaluationOutcome {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AlreadyDecided => "already_decided",
            Self::Decided(RemoteContentPolicy::Block) => "block",
            Self::Decided(RemoteContentPolicy::Allow) => "allow",
            Self::Decided(RemoteContentPolicy::NoPolicy) => "no_policy",
            Self::NoMatch => "no_match",
        }
    }
}

// ── Message capability ──────────────────────────────────────────────

/// Host message capability — the engine references messages, it never
/// owns them.
///
/// Production adapters implement this against the real host message
/// object; tests implement it in memory.
pub trait MessageHeader {
    /// Name of the folder containing the message at evaluation time.
    fn folder_name(&self) -> &str;

    /// The stored decision property as the raw host integer.
    ///
    /// `Ok(None)` means the property was never set. Any non-zero value —
    /// including ones [`RemoteContentPolicy::from_raw`] cannot map — is a
    /// recorded decision and stops re-evaluation. Read failures are the
    /// undecided state, not an error.
    fn remote_content_policy_raw(&self) -> Result<Option<u32>, PropertyError>;

    /// Persist a decision on the message. Assumed to succeed; write
    /// failures are the host's responsibility.
    fn set_remote_content_policy(&mut self, policy: RemoteContentPolicy);
}
