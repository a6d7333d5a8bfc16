//! Driving ports (Inbound API)

use shared_types::Envelope;

use crate::domain::AdmissionError;

/// A check applied to every message entering a channel.
///
/// Rules are evaluated in order by a [`RuleSet`](crate::application::RuleSet);
/// the first error rejects the message.
pub trait Rule: Send + Sync {
    /// Accept or reject `env`.
    fn apply(&self, env: &Envelope) -> Result<(), AdmissionError>;
}
