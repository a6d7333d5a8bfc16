//! Cross-crate integration flows.

mod channel_creation;
mod deliver_resume;
mod telemetry;
