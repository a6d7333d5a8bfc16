//! Application layer
//!
//! The system channel filter and the rule set that runs it.

mod rules;
mod system_filter;


pub use rules::{EmptyRejectRule, MaxBytesRule, RuleSet};
pub use system_filter::SystemChannelFilter;
