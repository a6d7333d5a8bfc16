//! # Quantum-Chain Ordering Test Suite
//!
//! Cross-crate flows for the ordering services.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs            # Proposal and certificate builders
//! └── integration/
//!     ├── channel_creation.rs   # Admission against the in-memory registrar
//!     ├── deliver_resume.rs     # Deliver requests resuming a local ledger
//!     └── telemetry.rs          # Counters on the metrics endpoint
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By flow
//! cargo test -p qc-tests integration::channel_creation
//! cargo test -p qc-tests integration::deliver_resume
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

pub mod fixtures;
pub mod integration;
