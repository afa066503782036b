//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the tree core and its
//! collaborators. Following hexagonal architecture, these traits are owned by
//! the domain and implemented by adapters in the infrastructure layer (or by
//! an external rules engine).

pub mod observer;
pub mod oracle;
pub mod repository;

pub use observer::{MaintenanceObserver, MaintenanceStats, NullObserver};
pub use oracle::{MoveOracle, OracleAcceptance, OracleVerdict};
pub use repository::RecordRepository;
