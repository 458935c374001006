//! Core business logic module
//!
//! This module contains the chart of accounts components:
//! - `taxonomy` - Built-in account types and their parent groups
//! - `registry` - Append-only registry of user-defined account types
//! - `classifier` - Parent resolution over the taxonomy and the registry
//! - `uniqueness` - Normalized name uniqueness per name space
//! - `assignment` - Group-dependent ledger field rules
//! - `traits` - Persistence seam
//! - `store` - In-memory tables
//! - `engine` - Single-owner orchestration
//! - `shared` - Thread-safe orchestration

pub mod assignment;
pub mod classifier;
pub mod engine;
pub mod registry;
pub mod shared;
pub mod store;
pub mod taxonomy;
pub mod traits;
pub mod uniqueness;

#[cfg(test)]
mod classification_props;

pub use assignment::{field_rules, validate_routing_code, FieldRules, LedgerAssignment, UseAsRule};
pub use classifier::{AssignableType, Classifier};
pub use engine::ChartEngine;
pub use registry::CustomGroupRegistry;
pub use shared::SharedChartEngine;
pub use store::{AccountTable, LedgerTable, MemoryStore, Table};
pub use traits::{ChartStore, Record};
pub use uniqueness::{normalize_name, UniquenessValidator};
