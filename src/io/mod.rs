//! I/O module
//!
//! Handles CSV output for the command-line front end.
//!
//! # Components
//!
//! - `csv_format` - CSV serialization of classification and rule queries

pub mod csv_format;

pub use csv_format::{
    write_classifications_csv, write_groups_csv, write_routing_csv, write_rules_csv,
    write_types_csv,
};
