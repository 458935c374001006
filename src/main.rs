//! Chart engine CLI
//!
//! Command-line interface for querying the account taxonomy and the ledger
//! group rules.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- classify "Cash-in-Hand" "broker" > parents.csv
//! cargo run -- --custom "Petty Cash=Current Assets" types --filter cash
//! cargo run -- groups
//! cargo run -- rules "Bank OD A/c"
//! cargo run -- --log-level debug check-routing HDFC0001234
//! ```
//!
//! Results are written to stdout as CSV; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown group, write failure, etc.)

use chart_engine::{cli, logging};
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::init_tracing(args.log_level.as_deref());

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
