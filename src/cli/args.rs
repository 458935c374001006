use clap::{Parser, Subcommand};
use std::str::FromStr;

/// Query the chart of accounts taxonomy and ledger rules
#[derive(Parser, Debug)]
#[command(name = "chart-engine")]
#[command(about = "Classify account types and inspect ledger group rules", long_about = None)]
pub struct CliArgs {
    /// Custom account types to register before the query runs
    #[arg(
        long = "custom",
        value_name = "NAME=PARENT",
        help = "Register a custom account type under PARENT (repeatable; empty PARENT means Primary)"
    )]
    pub custom: Vec<CustomGroupArg>,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level or filter directive, e.g. 'debug' or 'chart_engine=trace'"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the parent group of each account type
    Classify {
        #[arg(value_name = "TYPE", required = true)]
        types: Vec<String>,
    },
    /// List the account types a user can assign
    Types {
        #[arg(long, value_name = "TEXT", help = "Keep only types whose name contains TEXT")]
        filter: Option<String>,
    },
    /// List the groups a ledger can be registered under
    Groups,
    /// Show which conditional fields a ledger group activates
    Rules {
        #[arg(value_name = "UNDER")]
        under: String,
    },
    /// Check a bank routing code
    CheckRouting {
        #[arg(value_name = "CODE")]
        code: String,
    },
}

/// A `NAME=PARENT` pair from `--custom`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomGroupArg {
    pub name: String,
    pub parent: Option<String>,
}

impl FromStr for CustomGroupArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, parent) = match s.split_once('=') {
            Some((name, parent)) => (name.trim(), Some(parent.trim())),
            None => (s.trim(), None),
        };

        if name.is_empty() {
            return Err(format!("custom group '{}' has an empty name", s));
        }

        Ok(CustomGroupArg {
            name: name.to_string(),
            parent: parent.filter(|p| !p.is_empty()).map(str::to_string),
        })
    }
}
