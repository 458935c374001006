// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, Command, CustomGroupArg};

use crate::core::{validate_routing_code, ChartEngine};
use crate::io;
use crate::types::group::{is_ledger_group, LEDGER_GROUPS};
use crate::types::ChartError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or `--help`),
/// clap prints an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Seed the registry from `--custom` and run the requested query
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `output` - Writer receiving the CSV result
///
/// # Returns
///
/// * `Ok(())` if the query ran and its CSV was written
/// * `Err(String)` if the query input is unusable or writing failed
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), String> {
    let mut engine = ChartEngine::new();
    for custom in &args.custom {
        engine.register_if_absent(&custom.name, custom.parent.as_deref());
    }

    match &args.command {
        Command::Classify { types } => {
            let classified: Vec<(String, String)> = types
                .iter()
                .map(|t| {
                    let name = t.trim();
                    (name.to_string(), engine.resolve_parent(name).to_string())
                })
                .collect();
            io::write_classifications_csv(&classified, output)
        }
        Command::Types { filter } => {
            io::write_types_csv(&engine.list_assignable_types(filter.as_deref()), output)
        }
        Command::Groups => io::write_groups_csv(&LEDGER_GROUPS, output),
        Command::Rules { under } => {
            let under = under.trim();
            if under.is_empty() {
                return Err(ChartError::required("under").to_string());
            }
            if !is_ledger_group(under) {
                return Err(ChartError::unresolved_group(under).to_string());
            }
            io::write_rules_csv(under, &engine.field_rules(under), output)
        }
        Command::CheckRouting { code } => {
            io::write_routing_csv(code, &validate_routing_code(code), output)
        }
    }
}
