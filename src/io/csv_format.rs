//! CSV rendering of classification and rule queries
//!
//! This module centralizes all CSV output concerns for the command-line
//! front end, one writer per query:
//! - type classification (`type,parent`)
//! - assignable type listing (`type,parent,builtin`)
//! - ledger groups with their rule family (`group,kind`)
//! - field activation rules for one group
//! - routing code checks (`code,valid,reason`)
//!
//! Every writer takes a `&mut dyn Write` so tests can render into a buffer.

use crate::core::{AssignableType, FieldRules, UseAsRule};
use crate::types::{ChartError, GroupKind};
use csv::Writer;
use std::io::Write;

fn write_rows<I, R>(output: &mut dyn Write, header: &[&str], rows: I) -> Result<(), String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(header)
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| format!("Failed to write CSV record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write `type,parent` rows, one per classified account type
///
/// # Arguments
///
/// * `classified` - `(type, parent)` pairs in the order they were asked for
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_classifications_csv(
    classified: &[(String, String)],
    output: &mut dyn Write,
) -> Result<(), String> {
    write_rows(
        output,
        &["type", "parent"],
        classified
            .iter()
            .map(|(name, parent)| [name.as_str(), parent.as_str()]),
    )
}

/// Write the assignable type listing
pub fn write_types_csv(types: &[AssignableType], output: &mut dyn Write) -> Result<(), String> {
    write_rows(
        output,
        &["type", "parent", "builtin"],
        types.iter().map(|t| {
            [
                t.name.clone(),
                t.parent.clone(),
                t.builtin.to_string(),
            ]
        }),
    )
}

/// Write `group,kind` rows for the enumerated ledger groups
pub fn write_groups_csv(groups: &[&str], output: &mut dyn Write) -> Result<(), String> {
    write_rows(
        output,
        &["group", "kind"],
        groups
            .iter()
            .map(|group| [group.to_string(), GroupKind::of(group).to_string()]),
    )
}

/// Write the field activation decision for one group
///
/// `use_as_options` lists the choices separated by `|`; it is empty unless
/// the group offers a choice.
pub fn write_rules_csv(
    under: &str,
    rules: &FieldRules,
    output: &mut dyn Write,
) -> Result<(), String> {
    let (use_as, options) = match rules.use_as {
        UseAsRule::NotApplicable => ("not-applicable".to_string(), String::new()),
        UseAsRule::Fixed(value) => (value.to_string(), String::new()),
        UseAsRule::Choice(options) => (
            "choice".to_string(),
            options
                .iter()
                .map(|o| o.as_str())
                .collect::<Vec<_>>()
                .join("|"),
        ),
    };
    let limit = rules.limit.map(|l| l.to_string()).unwrap_or_default();

    write_rows(
        output,
        &[
            "group",
            "kind",
            "use_as",
            "use_as_options",
            "bank_details",
            "mailing_details",
            "limit",
        ],
        [[
            under.to_string(),
            rules.kind.to_string(),
            use_as,
            options,
            rules.bank_details.to_string(),
            rules.mailing_details.to_string(),
            limit,
        ]],
    )
}

/// Write the outcome of a routing code check
///
/// A blank code is valid (the field is optional) and prints an empty code.
pub fn write_routing_csv(
    code: &str,
    result: &Result<Option<String>, ChartError>,
    output: &mut dyn Write,
) -> Result<(), String> {
    let row = match result {
        Ok(normalized) => [
            normalized.clone().unwrap_or_default(),
            "true".to_string(),
            String::new(),
        ],
        Err(e) => [code.trim().to_string(), "false".to_string(), e.to_string()],
    };

    write_rows(output, &["code", "valid", "reason"], [row])
}
