//! `cadence check`

use anyhow::Result;
use cadence_rule::rule::parse_rule;

/// Prints the canonical form of `rule`.
pub fn run(rule: &str) -> Result<String> {
    let parsed = parse_rule(rule)?;
    tracing::info!(input = %rule, canonical = %parsed, "Rule is valid");
    Ok(parsed.to_string())
}
