use anyhow::{Context, Result};
use std::path::Path;

use crate::output;

pub fn execute(rules_path: &str) -> Result<()> {
    let rules = rowgate_rules::load_file(Path::new(rules_path))
        .with_context(|| format!("failed to load rule file: {rules_path}"))?;

    output::print_success(&format!(
        "Rule file OK: {} field rule(s) compiled",
        rules.len()
    ));

    // stable listing for eyeballing and diffing
    let mut entries: Vec<_> = rules.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, rule) in entries {
        let requirement = if rule.required { "required" } else { "optional" };
        match &rule.pattern_text {
            Some(pattern) => println!(
                "  {name}: {requirement}, type={}, regex={pattern}",
                rule.field_type.name()
            ),
            None => println!("  {name}: {requirement}, type={}", rule.field_type.name()),
        }
    }

    Ok(())
}
