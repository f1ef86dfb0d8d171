use anyhow::{Context, Result};
use rowgate_validator::BatchValidator;
use std::path::Path;
use tracing::info;

use crate::output;
use crate::table_io;

pub fn execute(
    rules_path: &str,
    input_path: &str,
    output_path: Option<&str>,
    report: &str,
) -> Result<()> {
    info!("Validating {} against rules {}", input_path, rules_path);

    // A broken rule file aborts before any row is read
    let rules = rowgate_rules::load_file(Path::new(rules_path))
        .with_context(|| format!("failed to load rule file: {rules_path}"))?;
    output::print_info(&format!("Rule set loaded: {} field rule(s)", rules.len()));

    let input = Path::new(input_path);
    let (table, columns) = table_io::read_table(input)
        .with_context(|| format!("failed to read input table: {input_path}"))?;
    output::print_info(&format!("Input table read: {} row(s)", table.len()));

    let result = BatchValidator::new().validate(&table, &rules);

    // kept rows leave in the same interchange format and column order
    // the input arrived in
    let format = table_io::detect_format(input);
    match output_path {
        Some(path) => {
            table_io::write_table(Path::new(path), &result.rows, format, &columns)?;
            output::print_success(&format!(
                "Wrote {} validated row(s) to {}",
                result.kept_rows(),
                path
            ));
        }
        None => {
            let rendered = table_io::render_table(&result.rows, format, &columns)?;
            print!("{rendered}");
        }
    }

    output::print_run_summary(&result, report);

    Ok(())
}
