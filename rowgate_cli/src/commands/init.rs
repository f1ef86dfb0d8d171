use anyhow::{Context, Result};

use crate::output;

const STARTER_RULES: &str = r#"# rowgate validation rules
#
# Each entry under `fields` declares the contract for one column of the
# input table. Per field:
#   required: true discards the whole row on failure (default: false,
#             which nulls just the field)
#   type:     string | int | bool | date | datetime (default: untyped)
#   regex:    pattern the cast value's canonical text must fully match
fields:
  title:
    required: true
    type: string
  issued:
    required: true
    type: date
    regex: '^\d{4}-\d{2}-\d{2}$'
  year:
    type: int
  active:
    type: bool
"#;

pub fn execute(output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, STARTER_RULES)
                .with_context(|| format!("failed to write rule file: {path}"))?;
            output::print_success(&format!("Starter rule file written to {path}"));
        }
        None => print!("{STARTER_RULES}"),
    }

    Ok(())
}
