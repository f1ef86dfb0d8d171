use colored::*;
use rowgate_core::BatchResult;
use serde_json::json;

pub fn print_run_summary(result: &BatchResult, format: &str) {
    match format {
        "json" => print_json_summary(result),
        _ => print_text_summary(result),
    }
}

fn print_text_summary(result: &BatchResult) {
    eprintln!("\n{}", "═".repeat(60));
    eprintln!("{}", "  VALIDATION SUMMARY".bold());
    eprintln!("{}", "═".repeat(60));
    eprintln!("  Input rows:     {}", result.input_rows);
    eprintln!(
        "  Kept rows:      {}",
        result.kept_rows().to_string().green()
    );
    if result.discarded_rows > 0 {
        eprintln!(
            "  Discarded rows: {}",
            result.discarded_rows.to_string().red()
        );
    } else {
        eprintln!("  Discarded rows: {}", result.discarded_rows);
    }
    eprintln!("  Success rate:   {:.2}%", result.success_rate() * 100.0);
    eprintln!("{}", "═".repeat(60));
}

fn print_json_summary(result: &BatchResult) {
    let output = json!({
        "input_rows": result.input_rows,
        "kept_rows": result.kept_rows(),
        "discarded_rows": result.discarded_rows,
        "success_rate": result.success_rate(),
    });

    eprintln!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_default()
    );
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}
