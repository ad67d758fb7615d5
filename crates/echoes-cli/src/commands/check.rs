use colored::Colorize;
use echoes_script::{ScriptStats, validate};

pub fn run() -> Result<(), String> {
    let script = super::build_script()?;
    let issues = validate(&script);

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{errors} error{}, {warnings} warning{}",
            if errors == 1 { "" } else { "s" },
            if warnings == 1 { "" } else { "s" },
        ));
    }

    let stats = ScriptStats::collect(&script);
    println!("  All checks passed for '{}'.", script.title);
    println!(
        "  {} nodes, {} lines, {} endings",
        stats.total_nodes(),
        stats.lines,
        stats.endings_present.len()
    );
    if warnings > 0 {
        println!("  {warnings} warning{}", if warnings == 1 { "" } else { "s" });
    }

    Ok(())
}
