use comfy_table::{ContentArrangement, Table};
use echoes_script::ScriptStats;

pub fn run() -> Result<(), String> {
    let script = super::build_script()?;
    let stats = ScriptStats::collect(&script);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Count"]);

    table.add_row(vec!["Nodes".to_string(), stats.total_nodes().to_string()]);
    table.add_row(vec!["  linear".to_string(), stats.linear_nodes.to_string()]);
    table.add_row(vec!["  choice".to_string(), stats.choice_nodes.to_string()]);
    table.add_row(vec!["  ending".to_string(), stats.ending_nodes.to_string()]);
    table.add_row(vec!["Lines".to_string(), stats.lines.to_string()]);
    table.add_row(vec!["Words".to_string(), stats.words.to_string()]);
    table.add_row(vec!["Options".to_string(), stats.options.to_string()]);
    table.add_row(vec![
        "  guarded".to_string(),
        stats.guarded_options.to_string(),
    ]);
    table.add_row(vec!["Characters".to_string(), stats.characters.to_string()]);
    table.add_row(vec![
        "Endings".to_string(),
        stats.endings_present.len().to_string(),
    ]);

    println!("{table}");
    println!();
    println!("  '{}'", script.title);

    Ok(())
}
