use std::path::Path;

use colored::Colorize;
use echoes_engine::EndingFlags;
use echoes_script::Ending;

pub fn run(save: &Path) -> Result<(), String> {
    let flags = EndingFlags::load(save).map_err(|e| e.to_string())?;

    println!("  {}", echoes_content::TITLE.bold());
    println!();

    for ending in Ending::ALL {
        let status = if flags.is_unlocked(ending) {
            "unlocked".green()
        } else {
            "locked".dimmed()
        };
        println!("  {:<24} {status}", ending.to_string());
    }

    println!();
    println!("  {} / {} endings found", flags.unlocked_count(), Ending::ALL.len());

    if flags.is_unlocked(Ending::True) {
        println!("  {}", "The story is complete.".bold());
    } else if flags.true_route_reachable() {
        println!("  {}", "The fifth door awaits.".bold());
    }

    Ok(())
}
