use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use echoes_engine::{EndingFlags, Engine, RenderedLine};
use echoes_script::NodeBody;

pub fn run(save: &Path, name: Option<&str>) -> Result<(), String> {
    let script = super::build_script()?;
    let engine = Engine::new(&script);
    let mut flags = EndingFlags::load(save).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let player_name = match name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => prompt_name(&mut input)?,
    };

    let mut session = engine.start_session(player_name, &flags);

    println!();
    println!("  {}", echoes_content::TITLE.bold());
    if session.true_route_unlocked() {
        println!(
            "  {}",
            "All four endings remembered. The fifth door awaits.".bold()
        );
    }
    println!();

    let mut current = script.start().clone();
    loop {
        for line in engine
            .render_lines(&current, &session)
            .map_err(|e| e.to_string())?
        {
            print_line(&line);
        }
        println!();

        let options = engine
            .available_options(&current, &session)
            .map_err(|e| e.to_string())?;
        if !options.is_empty() {
            for (i, option) in options.iter().enumerate() {
                println!("  {}. {}", i + 1, option.label);
            }
            let picked = prompt_index(&mut input, options.len())?;
            current = engine
                .choose(&current, picked, &mut session)
                .map_err(|e| e.to_string())?
                .clone();
            println!();
            continue;
        }

        match &script.get(&current).map_err(|e| e.to_string())?.body {
            NodeBody::Linear { next } => current = next.clone(),
            NodeBody::Ending { .. } => {
                let outcome = engine
                    .enter_ending(&current, &mut flags)
                    .map_err(|e| e.to_string())?;
                flags.save(save).map_err(|e| e.to_string())?;

                if outcome.newly_unlocked {
                    println!(
                        "  {}",
                        format!("New ending unlocked: {}", outcome.ending)
                            .green()
                            .bold()
                    );
                } else {
                    println!("  You have reached {} before.", outcome.ending);
                }
                println!(
                    "  {} / {} endings found",
                    flags.unlocked_count(),
                    echoes_script::Ending::ALL.len()
                );
                if outcome.true_route_opened {
                    println!();
                    println!(
                        "  {}",
                        "Something has changed at the summit. Climb again.".bold()
                    );
                }
                return Ok(());
            }
            // A choice node whose every option is guard-filtered;
            // `check` rejects scripts where this can happen.
            NodeBody::Choice { .. } => {
                return Err(format!("no options available at {current}"));
            }
        }
    }
}

/// Print one rendered line, tinting the speaker with their character color.
fn print_line(line: &RenderedLine) {
    match &line.speaker {
        Some(name) => {
            let shown = match line.color.as_deref().and_then(hex_rgb) {
                Some((r, g, b)) => name.as_str().truecolor(r, g, b).bold(),
                None => name.as_str().bold(),
            };
            println!("  {shown}: {}", line.text);
        }
        None => println!("  {}", line.text.dimmed()),
    }
}

/// Prompt for the player's name; empty input or EOF falls back to the
/// default.
fn prompt_name(
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, String> {
    print!("  Your name? [{}] ", echoes_content::DEFAULT_PLAYER_NAME);
    io::stdout().flush().map_err(|e| e.to_string())?;

    match input.next() {
        Some(line) => {
            let line = line.map_err(|e| e.to_string())?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Ok(echoes_content::DEFAULT_PLAYER_NAME.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Ok(echoes_content::DEFAULT_PLAYER_NAME.to_string()),
    }
}

/// Prompt until the player enters a number in `1..=max`; returns the
/// zero-based index.
fn prompt_index(
    input: &mut impl Iterator<Item = io::Result<String>>,
    max: usize,
) -> Result<usize, String> {
    loop {
        print!("  > ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let line = input
            .next()
            .ok_or_else(|| "unexpected end of input".to_string())?
            .map_err(|e| e.to_string())?;

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n - 1),
            _ => println!("  Enter a number between 1 and {max}."),
        }
    }
}

/// Parse a `#rrggbb` hex color.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_rgb("#c8ffc8"), Some((200, 255, 200)));
        assert_eq!(hex_rgb("#000000"), Some((0, 0, 0)));
        assert_eq!(hex_rgb("c8ffc8"), None);
        assert_eq!(hex_rgb("#fff"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
    }

    #[test]
    fn prompt_index_accepts_in_range() {
        let mut input = vec![Ok("2".to_string())].into_iter();
        assert_eq!(prompt_index(&mut input, 4).unwrap(), 1);
    }

    #[test]
    fn prompt_index_reprompts_until_valid() {
        let mut input = vec![
            Ok("0".to_string()),
            Ok("nine".to_string()),
            Ok("5".to_string()),
            Ok("4".to_string()),
        ]
        .into_iter();
        assert_eq!(prompt_index(&mut input, 4).unwrap(), 3);
    }

    #[test]
    fn prompt_index_fails_on_eof() {
        let mut input = std::iter::empty();
        assert!(prompt_index(&mut input, 4).is_err());
    }

    #[test]
    fn prompt_name_defaults_on_empty() {
        let mut input = vec![Ok("   ".to_string())].into_iter();
        assert_eq!(
            prompt_name(&mut input).unwrap(),
            echoes_content::DEFAULT_PLAYER_NAME
        );
    }
}
