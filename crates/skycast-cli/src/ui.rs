//! UI utilities for the CLI

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};

use skycast_core::{Result, Severity, WeatherReading};

use crate::assistant::Reply;
use crate::conversation::{Conversation, SUGGESTED_QUESTIONS};

const PROMPT: &str = "skycast>";

/// Display startup banner with the reading being discussed
pub fn display_banner(reading: &WeatherReading) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(67, terminal_width.saturating_sub(4)).max(40);

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "SkyCast - Weather Activity Assistant";
    let title_line = format!(
        "│  {}{}│",
        title.blue().bold(),
        " ".repeat(banner_width.saturating_sub(title.chars().count() + 4))
    );
    println!("{}", title_line);

    println!("{}", empty_line.blue());

    let conditions = format!(
        "{}: {}°C, {}",
        reading.city, reading.temperature, reading.description
    );
    let feature_lines = [
        conditions.as_str(),
        "",
        "Ask about:",
        "• Sports and outdoor plans (cricket, hiking, picnic...)",
        "• Indoor ideas (movies, reading, cooking...)",
        "• Anything else, with a local weather briefing fallback",
        "",
        "v0.1.0",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
            continue;
        }
        let padding = " ".repeat(banner_width.saturating_sub(line.chars().count() + 4));
        let content = if line.starts_with("v0.1.0") {
            format!("│  {}{}│", line.dimmed(), padding)
        } else {
            format!("│  {}{}│", line, padding)
        };
        println!("{}", content.blue());
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "💡 Tip: Ask a question in plain words, or 'help' for commands".dimmed()
    );
    println!();
}

/// Handle input with command history navigation
pub async fn handle_input_with_history(history: &mut Vec<String>) -> Result<String> {
    // Piped input is read line by line without raw mode
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok("exit".to_string());
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(input);
    }

    enable_raw_mode()?;
    let result = read_line_raw(history);
    disable_raw_mode()?;
    println!();
    result
}

fn read_line_raw(history: &mut Vec<String>) -> Result<String> {
    let mut input = String::new();
    let mut history_index: Option<usize> = None;

    print!("{} ", PROMPT.green().bold());
    io::stdout().flush()?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        match key_event.code {
            KeyCode::Enter => {
                if !input.is_empty() {
                    history.push(input.clone());
                }
                return Ok(input);
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok("exit".to_string());
            }
            KeyCode::Char(c) => {
                input.push(c);
                redraw(&input, 0)?;
            }
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    redraw(&input, 1)?;
                }
            }
            KeyCode::Up => {
                if !history.is_empty() {
                    let new_index = match history_index {
                        None => history.len() - 1,
                        Some(idx) if idx > 0 => idx - 1,
                        Some(idx) => idx,
                    };
                    let previous_len = input.chars().count();
                    history_index = Some(new_index);
                    input = history[new_index].clone();
                    redraw(&input, previous_len)?;
                }
            }
            KeyCode::Down => {
                if let Some(idx) = history_index {
                    let previous_len = input.chars().count();
                    if idx + 1 < history.len() {
                        history_index = Some(idx + 1);
                        input = history[idx + 1].clone();
                    } else {
                        history_index = None;
                        input.clear();
                    }
                    redraw(&input, previous_len)?;
                }
            }
            KeyCode::Esc => {
                return Ok(String::new());
            }
            _ => {}
        }
    }
}

/// Rewrite the prompt line, blanking out up to `stale` leftover characters
fn redraw(input: &str, stale: usize) -> Result<()> {
    print!(
        "\r{} {}{}\r{} {}",
        PROMPT.green().bold(),
        input,
        " ".repeat(stale),
        PROMPT.green().bold(),
        input
    );
    io::stdout().flush()?;
    Ok(())
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Ask about an activity or anything else", "question".green());
    println!("  {} - Show the conversation so far", "history".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  is it a good day for tennis?");
    println!("  can we have a picnic this afternoon");
    println!("  summarize the current weather");
}

/// Offer starter questions
pub fn print_suggestions() {
    println!("{}", "Try asking:".bold());
    for suggestion in SUGGESTED_QUESTIONS {
        println!("  {} {}", "•".yellow(), suggestion);
    }
    println!();
}

/// Print an assistant reply with its severity icon
pub fn print_reply(reply: &Reply) {
    let icon = match reply.severity {
        Severity::Success => reply.severity.icon().green(),
        Severity::Warning => reply.severity.icon().yellow(),
        Severity::Info => reply.severity.icon().blue(),
    };
    println!("{} {}", icon, reply.message.trim_end());
    println!();
}

/// Print every turn with its local time
pub fn print_transcript(conversation: &Conversation) {
    for turn in conversation.turns() {
        let speaker = if turn.from_assistant {
            "assistant".cyan()
        } else {
            "you".green()
        };
        println!("{} {}", format!("[{}]", turn.time_label()).dimmed(), speaker.bold());
        println!("{}", turn.text.trim_end());
        println!();
    }
}
