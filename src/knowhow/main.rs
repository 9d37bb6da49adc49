use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use console::Term;
use directories::ProjectDirs;
use knowhow::api::{CmdMessage, ConfigAction, KnowhowApi, MessageLevel, NoteFilter, StatusFilter};
use knowhow::config::KnowhowConfig;
use knowhow::error::{KnowhowError, Result};
use knowhow::index::DisplayNote;
use knowhow::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KnowhowApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { content }) => handle_add(&mut ctx, content),
        Some(Commands::List {
            search,
            confirmed,
            unconfirmed,
        }) => handle_list(&ctx, search, confirmed, unconfirmed),
        Some(Commands::View { positions }) => handle_view(&ctx, positions),
        Some(Commands::Used { positions }) => handle_used(&mut ctx, positions),
        Some(Commands::Edit { position, content }) => handle_edit(&mut ctx, position, content),
        Some(Commands::Delete { positions, yes }) => handle_delete(&mut ctx, positions, yes),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Comment { position, text }) => handle_comment(&mut ctx, position, text),
        Some(Commands::Uncomment { position, comment }) => {
            handle_uncomment(&mut ctx, position, comment)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, false, false),
    }
}

fn data_dir() -> PathBuf {
    // KNOWHOW_HOME takes precedence; tests and scripts point it anywhere
    if let Some(home) = std::env::var_os("KNOWHOW_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs =
        ProjectDirs::from("com", "knowhow", "knowhow").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir();
    let config = KnowhowConfig::load(&dir).unwrap_or_default();
    let store = FileStore::new(dir.clone()).with_data_file(config.get_data_file());
    Ok(AppContext {
        api: KnowhowApi::new(store, dir),
    })
}

fn handle_add(ctx: &mut AppContext, content: Vec<String>) -> Result<()> {
    let result = ctx.api.create_note(&content.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    confirmed: bool,
    unconfirmed: bool,
) -> Result<()> {
    let status = if confirmed {
        StatusFilter::Confirmed
    } else if unconfirmed {
        StatusFilter::Unconfirmed
    } else {
        StatusFilter::All
    };
    let filter = NoteFilter {
        status,
        search_term: search,
    };

    let result = ctx.api.list_notes(filter)?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.view_notes(&positions)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_used(ctx: &mut AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.mark_used(&positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: usize, content: Vec<String>) -> Result<()> {
    let result = ctx.api.update_note(position, &content.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, positions: Vec<usize>, yes: bool) -> Result<()> {
    if !yes {
        // Resolve before prompting so a bad position fails fast
        let preview = ctx.api.view_notes(&positions)?;
        if !confirm_delete(&preview.listed_notes)? {
            println!("Aborted.");
            return Ok(());
        }
    }
    let result = ctx.api.delete_notes(&positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_note(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment(ctx: &mut AppContext, position: usize, text: Vec<String>) -> Result<()> {
    let result = ctx.api.comment_note(position, &text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_uncomment(ctx: &mut AppContext, position: usize, comment: usize) -> Result<()> {
    let result = ctx.api.uncomment_note(position, comment)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.get_data_file());
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm_delete(notes: &[DisplayNote]) -> Result<bool> {
    let term = Term::stderr();
    for dn in notes {
        term.write_line(&format!("  {}. {}", dn.index, dn.note.content))
            .map_err(KnowhowError::Io)?;
    }
    let prompt = if notes.len() == 1 {
        "Really delete this note? [y/N] ".to_string()
    } else {
        format!("Really delete these {} notes? [y/N] ", notes.len())
    };
    term.write_str(&prompt).map_err(KnowhowError::Io)?;
    let answer = term.read_line().map_err(KnowhowError::Io)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COUNT_WIDTH: usize = 5;
const CONFIRMED_MARKER: &str = "★";

fn print_notes(notes: &[DisplayNote]) {
    for dn in notes {
        let confirmed = dn.note.is_confirmed();

        let left_prefix = if confirmed {
            format!("  {} ", CONFIRMED_MARKER)
        } else {
            "    ".to_string()
        };
        let left_prefix_width = left_prefix.width();

        let idx_str = format!("{}. ", dn.index);
        let idx_width = idx_str.width();

        let mut title_content: String = dn
            .note
            .content
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let comment_count = dn.note.comments.len();
        if comment_count > 0 {
            let plural = if comment_count == 1 { "" } else { "s" };
            title_content.push_str(&format!("  ({} comment{})", comment_count, plural));
        }

        let count_str = format!("{:>width$}", format!("×{}", dn.note.count), width = COUNT_WIDTH);
        let time_str = format!("{:>width$}", format_time_ago(dn.note.created_at), width = TIME_WIDTH);

        let fixed_width = left_prefix_width + idx_width + COUNT_WIDTH + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let marker_colored = if confirmed {
            left_prefix.yellow()
        } else {
            left_prefix.normal()
        };
        let count_colored = if confirmed {
            count_str.yellow()
        } else {
            count_str.dimmed()
        };

        println!(
            "{}{}{}{}{}  {}",
            marker_colored,
            idx_str,
            title_display,
            " ".repeat(padding),
            count_colored,
            time_str.dimmed()
        );
    }
}

fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }

        let status = if dn.note.is_confirmed() {
            format!("{} confirmed, used {} times", CONFIRMED_MARKER, dn.note.count)
                .yellow()
                .to_string()
        } else {
            format!("used {} times", dn.note.count).dimmed().to_string()
        };
        println!(
            "{} {} ({})",
            format!("{}.", dn.index).yellow(),
            dn.note.content.bold(),
            status
        );
        println!("   added {}", format_time_ago(dn.note.created_at).dimmed());

        if !dn.note.comments.is_empty() {
            println!("   --------------------------------");
            for (j, comment) in dn.note.comments.iter().enumerate() {
                println!(
                    "   {}. {} {}",
                    j + 1,
                    comment.text,
                    format!("({})", format_time_ago(comment.created_at)).dimmed()
                );
            }
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
