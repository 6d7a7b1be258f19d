use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use ablog::api::BlogApi;
use ablog::archive::Archive;
use ablog::commands::config::ConfigAction;
use ablog::config::BlogConfig;
use ablog::context::{PostContext, Provider};
use ablog::error::Result;
use ablog::generator;
use ablog::store::PostStore;

mod args;
mod print;
mod styles;

use args::Cli;
use print::{print_archive, print_messages, print_posts};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Session {
    api: BlogApi,
    dark: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut session = init_session(&cli)?;

    // The results counter is a subscriber: it re-renders on every effective
    // state change and only then.
    session.api.posts()?.subscribe(|snap| {
        println!("🚀 {} atomic posts found", snap.visible_posts.len());
    });

    let theme = styles::theme(session.dark);
    println!(
        "{}",
        theme
            .banner
            .apply_to("⚛️  The Atomic Blog — type 'help' for commands")
    );
    let snapshot = session.api.snapshot()?;
    println!("🚀 {} atomic posts found", snapshot.visible_posts.len());

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("ablog> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if !dispatch(&mut session, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("© by The Atomic Blog ✌️");
    Ok(())
}

fn init_session(cli: &Cli) -> Result<Session> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".ablog");

    // Project config wins when present; otherwise fall back to the global
    // location. The config command always writes project-scoped.
    let config_dir = if project_dir.exists() {
        project_dir.clone()
    } else {
        ProjectDirs::from("com", "ablog", "ablog")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| project_dir.clone())
    };
    let config = BlogConfig::load(config_dir).unwrap_or_default();

    let seed = cli.seed.unwrap_or(config.seed_posts);
    let archive_size = cli.archive_size.unwrap_or(config.archive_posts);

    let store = PostStore::new(generator::sample_posts(seed));
    let mut provider = Provider::new();
    provider.provide_posts(PostContext::new(store));

    let api = BlogApi::new(provider, Archive::new(archive_size), project_dir);
    Ok(Session {
        api,
        dark: cli.dark,
    })
}

/// Route one input line. Returns false when the session should end. Handler
/// errors are reported and the loop keeps running.
fn dispatch(session: &mut Session, line: &str) -> bool {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((v, r)) => (v, r.trim()),
        None => (line, ""),
    };

    let outcome = match verb {
        "add" | "a" => handle_add(session, rest),
        "clear" => handle_clear(session),
        "search" | "s" => handle_search(session, rest),
        "list" | "ls" => handle_list(session),
        "archive" => handle_archive(session),
        "promote" | "p" => handle_promote(session, rest),
        "dark" => {
            handle_dark(session);
            Ok(())
        }
        "config" => handle_config(session, rest),
        "help" | "?" => {
            print_help();
            Ok(())
        }
        "quit" | "exit" | "q" => return false,
        other => {
            println!(
                "{}",
                format!("Unknown command: {} (try 'help')", other).yellow()
            );
            Ok(())
        }
    };

    if let Err(e) = outcome {
        println!("{}", format!("Error: {}", e).red());
    }
    true
}

/// The add form. Both fields must be non-empty; an incomplete submission is
/// ignored without an error and without touching the feed.
fn handle_add(session: &Session, rest: &str) -> Result<()> {
    let (title, body) = match rest.split_once(" -- ") {
        Some((t, b)) => (t.trim(), b.trim()),
        None => (rest, ""),
    };
    if title.is_empty() || body.is_empty() {
        return Ok(());
    }

    let result = session.api.add_post(title, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(session: &Session) -> Result<()> {
    let result = session.api.clear_posts()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(session: &Session, term: &str) -> Result<()> {
    let result = session.api.search_posts(term)?;
    print_posts(&result.listed_posts, styles::theme(session.dark));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(session: &Session) -> Result<()> {
    let result = session.api.list_posts()?;
    print_posts(&result.listed_posts, styles::theme(session.dark));
    print_messages(&result.messages);
    Ok(())
}

fn handle_archive(session: &mut Session) -> Result<()> {
    let result = session.api.toggle_archive()?;
    if !result.listed_posts.is_empty() {
        print_archive(&result.listed_posts, styles::theme(session.dark));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_promote(session: &Session, rest: &str) -> Result<()> {
    let index: usize = match rest.parse() {
        Ok(n) => n,
        Err(_) => {
            println!(
                "{}",
                format!("promote needs an archive index, got '{}'", rest).yellow()
            );
            return Ok(());
        }
    };

    let result = session.api.promote_post(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_dark(session: &mut Session) {
    session.dark = !session.dark;
    if session.dark {
        println!("🌙 fake dark mode on");
    } else {
        println!("☀️  fake dark mode off");
    }
}

fn handle_config(session: &Session, rest: &str) -> Result<()> {
    let mut parts = rest.split_whitespace();
    let action = match (parts.next(), parts.next()) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), Some(value)) => ConfigAction::Set(key.to_string(), value.to_string()),
        (Some(_), None) => {
            println!("{}", "usage: config [<key> <value>]".yellow());
            return Ok(());
        }
    };

    let result = session.api.config(action)?;
    if let Some(config) = &result.config {
        println!("seed-posts = {}", config.seed_posts);
        println!("archive-posts = {}", config.archive_posts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  add <title> -- <body>   publish a post (both parts required)");
    println!("  list                    show the feed (respects the active search)");
    println!("  search [term]           filter the feed; no term clears the filter");
    println!("  clear                   remove all posts");
    println!("  archive                 show/hide the archive batch");
    println!("  promote <n>             add archive entry n as a new post");
    println!("  dark                    toggle fake dark mode");
    println!("  config [<key> <value>]  show or set session defaults");
    println!("  quit                    leave the session");
}
