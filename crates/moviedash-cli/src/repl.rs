#![allow(clippy::doc_markdown)]
//! REPL (Read-Eval-Print-Loop) over the dashboard controls

use anyhow::Result;
use colored::Colorize;
use instant::Instant;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use std::sync::Arc;

use moviedash_core::{views, Dashboard, DashboardSettings, DashboardSnapshot, Dataset};

use crate::repl_output::{
    print_box_office, print_controls, print_detail, print_directors, print_genre_leaders,
    print_help, print_json, print_listing, print_settings, print_snapshot, print_summary,
    print_top_rated, OutputFormat,
};
use crate::session::DashboardSession;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub timing: bool,
    pub format: OutputFormat,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            timing: false,
            format: OutputFormat::Table,
        }
    }
}

/// Everything a REPL command reads or changes.
pub struct ReplContext {
    pub dataset: Arc<Dataset>,
    pub settings: DashboardSettings,
    pub session: DashboardSession,
    pub config: ReplConfig,
}

impl ReplContext {
    pub fn new(dataset: Arc<Dataset>, settings: DashboardSettings) -> Self {
        Self {
            dataset,
            settings,
            session: DashboardSession::new(),
            config: ReplConfig::default(),
        }
    }

    /// Re-derive every display from the current controls.
    pub fn derive(&self) -> DashboardSnapshot {
        let started = Instant::now();
        let snapshot = Dashboard::derive(&self.dataset, self.session.request(), &self.settings);
        if self.config.timing {
            println!(
                "{}",
                format!("(derived in {:.2}ms)", started.elapsed().as_secs_f64() * 1000.0).dimmed()
            );
        }
        snapshot
    }
}

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct ReplHelper;

/// Run the interactive REPL
pub fn run(dataset: Arc<Dataset>, settings: DashboardSettings, source: &str) -> Result<()> {
    println!(
        "\n{}",
        format!("MovieDash v{VERSION} - IMDB Top 250 dashboard").bold().cyan()
    );
    println!(
        "Dataset: {} ({} movies)",
        source.green(),
        dataset.len()
    );
    println!(
        "Type {} for commands, {} to exit\n",
        ".help".yellow(),
        ".quit".yellow()
    );

    let mut ctx = ReplContext::new(dataset, settings);

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    let history_path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".moviedash_history");
    let _ = rl.load_history(&history_path);

    loop {
        let prompt = "moviedash> ".bold().blue().to_string();
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match handle_command(&mut ctx, line) {
                    CommandResult::Continue => (),
                    CommandResult::Quit => break,
                    CommandResult::Error(e) => {
                        println!("{} {}\n", "Error:".red().bold(), e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use .quit to exit");
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("{} {:?}", "Error:".red().bold(), err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_path);
    println!("Goodbye!");
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Text after the first `skip` words, with inner spacing preserved.
fn rest_of_line(line: &str, skip: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        let current = rest;
        rest = current
            .find(char::is_whitespace)
            .map_or("", |i| current[i..].trim_start());
    }
    rest.trim_end()
}

pub fn handle_command(ctx: &mut ReplContext, line: &str) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,

        ".help" | ".h" => {
            print_help(ctx.settings.top_n);
            CommandResult::Continue
        }

        ".years" => {
            if parts.len() != 3 {
                return CommandResult::Error("Use: .years <from> <to>".to_string());
            }
            if let Err(e) = ctx.session.set_years(parts[1], parts[2]) {
                return CommandResult::Error(e);
            }
            print_summary(&ctx.derive());
            CommandResult::Continue
        }

        ".genre" => {
            let action = parts.get(1).map(|s| s.to_lowercase()).unwrap_or_default();
            let genre = rest_of_line(line, 2);
            let result = match action.as_str() {
                "add" => ctx.session.add_genre(genre),
                "remove" | "rm" => ctx.session.remove_genre(genre),
                "clear" => {
                    ctx.session.clear_genres();
                    Ok(())
                }
                _ => Err("Use: .genre add|remove <genre> or .genre clear".to_string()),
            };
            if let Err(e) = result {
                return CommandResult::Error(e);
            }
            print_summary(&ctx.derive());
            CommandResult::Continue
        }

        ".cert" | ".certificate" => {
            let certificate = rest_of_line(line, 1);
            if certificate.is_empty() {
                return CommandResult::Error("Use: .cert <certificate|All>".to_string());
            }
            let options = ctx.dataset.certificate_options();
            if let Err(e) = ctx.session.set_certificate(certificate, &options) {
                return CommandResult::Error(e);
            }
            print_summary(&ctx.derive());
            CommandResult::Continue
        }

        ".movie" => {
            let name = rest_of_line(line, 1);
            if let Err(e) = ctx.session.select_movie(name) {
                return CommandResult::Error(e);
            }
            let snapshot = ctx.derive();
            if let Some(shown) = fallback_movie(&snapshot, name) {
                println!(
                    "{}",
                    format!("'{name}' is not in the filtered list; showing '{shown}'.")
                        .yellow()
                );
            }
            print_detail(&snapshot.detail);
            println!();
            CommandResult::Continue
        }

        ".reset" => {
            ctx.session.reset();
            print_summary(&ctx.derive());
            CommandResult::Continue
        }

        ".controls" => {
            print_settings(&ctx.session.all_settings());
            println!();
            CommandResult::Continue
        }

        ".options" => {
            let controls = Dashboard::controls(&ctx.dataset, &ctx.settings);
            let shown = match ctx.config.format {
                OutputFormat::Json => print_json(&controls),
                OutputFormat::Table => {
                    print_controls(&controls);
                    Ok(())
                }
            };
            report(shown)
        }

        ".show" => {
            let snapshot = ctx.derive();
            report(print_snapshot(
                &snapshot,
                ctx.settings.top_n,
                ctx.config.format,
            ))
        }

        ".list" => {
            let snapshot = ctx.derive();
            display(ctx.config.format, &snapshot.listing, || {
                print_listing(&snapshot.listing);
            })
        }

        ".top" => {
            let snapshot = ctx.derive();
            display(ctx.config.format, &snapshot.top_rated, || {
                print_top_rated(&snapshot.top_rated);
            })
        }

        ".boxoffice" | ".box" => {
            let snapshot = ctx.derive();
            display(ctx.config.format, &snapshot.top_box_office, || {
                print_box_office(&snapshot.top_box_office);
            })
        }

        ".directors" => {
            let directors = views::director_frequency(&ctx.dataset, ctx.settings.director_limit);
            display(ctx.config.format, &directors, || print_directors(&directors))
        }

        ".leaders" => {
            let snapshot = ctx.derive();
            display(ctx.config.format, &snapshot.genre_leaders, || {
                print_genre_leaders(snapshot.genre_leaders.as_deref());
            })
        }

        ".detail" => {
            let snapshot = ctx.derive();
            display(ctx.config.format, &snapshot.detail, || {
                print_detail(&snapshot.detail);
            })
        }

        ".timing" => {
            if parts.len() < 2 {
                println!("Timing is {}", if ctx.config.timing { "ON" } else { "OFF" });
            } else {
                match parts[1].to_lowercase().as_str() {
                    "on" | "true" | "1" => {
                        ctx.config.timing = true;
                        println!("Timing ON");
                    }
                    "off" | "false" | "0" => {
                        ctx.config.timing = false;
                        println!("Timing OFF");
                    }
                    _ => {
                        return CommandResult::Error("Use: .timing on|off".to_string());
                    }
                }
            }
            println!();
            CommandResult::Continue
        }

        ".format" => {
            if parts.len() < 2 {
                println!("Format is {:?}", ctx.config.format);
            } else {
                match parts[1].to_lowercase().as_str() {
                    "table" => {
                        ctx.config.format = OutputFormat::Table;
                        println!("Format: table");
                    }
                    "json" => {
                        ctx.config.format = OutputFormat::Json;
                        println!("Format: json");
                    }
                    _ => {
                        return CommandResult::Error("Use: .format table|json".to_string());
                    }
                }
            }
            println!();
            CommandResult::Continue
        }

        _ => CommandResult::Error(format!("Unknown command: {cmd}. Type .help for help.")),
    }
}

/// Movie the detail panel fell back to when `requested` is not selectable.
///
/// `None` when the request is shown as asked, or when nothing matches the
/// filter and the panel holds the no-results notice.
pub fn fallback_movie<'a>(snapshot: &'a DashboardSnapshot, requested: &str) -> Option<&'a str> {
    let shown = snapshot.detail.movie()?;
    (shown.name != requested).then_some(shown.name.as_str())
}

fn report(result: Result<()>) -> CommandResult {
    match result {
        Ok(()) => {
            println!();
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn display<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce(),
) -> CommandResult {
    match format {
        OutputFormat::Json => report(print_json(value)),
        OutputFormat::Table => {
            table();
            println!();
            CommandResult::Continue
        }
    }
}
