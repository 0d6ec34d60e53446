//! # treasure-chest
//!
//! Command-line front end for a single chest. Actions come from the command
//! line or, when none are given, one per line from stdin.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use treasure_chest::{
    ChestAction, ChestSession, ChestState, LockType, LootQuality, Material, Outcome,
    ParseLabelError, TreasureChest,
};

#[derive(Parser, Debug)]
#[command(name = "treasure-chest")]
#[command(version, about = "Open, close, lock and unlock a treasure chest", long_about = None)]
struct Cli {
    /// Chest material (Oak, RichMahogany, Iron)
    #[arg(short, long)]
    material: Option<Material>,

    /// Lock difficulty (Novice, Intermediate, Expert)
    #[arg(short, long)]
    lock_type: Option<LockType>,

    /// Loot rarity (Grey, Green, Purple)
    #[arg(short = 'q', long)]
    loot_quality: Option<LootQuality>,

    /// Initial state (Open, Closed, Locked)
    #[arg(short, long)]
    state: Option<ChestState>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Actions to apply in order; read from stdin when omitted
    actions: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn chest(&self) -> TreasureChest {
        let mut builder = TreasureChest::builder();
        if let Some(material) = self.material {
            builder = builder.material(material);
        }
        if let Some(lock_type) = self.lock_type {
            builder = builder.lock_type(lock_type);
        }
        if let Some(loot_quality) = self.loot_quality {
            builder = builder.loot_quality(loot_quality);
        }
        if let Some(state) = self.state {
            builder = builder.state(state);
        }
        builder.build()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut session = ChestSession::new(cli.chest());
    let mut out = io::stdout().lock();

    if cli.format == OutputFormat::Text {
        writeln!(out, "{}\n", session.chest().describe())?;
    }

    if cli.actions.is_empty() {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        run_lines(&mut session, stdin.lock(), cli.format, &mut out, interactive)?;
    } else {
        for input in &cli.actions {
            handle(&mut session, input, cli.format, &mut out)?;
        }
    }

    finish(&session, cli.format, &mut out)
}

/// Apply one action per line until a blank line, `quit` or end of input.
fn run_lines(
    session: &mut ChestSession,
    input: impl BufRead,
    format: OutputFormat,
    out: &mut impl Write,
    interactive: bool,
) -> Result<()> {
    if interactive {
        prompt(out)?;
    }
    for line in input.lines() {
        let line = line.context("failed to read action from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("quit") {
            break;
        }
        handle(session, line, format, out)?;
        if interactive {
            prompt(out)?;
        }
    }
    Ok(())
}

/// Apply one line of user input and print what happened.
fn handle(
    session: &mut ChestSession,
    input: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match session.apply_input(input) {
        Ok(outcome) => print_outcome(&outcome, format, out),
        Err(err) => print_invalid(&err, format, out),
    }
}

fn print_outcome(outcome: &Outcome, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{outcome}")?,
        OutputFormat::Json => {
            let line = serde_json::to_string(outcome).context("failed to serialize outcome")?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn print_invalid(err: &ParseLabelError, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Invalid input, please enter a valid selection ({err})")?
        }
        OutputFormat::Json => {
            let line = json!({
                "error": "invalid_input",
                "input": err.input(),
                "kind": err.kind(),
                "expected": err.expected(),
            });
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Final state: the description in text mode, a one-line report in JSON.
fn finish(session: &ChestSession, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "\n{}", session.chest().describe())?,
        OutputFormat::Json => {
            let report = serde_json::to_string(&session.report())
                .context("failed to serialize session report")?;
            writeln!(out, "{report}")?;
        }
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(
        out,
        "Choose an action ({}), or press enter to quit: ",
        ChestAction::NAMES.join(", ")
    )?;
    out.flush()?;
    Ok(())
}

/// `RUST_LOG` takes precedence; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Cursor;

    fn run(input: &str, format: OutputFormat) -> (ChestSession, String) {
        let mut session = ChestSession::default();
        let mut out = Vec::new();
        run_lines(&mut session, Cursor::new(input), format, &mut out, false).unwrap();
        finish(&session, format, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = run("unlock\nquit\nopen\n", OutputFormat::Text);
        assert_eq!(session.state(), ChestState::Closed);
    }

    #[test]
    fn blank_line_stops_reading() {
        let (session, _) = run("unlock\n   \nopen\n", OutputFormat::Text);
        assert_eq!(session.state(), ChestState::Closed);
    }

    #[test]
    fn end_of_input_stops_reading() {
        let (session, output) = run("unlock\nopen", OutputFormat::Text);
        assert_eq!(session.state(), ChestState::Open);
        assert!(output.starts_with("The chest is now unlocked.\nThe chest is now open.\n"));
        assert!(output.ends_with(&format!("\n{}\n", session.chest().describe())));
    }

    #[test]
    fn text_mode_reports_invalid_input() {
        let (session, output) = run("smash\nunlock\n", OutputFormat::Text);
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("Invalid input, please enter a valid selection ("));
        assert!(first.contains("'smash'"));
        assert_eq!(session.state(), ChestState::Closed);
        assert_eq!(session.no_op_count(), 0);
    }

    #[test]
    fn json_mode_emits_only_json_lines() {
        let (_, output) = run("smash\nopen\nunlock\n", OutputFormat::Json);
        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["error"], "invalid_input");
        assert_eq!(lines[0]["input"], "smash");
        assert_eq!(lines[0]["kind"], "ChestAction");
        assert_eq!(lines[0]["expected"].as_array().unwrap().len(), 4);
        assert_eq!(lines[1]["no_op"], "LockedShut");
        assert_eq!(lines[2]["to"], "Closed");
        assert_eq!(lines[3]["chest"]["state"], "Closed");
        assert_eq!(lines[3]["no_ops"], 1);
    }

    #[test]
    fn interactive_mode_prompts_before_each_action() {
        let mut session = ChestSession::default();
        let mut out = Vec::new();
        run_lines(&mut session, Cursor::new("unlock\n"), OutputFormat::Text, &mut out, true)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Choose an action (").count(), 2);
        assert!(output.contains("The chest is now unlocked."));
    }
}
