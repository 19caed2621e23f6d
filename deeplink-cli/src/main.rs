//! Deeplink CLI entry point: scanned payload -> classify -> next payment step.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use is_terminal::IsTerminal;
use serde::Serialize;
use tracing::info;

use deeplink_core::{
    display_target, AgentError, Classifier, ClassifierConfig, OutputMode, QrCodeData,
    ScanAction, ScanSession,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Auto,
    Json,
    Human,
}

#[derive(Debug, Parser)]
#[command(name = "deeplink", version)]
#[command(about = "Classify scanned QR payloads: web links, EIP-681 transfers, EVM/Solana/Stellar addresses")]
struct Cli {
    /// Output format: auto (tty=human, pipe=agent), json (agent), human (operator).
    #[arg(long, value_enum, default_value = "auto", global = true)]
    output: OutputFormat,

    /// TOML file with `default_chain_id` and `default_token`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chain assumed when a payload does not name one.
    #[arg(long, global = true)]
    default_chain_id: Option<u64>,

    /// Token contract assumed for bare EVM addresses.
    #[arg(long, global = true)]
    default_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify each payload given on the command line.
    Classify {
        #[arg(required = true)]
        payloads: Vec<String>,
    },
    /// Read decoded payloads from stdin as one scanner session; only the first is used.
    Scan,
}

#[derive(Debug, Serialize)]
struct Classified<'a> {
    payload: &'a str,
    result: &'a QrCodeData,
    action: ScanAction,
}

#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    result: &'a QrCodeData,
    action: ScanAction,
    ignored: usize,
}

/// Detect output mode based on CLI flags and TTY detection.
fn detect_output_mode(output: OutputFormat) -> OutputMode {
    match output {
        OutputFormat::Human => OutputMode::Human,
        OutputFormat::Json => OutputMode::Agent,
        OutputFormat::Auto => {
            if std::io::stdout().is_terminal() {
                OutputMode::Human
            } else {
                OutputMode::Agent
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<ClassifierConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {:?}", path))?;
            ClassifierConfig::from_toml_str(&text)
                .with_context(|| format!("invalid config file: {:?}", path))?
        }
        None => ClassifierConfig::default(),
    };

    if let Some(chain_id) = cli.default_chain_id {
        config.default_chain_id = chain_id;
    }
    if let Some(token) = &cli.default_token {
        config.default_token = token.clone();
    }

    config.validated().context("invalid classifier defaults")
}

fn human_header(title: &str) {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════════════════════╗".bright_white()
    );
    println!("{}", format!("║  {:<61}║", title).bright_white());
    println!(
        "{}",
        "╚═══════════════════════════════════════════════════════════════╝".bright_white()
    );
    println!();
}

fn describe_action(action: &ScanAction) -> String {
    match action {
        ScanAction::OpenWebsite { .. } => format!("{}", "Open link".cyan()),
        ScanAction::Pay(request) => match &request.to_units {
            Some(units) => format!("{} {} units", "Pay".green(), units),
            None => format!("{} (enter amount)", "Pay".green()),
        },
        ScanAction::Notice { .. } => format!("{}", "Notice".yellow()),
        ScanAction::Unrecognized => format!("{}", "Unrecognized".red()),
    }
}

fn render_results_table(rows: &[Classified<'_>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Chain").add_attribute(Attribute::Bold),
        Cell::new("Next step").add_attribute(Attribute::Bold),
        Cell::new("Message").add_attribute(Attribute::Bold),
    ]);

    for (i, row) in rows.iter().enumerate() {
        let chain = row
            .result
            .transfer
            .as_ref()
            .and_then(|t| t.chain_id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(row.result.kind.as_str()),
            Cell::new(display_target(row.result)),
            Cell::new(chain),
            Cell::new(describe_action(&row.action)),
            Cell::new(row.result.message.as_deref().unwrap_or("")),
        ]);
    }

    table
}

fn emit_agent_error(err: AgentError) -> Result<()> {
    let json = serde_json::to_string(&err).context("failed to serialize agent error")?;
    eprintln!("{json}");
    Ok(())
}

fn fail(mode: OutputMode, error: &str, code: i32, err: &anyhow::Error) -> Result<()> {
    match mode {
        OutputMode::Human => {
            eprintln!("{} {:#}", "✗".red(), err);
        }
        OutputMode::Agent => {
            let details = err.chain().map(|cause| cause.to_string()).collect();
            emit_agent_error(AgentError {
                error: error.to_string(),
                code,
                details: Some(details),
            })?;
        }
    }
    std::process::exit(code);
}

fn run_classify(mode: OutputMode, classifier: &Classifier, payloads: &[String]) -> Result<()> {
    let results: Vec<QrCodeData> = payloads.iter().map(|p| classifier.classify(p)).collect();
    let rows: Vec<Classified<'_>> = payloads
        .iter()
        .zip(&results)
        .map(|(payload, result)| Classified {
            payload,
            result,
            action: ScanAction::from(result),
        })
        .collect();

    match mode {
        OutputMode::Human => {
            human_header("DEEPLINK — Classification");
            println!("{}", render_results_table(&rows));
        }
        OutputMode::Agent => {
            let json = serde_json::to_string(&rows).context("failed to serialize results")?;
            print!("{json}");
        }
    }

    Ok(())
}

fn run_scan(mode: OutputMode, classifier: Classifier) -> Result<()> {
    let mut session = ScanSession::with_classifier(classifier);

    let stdin = io::stdin();
    // Decoders can hand over arbitrary bytes; lines are decoded lossily.
    for line in stdin.lock().split(b'\n') {
        let line = match line.context("failed to read stdin") {
            Ok(line) => line,
            Err(err) => return fail(mode, "stdin_unreadable", 1, &err),
        };
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.is_empty() {
            continue;
        }
        session.offer(&String::from_utf8_lossy(line));
    }

    let Some(result) = session.result() else {
        let err = anyhow::anyhow!("no payload was read from stdin");
        return fail(mode, "no_payload", 1, &err);
    };
    info!(ignored = session.ignored(), kind = result.kind.as_str(), "scan session closed");

    let report = ScanReport {
        result,
        action: ScanAction::from(result),
        ignored: session.ignored(),
    };

    match mode {
        OutputMode::Human => {
            human_header("DEEPLINK — Scan");
            println!(
                "{} {}",
                "Type:".bright_white().bold(),
                report.result.kind.as_str()
            );
            println!(
                "{} {}",
                "Target:".bright_white().bold(),
                display_target(report.result)
            );
            println!(
                "{} {}",
                "Next step:".bright_white().bold(),
                describe_action(&report.action)
            );
            if let Some(message) = &report.result.message {
                println!("{}", message.yellow());
            }
            if report.ignored > 0 {
                println!();
                println!(
                    "{}",
                    format!("Ignored {} additional payload(s).", report.ignored).bright_black()
                );
            }
        }
        OutputMode::Agent => {
            let json = serde_json::to_string(&report).context("failed to serialize scan report")?;
            print!("{json}");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mode = detect_output_mode(cli.output);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => return fail(mode, "invalid_config", 2, &err),
    };
    info!(
        chain_id = config.default_chain_id,
        token = %config.default_token,
        "classifier defaults loaded"
    );
    let classifier = Classifier::new(config);

    match &cli.command {
        Command::Classify { payloads } => run_classify(mode, &classifier, payloads),
        Command::Scan => run_scan(mode, classifier),
    }
}
