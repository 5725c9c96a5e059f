//! AXIOM - structural analysis CLI
//!
//! The `axiom` command detects structural roles in system descriptions and
//! reports how structurally complete each description is.
//!
//! ## Commands
//!
//! - `interactive`: prompt loop (default); type `quit` to exit
//! - `analyze`: analyze a single description
//! - `demo`: analyze the built-in sample descriptions
//! - `roles`: list roles, glyphs, weights and keyword counts

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use axiom_core::{
    CompletenessReport, Role, RoleEvidence, StructuralAnalyzer, SAMPLE_DESCRIPTIONS,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, Level};

const RULE_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "axiom")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AXIOM structural role detection and completeness scoring", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Keyword lexicon JSON file (default: built-in lexicon)
    #[arg(long, global = true, env = "AXIOM_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Core-role weights JSON file (default: built-in weights)
    #[arg(long, global = true, env = "AXIOM_WEIGHTS")]
    weights: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read descriptions from stdin until 'quit' or end of input
    Interactive,

    /// Analyze a single description
    Analyze {
        /// The system description to analyze
        text: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show which keyword triggered each role
        #[arg(long)]
        explain: bool,
    },

    /// Analyze the built-in sample descriptions
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every role with its glyph, core weight and keyword count
    Roles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Machine-readable analysis result.
#[derive(Debug, Serialize)]
struct AnalysisOutput<'a> {
    text: &'a str,
    lexicon_digest: &'a str,
    report: CompletenessReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    evidence: Option<Vec<RoleEvidence>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    axiom_core::init_tracing(cli.json, level);

    let analyzer = load_analyzer(&cli)?;
    info!(version = axiom_core::VERSION, "analyzer ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            run_interactive(&analyzer, stdin.lock(), &mut out)
        }
        Commands::Analyze {
            text,
            format,
            explain,
        } => cmd_analyze(&analyzer, &text, format, explain, &mut out),
        Commands::Demo { format } => cmd_demo(&analyzer, format, &mut out),
        Commands::Roles => cmd_roles(&analyzer, &mut out),
    }
}

/// Build the analyzer from `--lexicon` / `--weights`, or the built-ins.
fn load_analyzer(cli: &Cli) -> Result<StructuralAnalyzer> {
    StructuralAnalyzer::from_config_files(cli.lexicon.as_deref(), cli.weights.as_deref())
        .context("Failed to load analyzer configuration")
}

/// Prompt loop. Ends on `quit` or end of input.
///
/// The sentinel is matched case-insensitively after trimming surrounding
/// whitespace, so a stray space typed before or after `quit` still exits
/// instead of being analyzed as a description.
fn run_interactive<R: BufRead, W: Write>(
    analyzer: &StructuralAnalyzer,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "AXIOM Structural Analysis")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let mut line = String::new();
    loop {
        write!(out, "\nEnter system description (or 'quit'): ")?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if is_quit(text) {
            break;
        }

        let report = analyzer.analyze(text);
        writeln!(out)?;
        render_report(&report, out)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    }
    Ok(())
}

fn is_quit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("quit")
}

fn cmd_analyze<W: Write>(
    analyzer: &StructuralAnalyzer,
    text: &str,
    format: OutputFormat,
    explain: bool,
    out: &mut W,
) -> Result<()> {
    let report = analyzer.analyze(text);
    let evidence = explain.then(|| analyzer.detector().explain(text));

    match format {
        OutputFormat::Json => {
            let digest = analyzer.detector().lexicon().digest()?;
            let output = AnalysisOutput {
                text,
                lexicon_digest: &digest,
                report,
                evidence,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text => {
            render_report(&report, out)?;
            if let Some(evidence) = evidence {
                render_evidence(&evidence, out)?;
            }
        }
    }
    Ok(())
}

fn cmd_demo<W: Write>(
    analyzer: &StructuralAnalyzer,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let digest = analyzer.detector().lexicon().digest()?;
            let outputs: Vec<AnalysisOutput<'_>> = SAMPLE_DESCRIPTIONS
                .iter()
                .map(|&text| AnalysisOutput {
                    text,
                    lexicon_digest: &digest,
                    report: analyzer.analyze(text),
                    evidence: None,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&outputs)?)?;
        }
        OutputFormat::Text => {
            for (i, text) in SAMPLE_DESCRIPTIONS.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, text)?;
                render_report(&analyzer.analyze(text), out)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn cmd_roles<W: Write>(analyzer: &StructuralAnalyzer, out: &mut W) -> Result<()> {
    let weights = analyzer.scorer().weights();
    let lexicon = analyzer.detector().lexicon();

    writeln!(out, "{:<5} {:<16} {:>7} {:>9}", "GLYPH", "ROLE", "WEIGHT", "KEYWORDS")?;
    for role in Role::ALL {
        let weight = weights
            .weight_of(role)
            .map(|w| format!("{w:.1}"))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<5} {:<16} {:>7} {:>9}",
            role.glyph(),
            role.name(),
            weight,
            lexicon.keywords_for(role).len()
        )?;
    }
    Ok(())
}

fn render_report<W: Write>(report: &CompletenessReport, out: &mut W) -> Result<()> {
    writeln!(out, "Symbols: {}", report.glyphs())?;
    writeln!(out, "Score:   {}", report.score)?;
    if report.is_complete() {
        writeln!(out, "Structurally complete")?;
    } else {
        writeln!(out, "Missing: {}", join_roles(report.missing_core_roles.iter()))?;
    }
    Ok(())
}

fn render_evidence<W: Write>(evidence: &[RoleEvidence], out: &mut W) -> Result<()> {
    for e in evidence {
        writeln!(
            out,
            "  {} {:<16} {:?} via {:?} ({:?})",
            e.role.glyph(),
            e.role.name(),
            e.surface,
            e.keyword,
            e.tier
        )?;
    }
    Ok(())
}

fn join_roles<'a>(roles: impl Iterator<Item = &'a Role>) -> String {
    roles.map(|r| r.name()).collect::<Vec<_>>().join(", ")
}
