use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use catdiff_diff::{CatalogDiffer, ComparePolicy, LeafPolicy, TracingObserver};
use catdiff_load::{discover_catalogs, load_catalog, Catalog};
use catdiff_report::{Report, Style};
use colored::Colorize;
use tracing::{info, warn};

use crate::cli::*;
use crate::config::{
    CliConfig, DEFAULT_CANDIDATE, DEFAULT_MESSAGES_DIR, DEFAULT_REFERENCE,
    DEFAULT_REFERENCE_LOCALE,
};

/// Result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every candidate matches its reference.
    Clean,
    /// At least one discrepancy was found.
    Issues,
}

/// Exit status when an issue was found.
pub const EXIT_ISSUES: u8 = 1;
/// Exit status for load, parse, and precondition failures.
pub const EXIT_FATAL: u8 = 2;

/// Process exit status for a finished run.
pub fn exit_code(result: &anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Clean) => 0,
        Ok(Outcome::Issues) => EXIT_ISSUES,
        Err(_) => EXIT_FATAL,
    }
}

pub fn run_command(cli: Cli, out: &mut dyn Write) -> anyhow::Result<Outcome> {
    let config = CliConfig::discover(cli.config.as_deref())?;
    let differ = CatalogDiffer::new(resolve_policy(&cli, &config));
    let style = if cli.no_color || !io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Color
    };

    let reports = match &cli.command {
        Command::Check(args) => vec![cmd_check(args, &config, &differ)?],
        Command::Scan(args) => cmd_scan(args, &config, &differ)?,
    };

    match cli.format {
        OutputFormat::Text => {
            let headers = matches!(cli.command, Command::Scan(_));
            write_text(out, &reports, style, headers)?
        }
        OutputFormat::Json => write_json(out, &reports, matches!(cli.command, Command::Scan(_)))?,
    }

    Ok(if reports.iter().all(Report::is_clean) {
        Outcome::Clean
    } else {
        Outcome::Issues
    })
}

/// Command-line flags override the config file, which overrides defaults.
fn resolve_policy(cli: &Cli, config: &CliConfig) -> ComparePolicy {
    let mut policy = config.policy.clone();
    if cli.strict {
        policy.leaf_policy = LeafPolicy::StrictKinds;
    }
    if let Some(max_depth) = cli.max_depth {
        policy.max_depth = max_depth;
    }
    if let Some(label) = &cli.root_label {
        policy.root_label = label.clone();
    }
    policy
}

fn cmd_check(args: &CheckArgs, config: &CliConfig, differ: &CatalogDiffer) -> anyhow::Result<Report> {
    let reference_path = args
        .reference
        .clone()
        .or_else(|| config.reference.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE));
    let candidate_path = args
        .candidate
        .clone()
        .or_else(|| config.candidate.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CANDIDATE));

    let mut reference = load(&reference_path, "reference")?;
    let mut candidate = load(&candidate_path, "candidate")?;
    if let Some(label) = &args.source_label {
        reference = reference.with_label(label.as_str());
    }
    if let Some(label) = &args.target_label {
        candidate = candidate.with_label(label.as_str());
    }

    compare(differ, &reference, &candidate)
}

fn cmd_scan(args: &ScanArgs, config: &CliConfig, differ: &CatalogDiffer) -> anyhow::Result<Vec<Report>> {
    let dir = args
        .dir
        .clone()
        .or_else(|| config.messages_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MESSAGES_DIR));
    let locale = args
        .reference
        .clone()
        .or_else(|| config.reference_locale.clone())
        .unwrap_or_else(|| DEFAULT_REFERENCE_LOCALE.to_string());

    let paths = discover_catalogs(&dir)
        .with_context(|| format!("failed to scan messages directory {}", dir.display()))?;
    let Some(reference_path) = paths
        .iter()
        .find(|p| catdiff_load::catalog_label(p) == locale)
    else {
        bail!("reference locale {locale} not found in {}", dir.display());
    };
    let reference = load(reference_path, "reference")?;

    let mut reports = Vec::new();
    for path in paths.iter().filter(|p| *p != reference_path) {
        let candidate = load(path, "candidate")?;
        reports.push(compare(differ, &reference, &candidate)?);
    }
    if reports.is_empty() {
        warn!(dir = %dir.display(), "no catalogs to compare besides the reference");
    }
    Ok(reports)
}

fn load(path: &Path, role: &str) -> anyhow::Result<Catalog> {
    load_catalog(path).with_context(|| format!("failed to load {role} catalog {}", path.display()))
}

fn compare(differ: &CatalogDiffer, reference: &Catalog, candidate: &Catalog) -> anyhow::Result<Report> {
    let result = differ
        .compare_with(&reference.root, &candidate.root, &mut TracingObserver)
        .with_context(|| format!("cannot compare {} against {}", candidate.label, reference.label))?;
    info!(
        reference = %reference.label,
        candidate = %candidate.label,
        issues = result.issues(),
        "compared catalogs"
    );
    Ok(Report::new(reference.label.as_str(), candidate.label.as_str(), result))
}

fn write_text(out: &mut dyn Write, reports: &[Report], style: Style, headers: bool) -> anyhow::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if headers {
            if i > 0 {
                writeln!(out)?;
            }
            let title = format!("{} → {}", report.source(), report.target());
            match style {
                Style::Plain => writeln!(out, "== {title} ==")?,
                Style::Color => writeln!(out, "== {} ==", title.bold())?,
            }
        }
        write!(out, "{}", report.render_text(style))?;
    }
    Ok(())
}

/// A single check prints one object; a scan prints an array.
fn write_json(out: &mut dyn Write, reports: &[Report], as_array: bool) -> anyhow::Result<()> {
    let values = reports
        .iter()
        .map(Report::to_json)
        .collect::<Result<Vec<_>, _>>()?;
    let value = if as_array {
        serde_json::Value::Array(values)
    } else {
        values.into_iter().next().unwrap_or_default()
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}
