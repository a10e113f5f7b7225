use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "catdiff",
    about = "Structural consistency checks for localization catalogs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also report kind differences between leaves (e.g. string vs number)
    #[arg(long, global = true)]
    pub strict: bool,

    /// Abort when catalogs nest deeper than this
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Label printed for the root of every path
    #[arg(long, global = true)]
    pub root_label: Option<String>,

    /// Config file (defaults to ./catdiff.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare a candidate catalog against a reference catalog
    Check(CheckArgs),
    /// Compare every locale in a messages directory against the reference locale
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Reference catalog (default: messages/en.json)
    pub reference: Option<PathBuf>,
    /// Candidate catalog (default: messages/pl.json)
    pub candidate: Option<PathBuf>,
    #[arg(long)]
    pub source_label: Option<String>,
    #[arg(long)]
    pub target_label: Option<String>,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Messages directory (default: messages)
    pub dir: Option<PathBuf>,
    /// Locale of the reference catalog (default: en)
    #[arg(short, long)]
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["catdiff", "check", "en.json", "pl.json"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.reference, Some(PathBuf::from("en.json")));
            assert_eq!(args.candidate, Some(PathBuf::from("pl.json")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_check_defaults() {
        let cli = Cli::try_parse_from(["catdiff", "check"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert!(args.reference.is_none());
            assert!(args.candidate.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_check_labels() {
        let cli = Cli::try_parse_from([
            "catdiff", "check", "a.json", "b.json", "--source-label", "EN", "--target-label", "PL",
        ]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.source_label, Some("EN".into()));
            assert_eq!(args.target_label, Some("PL".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_scan() {
        let cli = Cli::try_parse_from(["catdiff", "scan", "locales", "-r", "de"]).unwrap();
        if let Command::Scan(args) = cli.command {
            assert_eq!(args.dir, Some(PathBuf::from("locales")));
            assert_eq!(args.reference, Some("de".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "catdiff", "--strict", "--max-depth", "8", "--no-color", "scan",
        ]).unwrap();
        assert!(cli.strict);
        assert!(cli.no_color);
        assert_eq!(cli.max_depth, Some(8));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["catdiff", "--verbose", "check"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["catdiff", "check", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["catdiff", "-c", "ci/catdiff.toml", "check"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci/catdiff.toml")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["catdiff", "--format", "yaml", "check"]).is_err());
    }
}
