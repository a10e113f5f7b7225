use catdiff_diff::{ComparisonResult, Discrepancy};
use catdiff_types::{ComparisonPath, NodeKind};
use colored::{Color, Colorize};
use serde::Serialize;

use crate::error::{ReportError, ReportResult};

/// How text output is decorated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    /// ANSI colors on the line prefixes.
    Color,
}

/// One line of a text report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportLine {
    Missing { path: ComparisonPath, keys: Vec<String> },
    Extra { path: ComparisonPath, keys: Vec<String> },
    TypeMismatch {
        path: ComparisonPath,
        reference: NodeKind,
        candidate: NodeKind,
    },
    Success,
    Found(usize),
}

/// The outcome of comparing a target catalog against a source catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    source: String,
    target: String,
    result: ComparisonResult,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    target: &'a str,
    issues: usize,
    clean: bool,
    discrepancies: &'a [Discrepancy],
}

impl Report {
    /// `source` labels the reference catalog, `target` the candidate.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        result: ComparisonResult,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            result,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn result(&self) -> &ComparisonResult {
        &self.result
    }

    pub fn is_clean(&self) -> bool {
        self.result.is_clean()
    }

    /// Report lines, summary last.
    ///
    /// Consecutive missing (or extra) keys at the same path collapse into
    /// one line. The differ emits each group contiguously, so this yields
    /// one line per path and kind.
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines: Vec<ReportLine> = Vec::new();
        for discrepancy in &self.result {
            match discrepancy {
                Discrepancy::MissingKey { path, key } => match lines.last_mut() {
                    Some(ReportLine::Missing { path: last, keys }) if last == path => {
                        keys.push(key.clone());
                    }
                    _ => lines.push(ReportLine::Missing {
                        path: path.clone(),
                        keys: vec![key.clone()],
                    }),
                },
                Discrepancy::ExtraKey { path, key } => match lines.last_mut() {
                    Some(ReportLine::Extra { path: last, keys }) if last == path => {
                        keys.push(key.clone());
                    }
                    _ => lines.push(ReportLine::Extra {
                        path: path.clone(),
                        keys: vec![key.clone()],
                    }),
                },
                Discrepancy::TypeMismatch {
                    path,
                    reference,
                    candidate,
                } => lines.push(ReportLine::TypeMismatch {
                    path: path.clone(),
                    reference: *reference,
                    candidate: *candidate,
                }),
            }
        }

        lines.push(if self.result.is_clean() {
            ReportLine::Success
        } else {
            ReportLine::Found(self.result.issues())
        });
        lines
    }

    /// Render one line without a trailing newline.
    pub fn render_line(&self, line: &ReportLine, style: Style) -> String {
        match line {
            ReportLine::Missing { path, keys } => format!(
                "{} in {} at [{}]: {}",
                paint("MISSING", Color::Red, style),
                self.target,
                path,
                keys.join(", ")
            ),
            ReportLine::Extra { path, keys } => format!(
                "{} in {} at [{}]: {}",
                paint("EXTRA", Color::Yellow, style),
                self.target,
                path,
                keys.join(", ")
            ),
            ReportLine::TypeMismatch {
                path,
                reference,
                candidate,
            } => format!(
                "{} at [{}]: {}={} {}={}",
                paint("TYPE MISMATCH", Color::Magenta, style),
                path,
                self.source,
                reference,
                self.target,
                candidate
            ),
            ReportLine::Success => paint(
                &format!(
                    "SUCCESS: {} structure matches {} exactly.",
                    self.target, self.source
                ),
                Color::Green,
                style,
            ),
            ReportLine::Found(n) => paint(&format!("FOUND {n} issue(s)."), Color::Red, style),
        }
    }

    /// The whole report as newline-terminated text.
    pub fn render_text(&self, style: Style) -> String {
        self.lines()
            .iter()
            .map(|line| self.render_line(line, style) + "\n")
            .collect()
    }

    /// The report as a JSON object.
    pub fn to_json(&self) -> ReportResult<serde_json::Value> {
        serde_json::to_value(JsonReport {
            source: &self.source,
            target: &self.target,
            issues: self.result.issues(),
            clean: self.result.is_clean(),
            discrepancies: self.result.discrepancies(),
        })
        .map_err(|e| ReportError::Serialization(e.to_string()))
    }
}

fn paint(text: &str, color: Color, style: Style) -> String {
    match style {
        Style::Plain => text.to_string(),
        Style::Color => text.color(color).bold().to_string(),
    }
}
