//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, SegstreamArgs};
use crate::error::Result;

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub segmenter: String,
    pub stem_english: bool,
    pub tokens: Vec<Token>,
    /// Raw terms rejected after the last accepted token.
    pub final_position_increment: usize,
    pub duration_us: u64,
}

/// One built-in segmentation strategy.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmenterInfo {
    pub name: String,
    pub description: String,
}

/// Result structure for the segmenter listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmenterList {
    pub segmenters: Vec<SegmenterInfo>,
}

/// A command result that knows how to render itself for people and CSV.
pub trait Report: Serialize {
    /// Write the human-readable rendering.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;

    /// Header and rows for CSV output.
    fn csv_rows(&self) -> (Vec<&'static str>, Vec<Vec<String>>);
}

impl Report for AnalysisResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Tokens (segmenter: {}, stemming: {}):",
            self.segmenter,
            if self.stem_english { "on" } else { "off" }
        )?;
        writeln!(out, "══════")?;

        if self.tokens.is_empty() {
            writeln!(out, "  (no tokens)")?;
        } else {
            writeln!(
                out,
                "{:>5} {:>4} {:>13}  {:<11} text",
                "pos", "inc", "offsets", "type"
            )?;
            for token in &self.tokens {
                let offsets = format!("{}..{}", token.start_offset, token.end_offset);
                let token_type = serde_json::to_value(token.token_type)?;
                writeln!(
                    out,
                    "{:>5} {:>4} {:>13}  {:<11} {}",
                    token.position,
                    token.position_increment,
                    offsets,
                    token_type.as_str().unwrap_or("other"),
                    token.text
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Total tokens: {}", self.tokens.len())?;
        if self.final_position_increment > 0 {
            writeln!(
                out,
                "Trailing rejected terms: {}",
                self.final_position_increment
            )?;
        }
        writeln!(out, "Analysis time: {}µs", self.duration_us)?;
        Ok(())
    }

    fn csv_rows(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let header = vec![
            "position",
            "position_increment",
            "start_offset",
            "end_offset",
            "token_type",
            "text",
        ];
        let rows = self
            .tokens
            .iter()
            .map(|token| {
                let token_type = serde_json::to_value(token.token_type)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default();
                vec![
                    token.position.to_string(),
                    token.position_increment.to_string(),
                    token.start_offset.to_string(),
                    token.end_offset.to_string(),
                    token_type,
                    token.text.clone(),
                ]
            })
            .collect();
        (header, rows)
    }
}

impl Report for SegmenterList {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Segmenters:")?;
        writeln!(out, "═══════════")?;
        let width = self
            .segmenters
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0);
        for segmenter in &self.segmenters {
            writeln!(
                out,
                "  {:<width$}  {}",
                segmenter.name, segmenter.description
            )?;
        }
        Ok(())
    }

    fn csv_rows(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let rows = self
            .segmenters
            .iter()
            .map(|s| vec![s.name.clone(), s.description.clone()])
            .collect();
        (vec!["name", "description"], rows)
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Report>(message: &str, result: &T, args: &SegstreamArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result in the specified format to `out`.
pub fn write_result<T: Report>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &SegstreamArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)
        }
        OutputFormat::Json => write_json(out, result, args.pretty),
        OutputFormat::Csv => write_csv(out, result),
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

fn write_csv<T: Report>(out: &mut dyn Write, result: &T) -> Result<()> {
    let (header, rows) = result.csv_rows();
    writeln!(out, "{}", header.join(","))?;
    for row in rows {
        let values: Vec<String> = row.iter().map(|v| format_csv_value(v)).collect();
        writeln!(out, "{}", values.join(","))?;
    }
    Ok(())
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn format_csv_value(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
