//! Command implementations for the segstream CLI.

use std::fs;
use std::io;
use std::time::Instant;

use log::{debug, info};

use crate::analysis::analyzer::AnalyzerConfig;
use crate::analysis::segmenter::SegmenterKind;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: SegstreamArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Segmenters => list_segmenters(&args),
    }
}

/// Analyze text and print the accepted tokens.
fn analyze(args: &AnalyzeArgs, cli_args: &SegstreamArgs) -> Result<()> {
    let config = build_config(args)?;
    let text = read_input(args)?;
    let result = analyze_text(&config, &text)?;

    output_result(
        &format!("Analyzed {} bytes", text.len()),
        &result,
        cli_args,
    )
}

/// List the built-in segmentation strategies.
fn list_segmenters(cli_args: &SegstreamArgs) -> Result<()> {
    let list = SegmenterList {
        segmenters: SegmenterKind::AVAILABLE
            .iter()
            .map(|(name, description)| SegmenterInfo {
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect(),
    };
    output_result("Available segmenters", &list, cli_args)
}

/// Merge the configuration file (if any) with command line overrides.
pub fn build_config(args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading analyzer configuration from {}", path.display());
            AnalyzerConfig::from_path(path)?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(segmenter) = &args.segmenter {
        config.segmenter = segmenter.clone();
    }
    if args.stem {
        config.stem_english = true;
    }
    config.exclusions.extend(args.exclude.iter().cloned());
    if let Some(path) = &args.stop_words {
        config.stop_words_path = Some(path.clone());
    }
    if args.no_default_stop_words {
        config.default_stop_words = false;
    }
    if args.no_lowercase {
        config.lowercase = false;
    }

    debug!("effective analyzer configuration: {config:?}");
    Ok(config)
}

/// Read the text to analyze from the argument, a file, or stdin.
fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        info!("Reading text from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }
    Ok(io::read_to_string(io::stdin())?)
}

/// Run the analyzer described by `config` over `text`.
pub fn analyze_text(config: &AnalyzerConfig, text: &str) -> Result<AnalysisResult> {
    let start = Instant::now();
    let analyzer = config.build()?;

    let (tokens, final_position_increment) = analyzer.analyze_all(text)?;

    Ok(AnalysisResult {
        segmenter: analyzer.segmenter_kind().to_string(),
        stem_english: analyzer.config().stems_english(),
        tokens,
        final_position_increment,
        duration_us: start.elapsed().as_micros() as u64,
    })
}
