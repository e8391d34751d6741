//! Analyzers that assemble segmenters, filter configuration and adapters.

pub mod analyzer;
pub mod config;
pub mod segment;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use segment::SegmentAnalyzer;
