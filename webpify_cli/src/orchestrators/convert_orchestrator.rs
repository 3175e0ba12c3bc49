//! Convert command orchestrator
//!
//! Checks the input path, discovers files, sniffs each one and converts the
//! supported images, collecting a status line for every decision.

use crate::error::CliError;
use crate::output::StatusLine;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use webpify_core::{Converter, DecoderRegistry, find_files, webp_output_path};

/// Options for a conversion run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Overwrite existing WebP outputs
    pub force: bool,
    /// Append the summary line
    pub summary: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            force: false,
            summary: true,
        }
    }
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    /// Outputs left alone because they already existed
    pub skipped: usize,
    /// Files whose content is not a supported image
    pub unsupported: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.unsupported + self.failed
    }
}

/// Everything a run produced
#[derive(Debug, Default)]
pub struct RunReport {
    pub messages: Vec<StatusLine>,
    pub summary: RunSummary,
    /// Critical error that ended the run early
    pub error: Option<CliError>,
}

impl RunReport {
    pub fn exit_code(&self) -> i32 {
        self.error.as_ref().map_or(0, |e| e.exit_code().code())
    }

    fn info(&mut self, text: impl Into<String>) {
        self.messages.push(StatusLine::info(text));
    }

    fn error(&mut self, text: impl Into<String>) {
        self.messages.push(StatusLine::error(text));
    }
}

/// Orchestrator for the convert run
pub struct ConvertOrchestrator<'a> {
    registry: &'a DecoderRegistry,
    converter: Converter<'a>,
}

impl<'a> ConvertOrchestrator<'a> {
    pub fn new(registry: &'a DecoderRegistry) -> Self {
        Self {
            registry,
            converter: Converter::new(registry),
        }
    }

    /// Process every file under `path`
    ///
    /// Per-file failures are reported as status lines and never end the run.
    pub fn run(&self, path: &Path, options: RunOptions) -> RunReport {
        let mut report = RunReport::default();

        if let Err(e) = fs::metadata(path) {
            report.error = Some(if e.kind() == io::ErrorKind::NotFound {
                CliError::path_not_found(path)
            } else {
                CliError::path_check_failed(path, e)
            });
            return report;
        }

        report.info(format!("Input path: {}", path.display()));
        report.info(format!("Force overwrite: {}", options.force));

        let files = match find_files(path) {
            Ok(files) => files,
            Err(e) => {
                report.error = Some(CliError::discovery(e));
                return report;
            }
        };

        if files.is_empty() {
            report.info("No processable files found.");
        } else {
            debug!("Discovered {} file(s)", files.len());
            report.info("Processing files...");
            for file in &files {
                self.process_file(file, options.force, &mut report);
            }
        }

        if options.summary {
            let summary = report.summary;
            report.info(format!(
                "Summary: {} converted, {} skipped, {} failed",
                summary.converted,
                summary.skipped + summary.unsupported,
                summary.failed
            ));
        }
        report
    }

    fn process_file(&self, file: &Path, force: bool, report: &mut RunReport) {
        let sniffed = match self.registry.sniff_file(file) {
            Ok(sniffed) => sniffed,
            Err(e) => {
                report.error(format!(
                    "Error reading file {} for content type detection: {e}. Skipping.",
                    file.display()
                ));
                report.summary.failed += 1;
                return;
            }
        };

        let mime = sniffed.mime_type();
        report.info(format!(
            "File: {}, Detected MIME type: {mime}",
            file.display()
        ));

        if !sniffed.is_supported() {
            report.info(format!(
                "Skipping file {} (detected MIME type: {mime}, not a supported image format).",
                file.display()
            ));
            report.summary.unsupported += 1;
            return;
        }

        let output = webp_output_path(file);
        match self.converter.convert(file, &output, force) {
            Ok(()) => {
                report.info(format!(
                    "Successfully converted {} (MIME: {mime}) to {}",
                    file.display(),
                    output.display()
                ));
                report.summary.converted += 1;
            }
            Err(e) if e.is_skip() => {
                report.info(format!(
                    "Skipping conversion (file exists, based on content type): {}",
                    output.display()
                ));
                report.summary.skipped += 1;
            }
            Err(e) => {
                report.error(format!(
                    "Failed to convert {} (MIME: {mime}): {e}",
                    file.display()
                ));
                report.summary.failed += 1;
            }
        }
    }
}
