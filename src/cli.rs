//! Command line interface

use clap::Parser;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::errors::BuildResult;
use crate::pipeline::BuildReport;
use crate::utils::{DEFAULT_CONSTANT_NAME, DEFAULT_ENTRY, DEFAULT_SOURCE_DIR, format_thousands};

/// webui-embed - compile a web UI into a single firmware header
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "webui-embed", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the main document, stylesheet and script
    #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Header file to write (default: index_html.h next to the source directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Embed everything as-is, without minification
    #[arg(long)]
    pub no_minify: bool,

    /// Name of the generated C array
    #[arg(long, default_value = DEFAULT_CONSTANT_NAME)]
    pub name: String,

    /// Main document inside the source directory
    #[arg(long, default_value = DEFAULT_ENTRY)]
    pub entry: String,

    /// Print the build report as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Turn the parsed arguments into a validated build config
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidConfig` for an invalid `--name` or an
    /// empty `--entry`.
    pub fn to_config(&self) -> BuildResult<BuildConfig> {
        let builder = BuildConfig::builder()
            .source_dir(&self.source)
            .entry(&self.entry)
            .minify(!self.no_minify)
            .constant_name(&self.name);

        match &self.output {
            Some(output) => builder.output_path(output).build(),
            None => builder.build(),
        }
    }
}

/// Human-readable statistics for a finished build
#[must_use]
pub fn render_summary(report: &BuildReport) -> String {
    let mut lines = vec![
        format!("Output:        {}", report.output_path.display()),
        format!(
            "Original size: {} bytes",
            format_thousands(report.original_bytes as i128)
        ),
    ];

    let label = if report.minified { "Minified size" } else { "Payload size " };
    lines.push(format!(
        "{label}: {} bytes",
        format_thousands(report.payload_bytes as i128)
    ));
    lines.push(format!(
        "Saved:         {} bytes ({:.1}%)",
        format_thousands(i128::from(report.saved_bytes)),
        report.saved_percent
    ));
    lines.push(format!(
        "Header size:   {} bytes",
        format_thousands(report.artifact_bytes as i128)
    ));

    if !report.missing.is_empty() {
        lines.push(format!("Not embedded:  {}", report.missing.join(", ")));
    }

    lines.join("\n")
}
