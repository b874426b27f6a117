pub mod artifact;
pub mod cli;
pub mod config;
pub mod errors;
pub mod inliner;
pub mod minify;
pub mod pipeline;
pub mod utils;

pub use artifact::{render_header, write_artifact};
pub use config::BuildConfig;
pub use errors::{BuildError, BuildResult};
pub use inliner::{InliningResult, ResolutionState, ResourceReference, inline_resources};
pub use minify::{minify_css, minify_html, minify_js};
pub use pipeline::{BuildOutput, BuildReport, Dialect, Pipeline, escape_raw_literal};

/// Build the header for `config` and write it to disk
///
/// Missing stylesheets or scripts are logged and listed in the report's
/// `missing` field; they do not fail the build.
///
/// # Errors
///
/// Returns `BuildError::MissingMainInput` if the main document does not exist
/// and `BuildError::Io` on any read or write failure.
pub fn build(config: &BuildConfig) -> BuildResult<BuildReport> {
    let output = Pipeline::new(config).run()?;
    for warning in output.inlining.warnings() {
        log::debug!("{warning}");
    }

    let built_at = chrono::Local::now().naive_local();
    let header = render_header(&output.payload, config.constant_name(), built_at);
    write_artifact(config.output_path(), &header)?;
    log::info!("Generated: {}", config.output_path().display());

    Ok(BuildReport::new(config, &output, header.len()))
}
