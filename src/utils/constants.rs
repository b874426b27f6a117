//! Shared configuration constants for webui-embed
//!
//! This module contains default values and fixed strings used throughout the
//! codebase to keep the CLI, the config builder and the header renderer in
//! agreement.

/// Default asset directory, relative to the working directory
pub const DEFAULT_SOURCE_DIR: &str = "data";

/// Default main markup document inside the asset directory
pub const DEFAULT_ENTRY: &str = "index.html";

/// Default name of the generated C array
///
/// Firmware code refers to the page by this symbol, so changing it is a
/// breaking change for every consumer of the header.
pub const DEFAULT_CONSTANT_NAME: &str = "index_html";

/// Default header file name, written next to the asset directory
pub const DEFAULT_HEADER_FILE: &str = "index_html.h";

/// Title line in the generated header banner
pub const HEADER_TITLE: &str = "Web Interface";

/// Rebuild hint in the generated header banner
pub const REBUILD_HINT: &str = "Edit the web sources then rebuild with webui-embed";

/// `chrono` format of the build timestamp in the header banner
pub const BUILD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
