//! Header artifact emission
//!
//! Renders the final payload into a C/C++ header and writes it to disk.

pub mod header;
pub mod writer;

pub use header::render_header;
pub use writer::write_artifact;
