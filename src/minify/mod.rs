//! Format-aware text compactors for markup, stylesheets and scripts.
//!
//! All three are total functions over text: they never fail and never touch
//! the filesystem. They are heuristics, not parsers, so content that merely
//! looks like a comment or tag inside a quoted value can be altered.

pub mod css;
pub mod html;
pub mod js;

// Re-exports for public API
pub use css::minify_css;
pub use html::minify_html;
pub use js::minify_js;
