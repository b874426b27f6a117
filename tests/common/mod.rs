//! Test utilities and helper functions for the webui-embed test suite

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use webui_embed::BuildConfig;

/// A typical device page: markup, stylesheet and script with comments,
/// indentation and a URL inside a string
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <!-- device status page -->
    <title>Camera</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <h1>Camera   settings</h1>
    <div id="status">   </div>
    <script src="app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = "/* layout */
body {
    margin: 0;
    font-family: sans-serif;
}

#status > span + span {
    color: #333;
}
";

pub const APP_JS: &str = r#"// entry point
const API = "http://camera.local/api";

/* fetch the
   current status */
async function refresh() {
    const res = await fetch(API + "/status"); // poll
    if (!res.ok) {
        throw new Error("status " + res.status);
    }
    return res.json();
}

refresh();
"#;

/// Asset directory inside a temp dir, so the default output path
/// (`<temp>/index_html.h`) stays inside the temp dir too
pub struct Fixture {
    pub root: TempDir,
    pub source_dir: PathBuf,
}

impl Fixture {
    #[allow(dead_code)]
    pub fn new(files: &[(&str, &str)]) -> Self {
        let root = TempDir::new().unwrap();
        let source_dir = root.path().join("data");
        fs::create_dir_all(&source_dir).unwrap();
        for (name, content) in files {
            write_file(&source_dir.join(name), content);
        }
        Self { root, source_dir }
    }

    /// The three-file page above
    #[allow(dead_code)]
    pub fn device_page() -> Self {
        Self::new(&[
            ("index.html", INDEX_HTML),
            ("style.css", STYLE_CSS),
            ("app.js", APP_JS),
        ])
    }

    #[allow(dead_code)]
    pub fn config(&self) -> BuildConfig {
        BuildConfig::builder().source_dir(&self.source_dir).build().unwrap()
    }

    #[allow(dead_code)]
    pub fn default_header_path(&self) -> PathBuf {
        self.root.path().join("index_html.h")
    }
}

#[allow(dead_code)]
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
