//! End-to-end builds of a temp asset directory

use std::fs;
use webui_embed::pipeline::{ESCAPED_TERMINATOR, RAW_LITERAL_TERMINATOR};
use webui_embed::{BuildConfig, BuildError, Pipeline, build};

mod common;
use common::{APP_JS, Fixture, INDEX_HTML, STYLE_CSS};

#[test]
fn test_payload_is_self_contained_and_smaller() {
    let fixture = Fixture::device_page();
    let output = Pipeline::new(&fixture.config()).run().unwrap();
    let payload = &output.payload;

    assert!(!payload.contains("href=\"style.css\""));
    assert!(!payload.contains("src=\"app.js\""));
    assert!(!payload.contains("<!--"));
    assert!(!payload.contains("/*"));
    assert!(!payload.contains("// poll"));
    assert!(!payload.contains('\n'));

    assert!(payload.contains("<style>body{margin:0;font-family:sans-serif}#status>span+span{color:#333}</style>"));
    assert!(payload.contains(r#"const API="http://camera.local/api";"#));
    assert!(payload.contains("async function refresh(){const res=await fetch(API+\"/status\");"));
    assert!(payload.contains("<h1>Camera settings</h1>"));

    let input_total = INDEX_HTML.len() + STYLE_CSS.len() + APP_JS.len();
    assert_eq!(output.original_bytes, input_total);
    assert!(payload.len() < input_total);
}

#[test]
fn test_stylesheet_is_embedded_before_script_position() {
    let fixture = Fixture::device_page();
    let output = Pipeline::new(&fixture.config()).run().unwrap();

    let style_at = output.payload.find("<style>").unwrap();
    let script_at = output.payload.find("<script>").unwrap();
    assert!(style_at < script_at);
    assert_eq!(output.inlining.resolved().count(), 2);
}

#[test]
fn test_build_writes_header_and_reports_sizes() {
    let fixture = Fixture::device_page();
    let config = fixture.config();
    let report = build(&config).unwrap();

    let header_path = fixture.default_header_path();
    assert_eq!(report.output_path, header_path);
    let header = fs::read_to_string(&header_path).unwrap();

    assert!(header.starts_with("#pragma once\n\n// Web Interface - Auto-generated\n// Built: "));
    assert!(header.contains("const char index_html[] PROGMEM = R\"rawliteral("));
    assert!(header.ends_with(")rawliteral\";\n"));
    assert_eq!(header.matches(RAW_LITERAL_TERMINATOR).count(), 1);

    assert_eq!(report.artifact_bytes, header.len());
    assert_eq!(
        report.saved_bytes,
        report.original_bytes as i64 - report.payload_bytes as i64
    );
    assert!(report.saved_bytes > 0);
    let expected_percent = report.saved_bytes as f64 / report.original_bytes as f64 * 100.0;
    assert!((report.saved_percent - expected_percent).abs() < 1e-9);
    assert_eq!(report.inlined, vec!["style.css", "app.js"]);
    assert!(report.missing.is_empty());
}

#[test]
fn test_missing_subresources_are_warnings_only() {
    let fixture = Fixture::new(&[("index.html", INDEX_HTML)]);
    let report = build(&fixture.config()).unwrap();

    assert_eq!(report.missing, vec!["style.css", "app.js"]);
    assert!(report.inlined.is_empty());

    let header = fs::read_to_string(fixture.default_header_path()).unwrap();
    assert!(header.contains(r#"<link rel="stylesheet" href="style.css">"#));
    assert!(header.contains(r#"<script src="app.js"></script>"#));
}

#[test]
fn test_missing_main_document_writes_nothing() {
    let fixture = Fixture::new(&[("style.css", STYLE_CSS)]);
    let err = build(&fixture.config()).unwrap_err();

    assert!(matches!(err, BuildError::MissingMainInput { .. }));
    assert!(err.is_fatal());
    assert!(!fixture.default_header_path().exists());
}

#[test]
fn test_no_minify_embeds_sources_verbatim() {
    let fixture = Fixture::device_page();
    let config = BuildConfig::builder()
        .source_dir(&fixture.source_dir)
        .minify(false)
        .build()
        .unwrap();

    let output = Pipeline::new(&config).run().unwrap();
    assert!(output.payload.contains(&format!("<style>{STYLE_CSS}</style>")));
    assert!(output.payload.contains(&format!("<script>{APP_JS}</script>")));
    assert!(output.payload.contains("<!-- device status page -->"));
}

#[test]
fn test_terminator_in_sources_is_escaped() {
    let fixture = Fixture::new(&[
        ("index.html", "<p>)rawliteral</p><script src=\"app.js\"></script>"),
        ("app.js", "const end = \")rawliteral\";"),
    ]);
    let report = build(&fixture.config()).unwrap();
    let header = fs::read_to_string(fixture.default_header_path()).unwrap();

    assert_eq!(header.matches(RAW_LITERAL_TERMINATOR).count(), 1);
    assert_eq!(header.matches(ESCAPED_TERMINATOR).count(), 2);
    assert!(report.missing.is_empty());
}

#[test]
fn test_custom_output_and_constant_name() {
    let fixture = Fixture::device_page();
    let output_path = fixture.root.path().join("include/generated/ui.h");
    let config = BuildConfig::builder()
        .source_dir(&fixture.source_dir)
        .output_path(&output_path)
        .constant_name("camera_page")
        .build()
        .unwrap();

    let report = build(&config).unwrap();
    assert_eq!(report.output_path, output_path);
    let header = fs::read_to_string(&output_path).unwrap();
    assert!(header.contains("const char camera_page[] PROGMEM"));
}

#[test]
fn test_report_serializes_to_json() {
    let fixture = Fixture::device_page();
    let report = build(&fixture.config()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["minified"], true);
    assert_eq!(json["inlined"][0], "style.css");
    assert_eq!(json["payload_bytes"], report.payload_bytes);
}
