use hwgrade::config::GraderConfig;
use hwgrade::tooling::cli::CliContext;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Workspace with `hw4/` holding a small Linux homework submission.
pub fn homework_workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let hw = temp.path().join("hw4");
    fs::create_dir_all(hw.join("scripts")).unwrap();
    fs::create_dir_all(hw.join("screenshots")).unwrap();
    fs::write(hw.join("answers.pdf"), b"%PDF-1.4").unwrap();
    fs::write(hw.join("report.docx"), b"PK").unwrap();
    fs::write(hw.join("scripts").join("cleanup.sh"), b"#!/bin/bash\nrm -rf /tmp/hw\n").unwrap();
    fs::write(hw.join("scripts").join("README"), b"run me").unwrap();
    fs::write(hw.join("screenshots").join("top.png"), b"\x89PNG").unwrap();
    (temp, hw)
}

/// Context with colour off and an instant demo grader.
pub fn quiet_context(workspace: &TempDir) -> CliContext {
    CliContext::with_config(workspace.path().to_path_buf(), quiet_config())
        .with_preview_sink(Arc::new(Mutex::new(std::io::sink())))
}

/// Shared buffer that collects the `grade` preview.
pub type CapturedPreview = Arc<Mutex<Vec<u8>>>;

/// Like `quiet_context`, with the preview captured instead of printed.
pub fn capturing_context(workspace: &TempDir, config: GraderConfig) -> (CliContext, CapturedPreview) {
    let captured: CapturedPreview = Arc::new(Mutex::new(Vec::new()));
    let context = CliContext::with_config(workspace.path().to_path_buf(), config)
        .with_preview_sink(captured.clone());
    (context, captured)
}

pub fn preview_text(captured: &CapturedPreview) -> String {
    String::from_utf8(captured.lock().unwrap().clone()).unwrap()
}

pub fn quiet_config() -> GraderConfig {
    let mut config = GraderConfig::default();
    config.display.color = false;
    config.grading.demo_delay_ms = 0;
    config
}
