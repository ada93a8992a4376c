use hwgrade::config::{FallbackMode, GraderConfig};
use hwgrade::tooling::cli::{CliContext, Commands, ConfigCommands};
use hwgrade::ApiError;
use std::fs;

use crate::cli::support::{
    capturing_context, homework_workspace, preview_text, quiet_config, quiet_context,
};

#[test]
fn summary_json_contract_counts_categories() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Summary {
            paths: vec![hw],
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["is_directory"], true);
    let stats = &parsed["stats"];
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["pdfs"], 1);
    assert_eq!(stats["docx"], 1);
    assert_eq!(stats["images"], 1);
    assert_eq!(stats["text"], 1);
    assert_eq!(stats["other"], 1);
    assert!(stats["total_bytes"].as_u64().unwrap() > 0);
}

#[test]
fn summary_text_for_plain_files() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Summary {
            paths: vec![hw.join("answers.pdf"), hw.join("scripts").join("cleanup.sh")],
            format: "text".to_string(),
        })
        .unwrap();

    assert!(output.starts_with("Upload Summary"));
    assert!(output.contains("Text/Code"));
}

#[test]
fn tree_json_contract_nests_directory() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Tree {
            paths: vec![hw],
            format: "json".to_string(),
            expand_depth: None,
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let roots = parsed.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "hw4");
    assert_eq!(roots[0]["type"], "folder");

    let children: Vec<&str> = roots[0]["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        children,
        vec!["screenshots", "scripts", "answers.pdf", "report.docx"]
    );

    let scripts = &roots[0]["children"][1];
    assert_eq!(scripts["path"], "hw4/scripts");
    assert_eq!(scripts["children"][0]["name"], "cleanup.sh");
    assert_eq!(scripts["children"][1]["name"], "README");
    assert!(scripts["children"][0].get("children").is_none());
}

#[test]
fn tree_text_collapses_below_expand_depth() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Tree {
            paths: vec![hw],
            format: "text".to_string(),
            expand_depth: Some(1),
        })
        .unwrap();

    assert!(output.starts_with("~/homework"));
    assert!(output.contains("▾ hw4/"));
    assert!(output.contains("▸ scripts/ (2 files)"));
    assert!(!output.contains("cleanup.sh"));
}

#[test]
fn grade_demo_previews_selection_then_reports() {
    let (temp, hw) = homework_workspace();
    let (cli, captured) = capturing_context(&temp, quiet_config());

    let output = cli
        .execute(&Commands::Grade {
            paths: vec![hw],
            endpoint: None,
            demo: true,
            yes: true,
            format: "text".to_string(),
        })
        .unwrap();

    let preview = preview_text(&captured);
    assert!(preview.starts_with("Directory Contents"));
    assert!(preview.contains("~/homework"));
    assert!(preview.contains("▾ hw4/"));
    assert!(output.starts_with("Grading Complete (demo result)"));
    assert!(output.contains("85/100"));
    assert!(output.contains("Detailed Breakdown"));
}

#[test]
fn failed_grade_still_shows_selection() {
    let (temp, hw) = homework_workspace();
    let mut config = quiet_config();
    config.grading.timeout_secs = 2;
    config.grading.endpoint = Some("http://127.0.0.1:9/grade".to_string());
    let (cli, captured) = capturing_context(&temp, config);

    let result = cli.execute(&Commands::Grade {
        paths: vec![hw],
        endpoint: None,
        demo: false,
        yes: true,
        format: "text".to_string(),
    });

    assert!(matches!(result, Err(ApiError::Http(_))));
    let preview = preview_text(&captured);
    assert!(preview.starts_with("Directory Contents"));
    assert!(preview.contains("Total Files"));
    assert!(preview.contains("▾ scripts/"));
}

#[test]
fn plain_file_grade_preview_has_no_tree() {
    let (temp, hw) = homework_workspace();
    let (cli, captured) = capturing_context(&temp, quiet_config());

    cli.execute(&Commands::Grade {
        paths: vec![hw.join("answers.pdf")],
        endpoint: None,
        demo: true,
        yes: true,
        format: "text".to_string(),
    })
    .unwrap();

    let preview = preview_text(&captured);
    assert!(preview.starts_with("Upload Summary"));
    assert!(!preview.contains("~/homework"));
}

#[test]
fn json_grade_writes_no_preview() {
    let (temp, hw) = homework_workspace();
    let (cli, captured) = capturing_context(&temp, quiet_config());

    cli.execute(&Commands::Grade {
        paths: vec![hw],
        endpoint: None,
        demo: true,
        yes: true,
        format: "json".to_string(),
    })
    .unwrap();

    assert!(preview_text(&captured).is_empty());
}

#[test]
fn grade_json_contract_marks_demo_source() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Grade {
            paths: vec![hw],
            endpoint: None,
            demo: true,
            yes: true,
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["selection"]["stats"]["total"], 5);
    assert_eq!(parsed["selection"]["tree"][0]["name"], "hw4");
    assert_eq!(parsed["report"]["source"], "demo");
    assert_eq!(parsed["report"]["result"]["maxScore"], 100.0);
    assert!(parsed["report"]["graded_at"].as_str().is_some());
}

#[test]
fn grade_without_endpoint_is_config_error() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let err = cli
        .execute(&Commands::Grade {
            paths: vec![hw],
            endpoint: None,
            demo: false,
            yes: true,
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn grade_rejects_invalid_endpoint_flag() {
    let (temp, hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let err = cli
        .execute(&Commands::Grade {
            paths: vec![hw],
            endpoint: Some("YOUR_BACKEND_URL/grade".to_string()),
            demo: false,
            yes: true,
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn grade_unreachable_endpoint_falls_back_when_configured() {
    let (temp, hw) = homework_workspace();
    let mut config = GraderConfig::default();
    config.display.color = false;
    config.grading.demo_delay_ms = 0;
    config.grading.timeout_secs = 2;
    config.grading.endpoint = Some("http://127.0.0.1:9/grade".to_string());
    config.grading.fallback = FallbackMode::Demo;
    let cli = CliContext::with_config(temp.path().to_path_buf(), config);

    let output = cli
        .execute(&Commands::Grade {
            paths: vec![hw],
            endpoint: None,
            demo: false,
            yes: true,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["report"]["source"], "demo");
}

#[test]
fn grade_with_no_files_is_rejected() {
    let (temp, _hw) = homework_workspace();
    let empty = temp.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let cli = quiet_context(&temp);

    let err = cli
        .execute(&Commands::Grade {
            paths: vec![empty],
            endpoint: None,
            demo: true,
            yes: true,
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NoFiles));
}

#[test]
fn report_renders_saved_result() {
    let (temp, _hw) = homework_workspace();
    let path = temp.path().join("result.json");
    fs::write(
        &path,
        r#"{"score": 45, "maxScore": 100, "grade": "F", "feedback": "Missing scripts.",
            "details": [{"category": "Shell Scripting", "points": 5, "maxPoints": 25, "comment": "Incomplete"}]}"#,
    )
    .unwrap();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Report {
            file: path,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.starts_with("Grading Complete\n"));
    assert!(output.contains("45% score"));
    assert!(output.contains("Missing scripts."));
    assert!(output.contains("5/25"));
}

#[test]
fn config_show_prints_effective_toml() {
    let (temp, _hw) = homework_workspace();
    let cli = quiet_context(&temp);

    let output = cli
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    let parsed: toml::Value = toml::from_str(&output).unwrap();
    assert_eq!(parsed["grading"]["timeout_secs"].as_integer(), Some(60));
    assert_eq!(parsed["grading"]["fallback"].as_str(), Some("none"));
    assert_eq!(parsed["display"]["color"].as_bool(), Some(false));
}

#[test]
fn workspace_config_file_is_loaded() {
    let (temp, _hw) = homework_workspace();
    fs::write(
        temp.path().join("hwgrade.toml"),
        "[grading]\nendpoint = \"http://grader.example.edu/grade\"\ntimeout_secs = 15\n",
    )
    .unwrap();

    let cli = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    assert_eq!(
        cli.config().grading.endpoint.as_deref(),
        Some("http://grader.example.edu/grade")
    );
    assert_eq!(cli.config().grading.timeout_secs, 15);
}
