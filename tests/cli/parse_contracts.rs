use clap::{CommandFactory, Parser};
use hwgrade::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["hwgrade", "summary", "hw1"],
        vec!["hwgrade", "summary", "a.pdf", "b.sh", "--format", "json"],
        vec!["hwgrade", "tree", "hw1", "--expand-depth", "3"],
        vec!["hwgrade", "grade", "hw1", "--demo", "--yes"],
        vec!["hwgrade", "grade", "hw1", "--endpoint", "http://localhost:8000/grade", "-y"],
        vec!["hwgrade", "report", "result.json", "--format", "json"],
        vec!["hwgrade", "config", "show"],
        vec!["hwgrade", "--no-color", "--log-level", "debug", "summary", "hw1"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_endpoint_with_demo() {
    let parsed = Cli::try_parse_from([
        "hwgrade",
        "grade",
        "hw1",
        "--demo",
        "--endpoint",
        "http://localhost:8000/grade",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["hwgrade", "summary", "hw1", "--format", "xml"]).is_err());
}

#[test]
fn grade_collects_multiple_paths() {
    let cli = Cli::try_parse_from(["hwgrade", "grade", "a.sh", "b.pdf", "--demo"]).unwrap();
    match cli.command {
        Commands::Grade {
            paths, demo, yes, ..
        } => {
            assert_eq!(paths.len(), 2);
            assert!(demo);
            assert!(!yes);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn help_lists_every_subcommand() {
    let help = Cli::command().render_help().to_string();
    for name in ["summary", "tree", "grade", "report", "config"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}
