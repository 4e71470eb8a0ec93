use std::path::PathBuf;

use clap::Parser;
use lbaas_rule::cli::{Cli, Commands};
use lbaas_rule::SortDir;

fn parse(argv: &[&str]) -> Cli {
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_cli_help() {
    let result = Cli::try_parse_from(vec!["lbaas-rule", "--help"]);
    assert!(result.is_err()); // --help causes early exit with error
}

#[test]
fn test_global_defaults() {
    let cli = parse(&["lbaas-rule", "rule-list", "--listener", "web"]);
    assert_eq!(cli.config, PathBuf::from(".lbaas/config.yaml"));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.json);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "lbaas-rule",
        "rule-list",
        "--listener",
        "web",
        "--json",
        "-vv",
        "--os-url",
        "http://controller:9696",
    ]);
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.os_url.as_deref(), Some("http://controller:9696"));
}

#[test]
fn test_parse_rule_list() {
    let cli = parse(&[
        "lbaas-rule",
        "rule-list",
        "--listener",
        "web",
        "--page-size",
        "20",
        "--sort-key",
        "name",
        "--sort-dir",
        "desc",
        "-F",
        "id",
        "-F",
        "rule",
        "--filter",
        "admin_state_up=true",
    ]);

    match cli.command {
        Commands::RuleList(args) => {
            assert_eq!(args.listener.listener, "web");
            assert_eq!(args.page_size, Some(20));
            assert_eq!(args.sort_key, vec!["name"]);
            assert_eq!(args.sort_dir, vec![SortDir::Desc]);
            assert_eq!(args.fields, vec!["id", "rule"]);
            assert_eq!(
                args.filters,
                vec![("admin_state_up".to_string(), "true".to_string())]
            );
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_rule_list_requires_listener() {
    assert!(Cli::try_parse_from(["lbaas-rule", "rule-list"]).is_err());
}

#[test]
fn test_rule_list_rejects_zero_page_size() {
    assert!(Cli::try_parse_from([
        "lbaas-rule",
        "rule-list",
        "--listener",
        "web",
        "--page-size",
        "0"
    ])
    .is_err());
}

#[test]
fn test_rule_list_rejects_bad_filter() {
    assert!(Cli::try_parse_from([
        "lbaas-rule",
        "rule-list",
        "--listener",
        "web",
        "--filter",
        "novalue"
    ])
    .is_err());
}

#[test]
fn test_parse_rule_show() {
    let cli = parse(&["lbaas-rule", "rule-show", "https-only", "--listener", "web"]);
    match cli.command {
        Commands::RuleShow(args) => {
            assert_eq!(args.rule, "https-only");
            assert_eq!(args.listener.listener, "web");
            assert!(args.fields.is_empty());
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_rule_create() {
    let cli = parse(&[
        "lbaas-rule",
        "rule-create",
        "--rule-str",
        "acl is_https",
        "my-listener",
    ]);
    match cli.command {
        Commands::RuleCreate(args) => {
            assert_eq!(args.rule_str, "acl is_https");
            assert_eq!(args.listener, "my-listener");
            assert!(!args.admin_state_down);
            assert!(args.name.is_none());
            assert!(args.description.is_none());
            assert!(args.tenant_id.is_none());
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_rule_create_requires_rule_str() {
    let err = Cli::try_parse_from(["lbaas-rule", "rule-create", "my-listener"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_rule_create_requires_listener() {
    assert!(Cli::try_parse_from(["lbaas-rule", "rule-create", "--rule-str", "acl a"]).is_err());
}

#[test]
fn test_parse_rule_update() {
    let cli = parse(&[
        "lbaas-rule",
        "rule-update",
        "r1",
        "--listener",
        "web",
        "--rule-str",
        "acl b",
        "--description",
        "d",
        "--admin-state-down",
    ]);
    match cli.command {
        Commands::RuleUpdate(args) => {
            assert_eq!(args.rule, "r1");
            assert_eq!(args.rule_str.as_deref(), Some("acl b"));
            assert_eq!(args.description.as_deref(), Some("d"));
            assert!(args.admin_state_down);
            assert!(args.name.is_none());
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_rule_delete() {
    let cli = parse(&["lbaas-rule", "rule-delete", "r1", "--listener", "web"]);
    match cli.command {
        Commands::RuleDelete(args) => {
            assert_eq!(args.rule, "r1");
            assert_eq!(args.listener.listener, "web");
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_unknown_verb() {
    assert!(Cli::try_parse_from(["lbaas-rule", "rule-frobnicate"]).is_err());
}
