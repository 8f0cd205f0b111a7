//! Unit tests for CLI module
//!
//! Tests command registry, formatting, and script sessions against an
//! in-memory store.

#![allow(clippy::unwrap_used)]

use std::{io::Cursor, sync::Arc};

use serde_json::{Value, json};

use crate::{
    cli::{
        CliContext, CliError, CliService, CommandRegistry, Session,
        formatting::{format_change, format_json_value, format_optional_value},
    },
    config::Config,
    store::{PathStore, StateChange},
};

fn service() -> CliService {
    CliService::new(PathStore::new(), Config::default())
}

fn run_script(service: &CliService, script: &str) -> (Vec<String>, String, usize) {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let report = Session::new(service)
        .run(Cursor::new(script), &mut out, &mut err)
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();

    (out.lines().map(str::to_string).collect(), err, report.failed)
}

#[test]
fn format_json_value_scalars() {
    assert_eq!(format_json_value(&json!("hello world")), "\"hello world\"");
    assert_eq!(format_json_value(&json!("")), "\"\"");
    assert_eq!(format_json_value(&json!(-123)), "-123");
    assert_eq!(format_json_value(&json!(2.5)), "2.5");
    assert_eq!(format_json_value(&json!(true)), "true");
    assert_eq!(format_json_value(&Value::Null), "null");
}

#[test]
fn format_json_value_collections_show_size() {
    assert_eq!(format_json_value(&json!([1, 2, 3])), "[3]");
    assert_eq!(format_json_value(&json!([])), "[0]");
    assert_eq!(format_json_value(&json!({})), "{0}");
    assert_eq!(
        format_json_value(&json!({ "section": { "sub": { "key": 1 } } })),
        "{1}"
    );
}

#[test]
fn format_optional_value_marks_absence() {
    assert_eq!(format_optional_value(None), "-");
    assert_eq!(format_optional_value(Some(&json!(1))), "1");
}

#[test]
fn format_change_line() {
    let change = StateChange::new(
        "app.config.theme".to_string(),
        "app".to_string(),
        None,
        Some(json!({ "config": { "theme": "dark" } })),
    );

    assert_eq!(
        format_change(&change),
        "[watch app] app.config.theme: - -> {1}"
    );
}

#[test]
fn command_registry_starts_empty() {
    let context = Arc::new(CliContext::new(PathStore::new(), Config::default()));
    let registry = CommandRegistry::new(context);

    assert!(registry.list_commands().is_empty());
    assert!(registry.metadata("state", "get").is_none());
}

#[test]
fn command_registry_lists_sorted_commands() {
    let context = Arc::new(CliContext::new(PathStore::new(), Config::default()));
    let mut registry = CommandRegistry::new(context);
    registry.register_all_commands();

    let listing = registry.list_commands();

    assert_eq!(
        listing,
        vec![
            (
                "config".to_string(),
                vec!["schema".to_string(), "show".to_string()]
            ),
            (
                "state".to_string(),
                vec![
                    "dump".to_string(),
                    "get".to_string(),
                    "remove".to_string(),
                    "set".to_string(),
                    "unwatch".to_string(),
                    "watch".to_string(),
                    "watches".to_string(),
                ]
            ),
        ]
    );
}

#[test]
fn command_registry_rejects_unknown_and_bad_arity() {
    let service = service();

    assert!(matches!(
        service.execute_command("nope", "get", &[]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        service.execute_command("state", "nope", &[]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        service.execute_command("state", "get", &[]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        service.execute_command("state", "get", &["a".to_string(), "b".to_string()]),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn malformed_path_is_a_store_error() {
    let args = ["a..b".to_string(), "1".to_string()];
    let result = service().execute_command("state", "set", &args);

    assert!(matches!(result, Err(CliError::StoreError(_))));
}

#[test]
fn session_set_and_get() {
    let service = service();
    let (out, err, failed) = run_script(
        &service,
        r#"
# comment lines are skipped
state set app.config {"theme": "dark", "language": "fr"}
state get app.config.theme
state get app.missing
"#,
    );

    assert_eq!(failed, 0);
    assert!(err.is_empty());
    assert_eq!(
        out,
        vec![
            "Set app.config = {2}",
            "app.config.theme: \"dark\"",
            "app.missing: (unset)",
        ]
    );
    assert_eq!(service.store().get("app.config.language"), Some(json!("fr")));
}

#[test]
fn session_plain_strings_are_stored_as_strings() {
    let service = service();
    run_script(&service, "state set user.name Alice Smith\n");

    assert_eq!(service.store().get("user.name"), Some(json!("Alice Smith")));
}

#[test]
fn session_watch_prints_notifications_after_command_output() {
    let service = service();
    let (out, _, failed) = run_script(
        &service,
        "state watch app\nstate set app.config.theme dark\nstate set other 1\n",
    );

    assert_eq!(failed, 0);
    assert_eq!(
        out,
        vec![
            "Watching 'app' (subscription 1)",
            "Set app.config.theme = \"dark\"",
            "[watch app] app.config.theme: - -> {1}",
            "Set other = 1",
        ]
    );
}

#[test]
fn session_unwatch_stops_notifications() {
    let service = service();
    let (out, _, failed) = run_script(
        &service,
        "state watch counter\nstate watches\nstate unwatch 1\nstate set counter 5\nstate watches\n",
    );

    assert_eq!(failed, 0);
    assert_eq!(
        out,
        vec![
            "Watching 'counter' (subscription 1)",
            "1\tcounter",
            "Stopped watching 'counter'",
            "Set counter = 5",
            "No active watches",
        ]
    );
    assert_eq!(service.store().subscriber_count(), 0);
}

#[test]
fn session_remove_reports_previous_value() {
    let service = service();
    let (out, _, _) = run_script(
        &service,
        "state set auth.token abc\nstate remove auth.token\nstate remove auth.token\n",
    );

    assert_eq!(
        out,
        vec![
            "Set auth.token = \"abc\"",
            "Removed auth.token (was \"abc\")",
            "Nothing stored at auth.token",
        ]
    );
}

#[test]
fn session_errors_do_not_stop_the_script() {
    let service = service();
    let (out, err, failed) = run_script(
        &service,
        "state fly away\nstate unwatch 99\nstate set a..b 1\nstate set ok true\n",
    );

    assert_eq!(failed, 3);
    assert!(err.contains("line 1"));
    assert!(err.contains("line 2"));
    assert!(err.contains("line 3"));
    assert_eq!(out, vec!["Set ok = true"]);
}

#[test]
fn session_dump_prints_tree() {
    let service = service();
    let (out, _, _) = run_script(&service, "state set a.b 1\nstate dump\n");

    let dumped: Value = serde_json::from_str(&out[1..].join("\n")).unwrap();
    assert_eq!(dumped, json!({ "a": { "b": 1 } }));
}

#[test]
fn session_help_lists_commands() {
    let (out, _, failed) = run_script(&service(), "help\n");
    let text = out.join("\n");

    assert_eq!(failed, 0);
    assert!(text.contains("state"));
    assert!(text.contains("unwatch"));
    assert!(text.contains("<path:path>"));
}

#[test]
fn session_config_commands() {
    let service = service();
    let (out, _, failed) = run_script(&service, "config show\nconfig schema\n");
    let text = out.join("\n");

    assert_eq!(failed, 0);
    assert!(text.contains("max_notify_depth = 32"));
    assert!(text.contains("\"properties\""));
}
