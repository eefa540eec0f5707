#![cfg(feature = "exec")]

use pretty_assertions::assert_eq;
use shell_tmpl::parse;
use shell_tmpl::prelude::*;

fn bash() -> Shell {
    Shell::new("bash")
}

/// Run through `shell`, or `None` when that shell is not installed here.
async fn try_text(shell: &Shell, tpl: &Template) -> Option<String> {
    match shell.run(tpl, |out| Ok(out)).await {
        Err(ExecError::Spawn { .. }) => None,
        other => Some(other.unwrap()),
    }
}

#[tokio::test]
async fn echo_lines() {
    let tpl = sx_cmd!("echo {}", "foo\nbar").unwrap();
    let lines = bash().run(&tpl, |out| Ok(parse::lines(&out))).await.unwrap();
    assert_eq!(lines, ["foo", "bar"]);
}

#[tokio::test]
async fn failure_carries_streams() {
    let tpl = sx_cmd!("printf partial; printf {} >&2; exit 3", "boom\n").unwrap();
    let err = bash().run(&tpl, |out| Ok(out)).await.unwrap_err();
    let failure = err.failure().expect("process failure");
    assert_eq!(failure.stdout, "partial");
    assert_eq!(failure.stderr, "boom\n");
    assert_eq!(failure.exit, ExitInfo { code: Some(3), signal: None });
    assert_eq!(failure.message, format!("Command failed: {}", failure.command));
    assert_eq!(err.exit_code(), Some(3));
}

#[cfg(unix)]
#[tokio::test]
async fn signal_is_reported() {
    let err = bash().run(&Template::literal("kill -9 $$"), |out| Ok(out)).await.unwrap_err();
    let failure = err.failure().expect("process failure");
    assert_eq!(failure.exit.code, None);
    assert_eq!(failure.exit.signal, Some(9));
    assert_eq!(err.exit_code(), None);
}

#[tokio::test]
async fn stderr_on_success_is_not_an_error() {
    let tpl = Template::literal("echo out; echo note >&2");
    let out = bash().run(&tpl, |out| Ok(parse::text(&out))).await.unwrap();
    assert_eq!(out, "out");
}

#[tokio::test]
async fn parse_failure_is_distinct() {
    let tpl = Template::literal("echo not-json");
    let err = bash().run(&tpl, |out| parse::json::<serde_json::Value>(&out)).await.unwrap_err();
    assert!(matches!(err, ExecError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn fields_and_null_separated() {
    let tpl = sx_cmd!("printf {}", "a  b\\nc   d\\n").unwrap();
    let table = bash().run(&tpl, |out| Ok(parse::fields(&out))).await.unwrap();
    assert_eq!(table, vec![vec!["a", "b"], vec!["c", "d"]]);

    let tpl = sx_cmd!("printf '%s\\0' {}", ["one", "two words"]).unwrap();
    let items = bash().run(&tpl, |out| Ok(parse::null_separated(&out))).await.unwrap();
    assert_eq!(items, ["one", "two words"]);
}

#[tokio::test]
async fn bash_round_trips_ascii() {
    let ascii: String = (1u8..128).map(char::from).collect();
    let tpl = sx_cmd!("printf %s {}", ascii.as_str()).unwrap();
    if let Some(out) = try_text(&bash(), &tpl).await {
        assert_eq!(out, ascii);
    }
}

#[tokio::test]
async fn dash_echo_round_trips_ascii() {
    let mut value: String = (1u8..128).map(char::from).collect();
    value.push_str("\x015\t7 end");
    let tpl = sx_cmd!("echo -n x{}", value.as_str()).unwrap();
    if let Some(out) = try_text(&Shell::new("dash"), &tpl).await {
        assert_eq!(out, format!("x{value}"));
    }
}

#[tokio::test]
async fn dash_echo_digit_after_slot() {
    let tpl = sx_cmd!("echo -n x{}5", "\x01").unwrap();
    if let Some(out) = try_text(&Shell::new("dash"), &tpl).await {
        assert_eq!(out, "x\x015");
    }
}

#[tokio::test]
async fn nested_sh_command() {
    let inner = sx_cmd!("echo {}", "foo bar").unwrap();
    let outer = sx_cmd!("sh -c {}", esc_dash(&inner)).unwrap();
    let out = bash().run(&outer, |out| Ok(parse::text(&out))).await.unwrap();
    assert_eq!(out, "foo bar");
}

#[tokio::test]
async fn concurrent_runs_are_independent() {
    let a = sx_cmd!("echo {}", "first").unwrap();
    let b = sx_cmd!("sleep 0.1; echo {}", "second").unwrap();
    let sh = bash();
    let (ra, rb) = tokio::join!(
        sh.run(&a, |out| Ok(parse::text(&out))),
        sh.run(&b, |out| Ok(parse::text(&out))),
    );
    assert_eq!(ra.unwrap(), "first");
    assert_eq!(rb.unwrap(), "second");
}

#[tokio::test]
async fn easy_helpers_use_env_shell() {
    let out = run_text(&sx_cmd!("echo {}", "hello").unwrap()).await.unwrap();
    assert_eq!(out, "hello");

    let v: serde_json::Value = run_json(&Template::literal("echo '{\"a\": [1, 2]}'")).await.unwrap();
    assert_eq!(v["a"][1], 2);
}
