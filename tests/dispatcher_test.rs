use chrono::{DateTime, Utc};
use kaios_terminal_backend::core::dispatcher::{BRIEF_HINT, EMPTY_ECHO, HELP_TEXT, PONG};
use kaios_terminal_backend::dispatch;

#[test]
fn test_known_commands_ignore_case_and_padding() {
    let cases = [
        ("help", HELP_TEXT),
        ("HELP", HELP_TEXT),
        ("  Help\t", HELP_TEXT),
        ("ping", PONG),
        ("PING", PONG),
        ("Ping", PONG),
        ("ping ", PONG),
        ("\n pInG \n", PONG),
        ("brief", BRIEF_HINT),
        ("  BRIEF  ", BRIEF_HINT),
    ];

    for (raw, expected) in cases {
        let response = dispatch(raw);
        assert!(response.ok);
        assert_eq!(response.output, expected, "input: {:?}", raw);
    }
}

#[test]
fn test_help_lists_every_command() {
    assert_eq!(
        dispatch("help").output,
        "AVAILABLE:\n  help  ping  brief  time  echo <text>"
    );
}

#[test]
fn test_echo_preserves_inner_spacing() {
    assert_eq!(dispatch("echo   hello   world").output, "hello   world");
    assert_eq!(dispatch("  ECHO Hello World  ").output, "hello world");
}

#[test]
fn test_echo_without_text_is_placeholder() {
    assert_eq!(dispatch("echo").output, EMPTY_ECHO);
    assert_eq!(dispatch("echo   ").output, "(empty)");
}

#[test]
fn test_empty_input_is_unknown_command() {
    let expected = r#"ERR: unknown command "". Type "help"."#;
    assert_eq!(dispatch("").output, expected);
    assert_eq!(dispatch("   \t ").output, expected);
}

#[test]
fn test_unknown_token_is_normalized_in_error() {
    let response = dispatch("FooBar");
    assert!(response.ok);
    assert_eq!(
        response.output,
        r#"ERR: unknown command "foobar". Type "help"."#
    );
    assert_eq!(
        dispatch("  LS -la ").output,
        r#"ERR: unknown command "ls". Type "help"."#
    );
}

#[test]
fn test_fixed_outputs_are_repeatable() {
    for raw in ["help", "ping", "brief", "nope"] {
        let first = dispatch(raw).output;
        for _ in 0..5 {
            assert_eq!(dispatch(raw).output, first);
        }
    }
}

#[test]
fn test_timestamp_falls_within_call_window() {
    for raw in ["ping", "time", "echo hi", ""] {
        let before = Utc::now();
        let response = dispatch(raw);
        let after = Utc::now();

        let ts = DateTime::parse_from_rfc3339(&response.timestamp)
            .expect("timestamp must be ISO-8601")
            .with_timezone(&Utc);
        assert!(ts.timestamp_millis() >= before.timestamp_millis());
        assert!(ts.timestamp_millis() <= after.timestamp_millis());
        assert!(response.timestamp.ends_with('Z'));
    }
}

#[test]
fn test_time_command_reports_server_time() {
    let response = dispatch("TIME");
    let stamp = response
        .output
        .strip_prefix("SERVER TIME: ")
        .expect("time output prefix");
    assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    assert_eq!(stamp, response.timestamp);
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..16)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = format!("echo worker-{}   done", i);
                (i, dispatch(&raw).output)
            })
        })
        .collect();

    for handle in handles {
        let (i, output) = handle.join().unwrap();
        assert_eq!(output, format!("worker-{}   done", i));
    }
}
