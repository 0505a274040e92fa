use crate::domain::model::{iso_timestamp, CommandResponse};
use crate::domain::ports::{Clock, SystemClock};

pub const HELP_TEXT: &str = "AVAILABLE:\n  help  ping  brief  time  echo <text>";
pub const PONG: &str = "PONG";
pub const BRIEF_HINT: &str = "Use BRIEF for the full message.";
pub const EMPTY_ECHO: &str = "(empty)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Ping,
    Brief,
    Time,
    Echo,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Help,
        Command::Ping,
        Command::Brief,
        Command::Time,
        Command::Echo,
    ];

    /// Exact match on an already normalized command name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Ping => "ping",
            Command::Brief => "brief",
            Command::Time => "time",
            Command::Echo => "echo",
        }
    }
}

/// Whitespace as web clients see it: Unicode `White_Space` without NEL
/// (U+0085), plus the byte order mark (U+FEFF).
pub fn is_separator(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Trimmed, lower-cased command line.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(is_separator).to_lowercase()
}

/// First whitespace-delimited token; empty for blank input.
pub fn command_name(normalized: &str) -> &str {
    normalized
        .trim_start_matches(is_separator)
        .split(is_separator)
        .next()
        .unwrap_or("")
}

/// Text after the literal `echo` prefix, trimmed. Inner spacing is kept as typed.
pub fn echo_tail(normalized: &str) -> &str {
    normalized
        .strip_prefix(Command::Echo.name())
        .unwrap_or_default()
        .trim_matches(is_separator)
}

pub fn unknown_command(token: &str) -> String {
    format!("ERR: unknown command \"{}\". Type \"help\".", token)
}

pub fn dispatch(raw: &str) -> CommandResponse {
    dispatch_with_clock(raw, &SystemClock)
}

/// Maps a raw command line to its canned output. Never fails: unknown commands
/// come back as `ERR: ...` text inside a successful response.
pub fn dispatch_with_clock<C: Clock + ?Sized>(raw: &str, clock: &C) -> CommandResponse {
    let now = clock.now();
    let input = normalize(raw);
    let name = command_name(&input);

    let output = match Command::parse(name) {
        None => unknown_command(name),
        Some(Command::Help) => HELP_TEXT.to_string(),
        Some(Command::Ping) => PONG.to_string(),
        Some(Command::Brief) => BRIEF_HINT.to_string(),
        Some(Command::Time) => format!("SERVER TIME: {}", iso_timestamp(now)),
        Some(Command::Echo) => match echo_tail(&input) {
            "" => EMPTY_ECHO.to_string(),
            tail => tail.to_string(),
        },
    };

    CommandResponse::success(now, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap())
    }

    fn output(raw: &str) -> String {
        dispatch_with_clock(raw, &fixed()).output
    }

    #[test]
    fn test_parse_only_accepts_known_names() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
        assert_eq!(Command::parse("PING"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("pingx"), None);
    }

    #[test]
    fn test_time_uses_clock() {
        let response = dispatch_with_clock("time", &fixed());
        assert_eq!(response.output, "SERVER TIME: 2025-01-02T03:04:05.000Z");
        assert_eq!(response.timestamp, "2025-01-02T03:04:05.000Z");
        assert!(response.ok);
    }

    #[test]
    fn test_echo_tail_slices_after_prefix() {
        assert_eq!(echo_tail("echo   hello   world"), "hello   world");
        assert_eq!(echo_tail("echo"), "");
        assert_eq!(output("Echo\tTabs\tStay"), "tabs\tstay");
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(output("echo\u{FEFF}"), EMPTY_ECHO);
        assert_eq!(output("\u{FEFF}PING\u{FEFF}"), PONG);
        assert_eq!(output("echo\u{FEFF}hi"), "hi");
        assert!(!is_separator('\u{0085}'));
        assert_eq!(output("ping\u{0085}"), unknown_command("ping\u{0085}"));
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        assert_eq!(output("ping now"), PONG);
        assert_eq!(output("help me please"), HELP_TEXT);
        assert_eq!(output("brief   full"), BRIEF_HINT);
    }

    #[test]
    fn test_prefix_of_known_command_is_unknown() {
        assert_eq!(output("echoes hi"), unknown_command("echoes"));
        assert_eq!(output("pin"), r#"ERR: unknown command "pin". Type "help"."#);
    }
}
