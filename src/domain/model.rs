use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Formats an instant as `2024-05-01T12:00:00.000Z` (UTC, millisecond precision).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Body of `POST /api/cmd`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommandRequest {
    pub cmd: serde_json::Value,
}

impl CommandRequest {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: serde_json::Value::String(cmd.into()),
        }
    }

    /// Reads `cmd` from a JSON object body. Any other top-level shape carries
    /// no command.
    pub fn from_body(body: serde_json::Value) -> Self {
        match body {
            serde_json::Value::Object(mut fields) => Self {
                cmd: fields.remove("cmd").unwrap_or_default(),
            },
            _ => Self::default(),
        }
    }

    /// Raw command text. Strings pass through untouched; non-zero numbers and
    /// `true` are rendered as text; everything else is the empty command.
    pub fn raw(&self) -> String {
        use serde_json::Value;

        match &self.cmd {
            Value::String(text) => text.clone(),
            Value::Number(n) if n.as_f64() != Some(0.0) => number_text(n),
            Value::Bool(true) => "true".to_string(),
            _ => String::new(),
        }
    }
}

/// `42.0` renders as `42`; integers keep every digit.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub ok: bool,
    #[serde(rename = "ts")]
    pub timestamp: String,
    pub output: String,
}

impl CommandResponse {
    pub fn success(at: DateTime<Utc>, output: impl Into<String>) -> Self {
        Self {
            ok: true,
            timestamp: iso_timestamp(at),
            output: output.into(),
        }
    }
}

/// Payload of `GET /api/ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub ok: bool,
    pub ts: String,
    pub server: String,
    pub status: String,
}

/// Payload of `GET /api/brief`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefPayload {
    pub ok: bool,
    pub ts: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// Shape of every non-2xx JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_iso_timestamp_uses_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_raw_command_from_json_values() {
        let cases = [
            (json!({"cmd": "PING"}), "PING"),
            (json!({"cmd": "  echo  hi "}), "  echo  hi "),
            (json!({"cmd": 42}), "42"),
            (json!({"cmd": 42.0}), "42"),
            (json!({"cmd": -3.5}), "-3.5"),
            (json!({"cmd": 0}), ""),
            (json!({"cmd": 0.0}), ""),
            (json!({"cmd": true}), "true"),
            (json!({"cmd": false}), ""),
            (json!({"cmd": null}), ""),
            (json!({"cmd": ["ping"]}), ""),
            (json!({}), ""),
        ];

        for (body, expected) in cases {
            let request = CommandRequest::from_body(body.clone());
            assert_eq!(request.raw(), expected, "body: {}", body);
        }
    }

    #[test]
    fn test_non_object_body_has_no_command() {
        for body in [json!(["PING"]), json!("ping"), json!(7), json!(null)] {
            assert_eq!(CommandRequest::from_body(body.clone()).raw(), "", "body: {}", body);
        }
    }

    #[test]
    fn test_command_response_serializes_timestamp_as_ts() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let value = serde_json::to_value(CommandResponse::success(at, "PONG")).unwrap();
        assert_eq!(
            value,
            json!({"ok": true, "ts": "2024-05-01T12:00:00.000Z", "output": "PONG"})
        );
    }
}
