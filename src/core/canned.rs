//! Constant payloads served next to the command dispatcher.

use crate::domain::model::{iso_timestamp, BriefPayload, StatusPayload};
use chrono::{DateTime, Utc};

pub const SERVER_NAME: &str = "kaios-terminal-backend";
pub const STATUS_ONLINE: &str = "ONLINE";

pub const BRIEF_TITLE: &str = "DAILY BRIEF";
pub const BRIEF_LINES: [&str; 4] = [
    "NODE: ORBITAL-07",
    "LINK: STABLE",
    "TASK: Build the terminal.",
    "NOTE: Short lines read best on flip screens.",
];

pub fn status_payload(at: DateTime<Utc>) -> StatusPayload {
    StatusPayload {
        ok: true,
        ts: iso_timestamp(at),
        server: SERVER_NAME.to_string(),
        status: STATUS_ONLINE.to_string(),
    }
}

pub fn brief_payload(at: DateTime<Utc>) -> BriefPayload {
    BriefPayload {
        ok: true,
        ts: iso_timestamp(at),
        title: BRIEF_TITLE.to_string(),
        lines: BRIEF_LINES.iter().map(|line| line.to_string()).collect(),
    }
}
