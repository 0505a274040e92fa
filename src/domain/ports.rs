use chrono::{DateTime, Utc};

/// Source of the current instant. The dispatcher reads time only through this.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn api_token(&self) -> &str;
    fn allowed_origin(&self) -> &str;
    fn max_body_bytes(&self) -> usize;
}
