pub mod canned;
pub mod dispatcher;

pub use crate::domain::model::{BriefPayload, CommandRequest, CommandResponse, StatusPayload};
pub use crate::domain::ports::{Clock, ConfigProvider, SystemClock};
pub use crate::utils::error::Result;
