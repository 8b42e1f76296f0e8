//! PageSpeed API data models

mod lighthouse;

pub use lighthouse::{LighthouseAudit, LighthouseResult, PageSpeedResponse};
