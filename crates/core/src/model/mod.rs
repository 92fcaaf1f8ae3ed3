//! Analysis result model and the wire shapes it is decoded from.
//!
//! A [`ResultModel`] only exists for a response that decoded completely;
//! the display side never sees a partially-populated result.

mod payload;
mod types;
mod wire;

pub use payload::ResultPayload;
pub use types::*;
pub use wire::{AnalyzeRequest, AnalyzeResponse, HealthStatus};
