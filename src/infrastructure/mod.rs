//! Infrastructure layer - External service implementations

pub mod donor;
pub mod logging;
