pub mod chart;
pub mod holding;
pub mod metrics;
pub mod session;
