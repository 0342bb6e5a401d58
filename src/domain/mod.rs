// Domain layer - Dashboard models with no I/O
pub mod application;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod event;
pub mod metric;
pub mod period;
