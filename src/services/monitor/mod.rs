pub mod engine;

pub use engine::{CycleError, MonitorEngine};
