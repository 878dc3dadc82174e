//! Observability: in-process counters and the sink boundary that feeds them.
//!
//! Comparator and frame code only ever calls `sink::record`; nothing outside
//! this module touches the counter state.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, EventState};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
