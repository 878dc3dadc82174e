//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
//! This module is the only bridge between comparator code and the
//! thread-local counter state.

use crate::obs::metrics;
use fieldsort_primitives::{FieldKind, OrderStrategy};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    ComparatorBuilt {
        strategy: OrderStrategy,
        reversed: bool,
    },
    NaturalFallback {
        kind: FieldKind,
    },
    FrameSorted {
        rows: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink writing into the thread-local counters.
/// Used whenever no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ComparatorBuilt { strategy, reversed } => {
                metrics::with_state_mut(|m| {
                    metrics::count_comparator(&mut m.ops, strategy, reversed);
                });
            }

            MetricsEvent::NaturalFallback { kind } => {
                metrics::with_state_mut(|m| metrics::count_fallback(m, kind));
            }

            MetricsEvent::FrameSorted { rows } => {
                metrics::with_state_mut(|m| {
                    m.ops.frames_sorted = m.ops.frames_sorted.saturating_add(1);
                    m.ops.rows_sorted = m.ops.rows_sorted.saturating_add(rows);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the current thread's counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with `sink` receiving every event recorded on this thread.
///
/// The previous sink is restored on return, including on unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CapturingSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CapturingSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn global_sink_accumulates_counters() {
        metrics_reset_all();

        record(MetricsEvent::ComparatorBuilt {
            strategy: OrderStrategy::Numeric,
            reversed: true,
        });
        record(MetricsEvent::NaturalFallback {
            kind: FieldKind::Geo,
        });
        record(MetricsEvent::FrameSorted { rows: 7 });

        let report = metrics_report();
        assert_eq!(report.ops.numeric_comparators, 1);
        assert_eq!(report.ops.reversed_comparators, 1);
        assert_eq!(report.ops.frames_sorted, 1);
        assert_eq!(report.ops.rows_sorted, 7);
        assert_eq!(report.fallbacks.get("geo"), Some(&1));
    }

    #[test]
    fn override_captures_and_restores() {
        metrics_reset_all();
        let sink = Rc::new(CapturingSink::default());

        with_metrics_sink(sink.clone(), || {
            record(MetricsEvent::FrameSorted { rows: 2 });
        });
        record(MetricsEvent::FrameSorted { rows: 3 });

        assert_eq!(
            *sink.events.borrow(),
            vec![MetricsEvent::FrameSorted { rows: 2 }]
        );
        assert_eq!(metrics_report().ops.rows_sorted, 3);
    }
}
