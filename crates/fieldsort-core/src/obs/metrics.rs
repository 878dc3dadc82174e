use fieldsort_primitives::{FieldKind, OrderStrategy};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, thread-local counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,

    /// Natural-order fallbacks keyed by the declared kind label.
    pub fallbacks: BTreeMap<String, u64>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Comparator construction, per resolved strategy
    pub numeric_comparators: u64,
    pub text_comparators: u64,
    pub boolean_comparators: u64,
    pub time_comparators: u64,
    pub natural_comparators: u64,
    pub reversed_comparators: u64,

    // Frame sorting
    pub frames_sorted: u64,
    pub rows_sorted: u64,
}

///
/// EventReport
/// Point-in-time copy of the counters.
///

pub type EventReport = EventState;

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(Clone::clone)
}

pub(crate) fn count_comparator(ops: &mut EventOps, strategy: OrderStrategy, reversed: bool) {
    let slot = match strategy {
        OrderStrategy::Numeric => &mut ops.numeric_comparators,
        OrderStrategy::Text => &mut ops.text_comparators,
        OrderStrategy::Boolean => &mut ops.boolean_comparators,
        OrderStrategy::Time => &mut ops.time_comparators,
        OrderStrategy::Natural => &mut ops.natural_comparators,
    };
    *slot = slot.saturating_add(1);

    if reversed {
        ops.reversed_comparators = ops.reversed_comparators.saturating_add(1);
    }
}

pub(crate) fn count_fallback(state: &mut EventState, kind: FieldKind) {
    let entry = state.fallbacks.entry(kind.label().to_string()).or_default();
    *entry = entry.saturating_add(1);
}
