//! The roster store.
//!
//! `RosterStore` owns a [`RosterState`] and is the only thing that mutates it.
//! Every change goes through [`RosterStore::dispatch`], which runs the reducer
//! for one [`Action`] to completion and returns the events it produced.

mod handler;
mod state;
mod view;

use roster_model::Record;
use tracing::debug_span;

use crate::config::FilterPolicy;
use crate::event::RosterEvent;
use crate::message::Action;

pub use state::RosterState;
pub use view::{PageView, RowView};

/// Pure reducer: current state + action → next state and its events.
pub fn reduce(mut state: RosterState, action: Action) -> (RosterState, Vec<RosterEvent>) {
    let events = state.apply(action);
    (state, events)
}

#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    state: RosterState,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(filter_policy: FilterPolicy) -> Self {
        Self {
            state: RosterState::with_policy(filter_policy),
        }
    }

    /// Create a store and seed it with `records`.
    pub fn from_records(records: Vec<Record>, filter_policy: FilterPolicy) -> Self {
        let mut store = Self::with_policy(filter_policy);
        store.dispatch(Action::Load(records));
        store
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Vec<RosterEvent> {
        let span = debug_span!("dispatch", action = action.name());
        let _guard = span.enter();
        let events = self.state.apply(action);
        debug_assert!(self.state.is_consistent(), "roster state invariants violated");
        events
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn page_view(&self) -> PageView {
        self.state.page_view()
    }

    pub fn into_state(self) -> RosterState {
        self.state
    }
}
