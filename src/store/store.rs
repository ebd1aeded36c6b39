//! The store itself: synchronous dispatch, a pure reducer, and change
//! notifications for whoever derives from the state.

use crate::store::actions::Action;
use crate::store::state::LocatorState;

type Listener = Box<dyn Fn(&LocatorState)>;

/// Redux-style store. All mutation happens inside [`Store::dispatch`],
/// synchronously and in dispatch order; listeners run after each
/// state-changing action.
pub struct Store {
    state: LocatorState,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(LocatorState::default())
    }

    /// Creates a store seeded with an initial state, e.g. a filter read
    /// from the page URL.
    pub fn with_state(state: LocatorState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &LocatorState {
        &self.state
    }

    /// Registers a change listener. Listeners observe the state after the
    /// reducer has run; they cannot mutate it.
    pub fn subscribe(&mut self, listener: impl Fn(&LocatorState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Applies an action and notifies listeners when the state changed.
    /// Returns whether it did.
    pub fn dispatch(&mut self, action: Action) -> bool {
        log::debug!("dispatch {:?}", action);
        let next = reduce(&self.state, action);
        if next == self.state {
            return false;
        }
        self.state = next;
        for listener in &self.listeners {
            listener(&self.state);
        }
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// The pure reducer: current state plus action gives the next state.
/// Unrelated parts of the state are carried over untouched.
fn reduce(state: &LocatorState, action: Action) -> LocatorState {
    let mut next = state.clone();
    match action {
        Action::OpenMarker(key) => next.map.open = Some(key),
        Action::CloseMarker => next.map.open = None,
        Action::SetSearchFilter(filter) => next.search = filter,
        Action::LoadLocations(locations) => next.locations = locations,
        Action::SetCenter(center) => next.map.center = center,
        Action::SetSearchOrigin(origin) => next.map.search_origin = origin,
        Action::SetSettings(settings) => next.settings = settings,
    }
    next
}
