//! The state machine: validation, event firing and the state-change loop.

use crate::error::{Error, Result};
use crate::event::Event;
use crate::state::State;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// An event-driven state machine over a validated set of states and events.
///
/// Construction validates the whole definition graph and then enters the
/// default state, running its entry action exactly once. After that, [`fire`]
/// is the sole way to move the machine: it resolves the fired event against
/// the current state and runs the state-change loop, applying any follow-on
/// transitions the entry actions request.
///
/// All state changes and entry actions of one machine are serialized on a
/// single internal lane, so `fire` may be called concurrently from any number
/// of threads. The lane is not reentrant: an entry action must never call
/// `fire` on its own machine, and instead returns the next `(state, payload)`
/// pair to keep going.
///
/// The machine deliberately has no current-state query. Callers observe
/// transitions through entry actions only.
///
/// [`fire`]: StateMachine::fire
///
/// # Example
///
/// ```rust
/// use stance::{Event, State, StateMachine, Transition};
///
/// let locked: State<()> = State::new("locked")?;
/// let unlocked: State<()> = State::new("unlocked")?;
///
/// let coin = Event::new("coin", vec![Transition::new(locked.clone(), unlocked.clone())])?;
/// let push = Event::new("push", vec![Transition::new(unlocked.clone(), locked.clone())])?;
///
/// let machine = StateMachine::new(
///     "turnstile",
///     locked.clone(),
///     vec![locked, unlocked],
///     vec![coin.clone(), push.clone()],
/// )?;
///
/// machine.fire(&coin, None)?;
/// machine.fire(&push, None)?;
/// assert!(machine.fire(&push, None).is_err());
/// # Ok::<(), stance::Error>(())
/// ```
pub struct StateMachine<P: 'static> {
    name: String,
    states: HashSet<State<P>>,
    events: HashSet<Event<P>>,
    current: Mutex<State<P>>,
}

impl<P> StateMachine<P> {
    /// Validate a definition graph and construct the machine in its default
    /// state.
    ///
    /// Validation fails on the first violation, in this order: empty state
    /// list, empty event list, duplicate states (by identity, then by name),
    /// duplicate events and dangling transition references, undefined default
    /// state. On success the default state is entered through the same
    /// state-change loop `fire` uses, so its entry action runs once and may
    /// chain further; a chain into an unregistered state fails construction
    /// with [`Error::UndefinedState`].
    pub fn new(
        name: impl Into<String>,
        default_state: State<P>,
        states: Vec<State<P>>,
        events: Vec<Event<P>>,
    ) -> Result<Self> {
        if states.is_empty() {
            return Err(Error::NoStatesDefined);
        }
        if events.is_empty() {
            return Err(Error::NoEventsDefined);
        }

        let mut state_set = HashSet::with_capacity(states.len());
        let mut state_names = HashSet::with_capacity(states.len());
        for state in states {
            if state_set.contains(&state) {
                return Err(Error::DuplicateState {
                    name: state.name().to_owned(),
                });
            }
            if !state_names.insert(state.name().to_owned()) {
                return Err(Error::DuplicateStateName {
                    name: state.name().to_owned(),
                });
            }
            state_set.insert(state);
        }

        let mut event_set = HashSet::with_capacity(events.len());
        let mut event_names = HashSet::with_capacity(events.len());
        for event in events {
            if event_set.contains(&event) {
                return Err(Error::DuplicateEvent {
                    name: event.name().to_owned(),
                });
            }
            if !event_names.insert(event.name().to_owned()) {
                return Err(Error::DuplicateEventName {
                    name: event.name().to_owned(),
                });
            }
            for transition in event.transitions() {
                if let Some(from) = transition.from() {
                    if !state_set.contains(from) {
                        return Err(Error::UnknownFromState {
                            event: event.name().to_owned(),
                            state: from.name().to_owned(),
                        });
                    }
                }
                if !state_set.contains(transition.to()) {
                    return Err(Error::UnknownToState {
                        event: event.name().to_owned(),
                        state: transition.to().name().to_owned(),
                    });
                }
            }
            event_set.insert(event);
        }

        if !state_set.contains(&default_state) {
            return Err(Error::UndefinedDefaultState {
                name: default_state.name().to_owned(),
            });
        }

        let machine = Self {
            name: name.into(),
            states: state_set,
            events: event_set,
            current: Mutex::new(default_state.clone()),
        };

        // Initial transition into the default state. There is no prior state
        // to short-circuit against, so the entry chain runs unconditionally.
        {
            let mut current = machine.current.lock();
            machine.run_entry_chain(&mut current, default_state, None)?;
        }

        Ok(machine)
    }

    /// The machine's name. Free-form, not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fire an event, advancing the machine through the resolved transition
    /// and any follow-on transitions its entry actions request.
    ///
    /// Blocks the calling thread until the whole chain completes; concurrent
    /// calls from other threads queue on the machine's lane. Fails with
    /// [`Error::UndefinedEvent`] when `event` is not registered on this
    /// machine, and with [`Error::NoTransition`] when the event has no rule
    /// applicable from the current state; the current state is then left
    /// unchanged. A mid-chain [`Error::UndefinedState`] failure keeps the
    /// state assignments made before it; the engine never rolls back.
    ///
    /// An entry action must not call `fire` on the same machine; the lane is
    /// not reentrant and the call would deadlock. Actions chain by returning
    /// the next `(state, payload)` pair instead.
    pub fn fire(&self, event: &Event<P>, payload: Option<P>) -> Result<()> {
        if !self.events.contains(event) {
            return Err(Error::UndefinedEvent {
                name: event.name().to_owned(),
            });
        }

        let mut current = self.current.lock();
        let Some(target) = event.resolve(&current).cloned() else {
            return Err(Error::NoTransition {
                from: current.name().to_owned(),
            });
        };
        self.change_state(&mut current, target, payload)
    }

    /// One requested state change. A request naming the state that is already
    /// current is a no-op and runs no entry action.
    fn change_state(
        &self,
        current: &mut State<P>,
        target: State<P>,
        payload: Option<P>,
    ) -> Result<()> {
        if target == *current {
            return Ok(());
        }
        *current = target.clone();
        self.run_entry_chain(current, target, payload)
    }

    /// Run the entry action of a just-entered state, applying each follow-on
    /// transition it returns until an action yields nothing, a state with no
    /// action is reached, or a chained target repeats the state it came from.
    ///
    /// The loop is iterative, so chain length never grows the stack, and it
    /// has no cycle guard: actions that keep requesting transitions forever
    /// hang the calling thread. That is the caller's contract to uphold.
    fn run_entry_chain(
        &self,
        current: &mut State<P>,
        entered: State<P>,
        payload: Option<P>,
    ) -> Result<()> {
        let mut entered = entered;
        let mut payload = payload;
        loop {
            let Some(action) = entered.entry_action().map(Arc::clone) else {
                return Ok(());
            };
            let Some((next, next_payload)) = action(payload) else {
                return Ok(());
            };
            if !self.states.contains(&next) {
                return Err(Error::UndefinedState {
                    name: next.name().to_owned(),
                });
            }
            if next == *current {
                return Ok(());
            }
            *current = next.clone();
            entered = next;
            payload = next_payload;
        }
    }
}

impl<P> fmt::Debug for StateMachine<P> {
    // Deliberately omits the current state: it is not a queryable property,
    // and formatting must not touch the lane.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("states", &self.states.len())
            .field("events", &self.events.len())
            .finish()
    }
}
