//! Builder for assembling state machines with a fluent API.

use crate::error::{Error, Result};
use crate::event::Event;
use crate::machine::StateMachine;
use crate::state::State;

/// Builder for [`StateMachine`] with a fluent API.
///
/// Accumulates states, events and the default state, then hands the whole
/// definition to [`StateMachine::new`], so all graph validation lives in one
/// place. The only check the builder adds is that a default state was
/// supplied at all.
///
/// # Example
///
/// ```rust
/// use stance::{Event, State, StateMachineBuilder, Transition};
///
/// let off: State<()> = State::new("off")?;
/// let on: State<()> = State::new("on")?;
/// let toggle = Event::new(
///     "toggle",
///     vec![
///         Transition::new(off.clone(), on.clone()),
///         Transition::new(on.clone(), off.clone()),
///     ],
/// )?;
///
/// let machine = StateMachineBuilder::new("switch")
///     .default_state(off.clone())
///     .states([off, on])
///     .event(toggle.clone())
///     .build()?;
///
/// machine.fire(&toggle, None)?;
/// # Ok::<(), stance::Error>(())
/// ```
pub struct StateMachineBuilder<P: 'static> {
    name: String,
    default: Option<State<P>>,
    states: Vec<State<P>>,
    events: Vec<Event<P>>,
}

impl<P> StateMachineBuilder<P> {
    /// Create a builder for a machine with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            states: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Set the default state (required). Must also be registered via
    /// [`state`](Self::state) or [`states`](Self::states).
    pub fn default_state(mut self, state: State<P>) -> Self {
        self.default = Some(state);
        self
    }

    /// Register a single state.
    pub fn state(mut self, state: State<P>) -> Self {
        self.states.push(state);
        self
    }

    /// Register multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = State<P>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Register a single event.
    pub fn event(mut self, event: Event<P>) -> Self {
        self.events.push(event);
        self
    }

    /// Register multiple events at once.
    pub fn events(mut self, events: impl IntoIterator<Item = Event<P>>) -> Self {
        self.events.extend(events);
        self
    }

    /// Build the machine, validating the accumulated definition.
    ///
    /// Fails with [`Error::MissingDefaultState`] when no default state was
    /// set; every other failure comes from [`StateMachine::new`].
    pub fn build(self) -> Result<StateMachine<P>> {
        let default = self.default.ok_or(Error::MissingDefaultState)?;
        StateMachine::new(self.name, default, self.states, self.events)
    }
}

impl<P> Default for StateMachineBuilder<P> {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Transition;

    fn state(name: &str) -> State<()> {
        State::new(name).unwrap()
    }

    #[test]
    fn requires_default_state() {
        let a = state("a");
        let go = Event::new("go", vec![Transition::wildcard(a.clone())]).unwrap();

        let result = StateMachineBuilder::new("m").state(a).event(go).build();

        assert_eq!(result.unwrap_err(), Error::MissingDefaultState);
    }

    #[test]
    fn delegates_graph_validation_to_the_machine() {
        let a = state("a");
        let go = Event::new("go", vec![Transition::wildcard(a.clone())]).unwrap();

        let result = StateMachineBuilder::new("m")
            .default_state(a)
            .event(go)
            .build();

        assert_eq!(result.unwrap_err(), Error::NoStatesDefined);
    }

    #[test]
    fn builds_a_working_machine() {
        let a = state("a");
        let b = state("b");
        let forward = Event::new("forward", vec![Transition::new(a.clone(), b.clone())]).unwrap();
        let back = Event::new("back", vec![Transition::new(b.clone(), a.clone())]).unwrap();

        let machine = StateMachineBuilder::new("m")
            .default_state(a.clone())
            .states([a, b])
            .events([forward.clone(), back.clone()])
            .build()
            .unwrap();

        assert_eq!(machine.name(), "m");
        machine.fire(&forward, None).unwrap();
        machine.fire(&back, None).unwrap();
    }

    #[test]
    fn default_builder_has_empty_name() {
        let a = state("a");
        let go = Event::new("go", vec![Transition::wildcard(a.clone())]).unwrap();

        let machine = StateMachineBuilder::default()
            .default_state(a.clone())
            .state(a)
            .event(go)
            .build()
            .unwrap();

        assert_eq!(machine.name(), "");
    }
}
