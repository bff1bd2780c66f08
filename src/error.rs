//! Error types for machine definition and event firing.

use thiserror::Error;

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while defining states, events and machines, or while firing
/// an event.
///
/// Definition errors are returned by the constructors ([`State::new`],
/// [`Event::new`], [`StateMachine::new`] and the builder); firing errors are
/// returned by [`StateMachine::fire`]. Because a machine forces its initial
/// transition during construction, [`StateMachine::new`] can also surface
/// [`Error::UndefinedState`] when the default state's entry action chains
/// into a state the machine does not know.
///
/// [`State::new`]: crate::State::new
/// [`Event::new`]: crate::Event::new
/// [`StateMachine::new`]: crate::StateMachine::new
/// [`StateMachine::fire`]: crate::StateMachine::fire
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Duplicate transition from state '{from}'")]
    DuplicateTransition { from: String },

    #[error("Multiple wildcard transitions defined. At most one rule may omit its from-state")]
    MultipleWildcardTransitions,

    #[error("No states defined. Add at least one state")]
    NoStatesDefined,

    #[error("No events defined. Add at least one event")]
    NoEventsDefined,

    /// The same state object was registered twice on one machine.
    #[error("State '{name}' defined twice")]
    DuplicateState { name: String },

    /// Two distinct state objects carry the same name. States compare by
    /// identity, so this is reported separately from [`Error::DuplicateState`].
    #[error("Two distinct states share the name '{name}'")]
    DuplicateStateName { name: String },

    #[error("Event '{name}' defined twice")]
    DuplicateEvent { name: String },

    #[error("Two distinct events share the name '{name}'")]
    DuplicateEventName { name: String },

    #[error("Event '{event}' transitions from undefined state '{state}'")]
    UnknownFromState { event: String, state: String },

    #[error("Event '{event}' transitions to undefined state '{state}'")]
    UnknownToState { event: String, state: String },

    #[error("Default state '{name}' is not among the machine's states")]
    UndefinedDefaultState { name: String },

    /// The fired event is not registered on this machine. Guards against
    /// reusing an event across machines it was never defined on.
    #[error("Event '{name}' is not defined on this machine")]
    UndefinedEvent { name: String },

    #[error("No transition available from state '{from}'")]
    NoTransition { from: String },

    /// An entry action requested a transition into a state the machine does
    /// not know. The state assignments made before the bad request are kept.
    #[error("Entry action chained into undefined state '{name}'")]
    UndefinedState { name: String },

    #[error("Default state not specified. Call .default_state(state) before .build()")]
    MissingDefaultState,
}
