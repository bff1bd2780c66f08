//! Transition rules pairing a from-state (or wildcard) with a to-state.

use crate::state::State;
use std::fmt;

/// The pair an entry action returns to request an immediate follow-on
/// transition: the state to enter next and the payload to hand to its entry
/// action.
pub type Handoff<P> = (State<P>, Option<P>);

/// A single transition rule inside an [`Event`](crate::Event).
///
/// A rule either names the state it applies from, or is a wildcard that
/// matches any current state the event has no specific rule for. The wildcard
/// never overrides a specific match.
pub struct Transition<P: 'static> {
    from: Option<State<P>>,
    to: State<P>,
}

impl<P> Transition<P> {
    /// A rule applying only when `from` is the current state.
    pub fn new(from: State<P>, to: State<P>) -> Self {
        Self {
            from: Some(from),
            to,
        }
    }

    /// A fallback rule matching any current state not covered by a specific
    /// rule of the same event.
    pub fn wildcard(to: State<P>) -> Self {
        Self { from: None, to }
    }

    /// The from-state, or `None` for a wildcard rule.
    pub fn from(&self) -> Option<&State<P>> {
        self.from.as_ref()
    }

    /// The state this rule transitions into.
    pub fn to(&self) -> &State<P> {
        &self.to
    }

    /// Whether this rule is the event's wildcard fallback.
    pub fn is_wildcard(&self) -> bool {
        self.from.is_none()
    }
}

impl<P> Clone for Transition<P> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

impl<P> fmt::Debug for Transition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from.as_ref().map(State::name))
            .field("to", &self.to.name())
            .finish()
    }
}
