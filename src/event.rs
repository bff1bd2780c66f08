//! Named events bundling transition rules.

use crate::error::{Error, Result};
use crate::state::State;
use crate::transition::Transition;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

struct EventInner<P: 'static> {
    id: Uuid,
    name: String,
    transitions: Vec<Transition<P>>,
}

/// A named, immutable set of transition rules fireable against a machine.
///
/// Construction validates the rule set: at most one rule per distinct
/// from-state (a duplicate is an authoring bug, never silently merged) and at
/// most one wildcard. Like [`State`], events compare by identity, so the same
/// event object must be registered on a machine for [`fire`] to accept it.
///
/// [`fire`]: crate::StateMachine::fire
///
/// # Example
///
/// ```rust
/// use stance::{Event, State, Transition};
///
/// let open: State<()> = State::new("open")?;
/// let closed: State<()> = State::new("closed")?;
///
/// let close = Event::new("close", vec![Transition::new(open.clone(), closed.clone())])?;
///
/// assert_eq!(close.resolve(&open), Some(&closed));
/// assert_eq!(close.resolve(&closed), None);
/// # Ok::<(), stance::Error>(())
/// ```
pub struct Event<P: 'static> {
    inner: Arc<EventInner<P>>,
}

impl<P> Event<P> {
    /// Create an event from an ordered list of rules.
    ///
    /// Fails with [`Error::EmptyName`] when `name` is empty,
    /// [`Error::NoTransitions`] when the list is empty,
    /// [`Error::DuplicateTransition`] when two rules share a from-state, and
    /// [`Error::MultipleWildcardTransitions`] when more than one rule omits
    /// its from-state.
    pub fn new(name: impl Into<String>, transitions: Vec<Transition<P>>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if transitions.is_empty() {
            return Err(Error::NoTransitions);
        }

        let mut seen_from = HashSet::with_capacity(transitions.len());
        let mut seen_wildcard = false;
        for transition in &transitions {
            match transition.from() {
                Some(from) => {
                    if !seen_from.insert(from.clone()) {
                        return Err(Error::DuplicateTransition {
                            from: from.name().to_owned(),
                        });
                    }
                }
                None => {
                    if seen_wildcard {
                        return Err(Error::MultipleWildcardTransitions);
                    }
                    seen_wildcard = true;
                }
            }
        }

        Ok(Self {
            inner: Arc::new(EventInner {
                id: Uuid::new_v4(),
                name,
                transitions,
            }),
        })
    }

    /// The event's name, as supplied at construction.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Resolve the state this event transitions into from `current`.
    ///
    /// A rule whose from-state is identical to `current` wins; the wildcard,
    /// if any, is the fallback. `None` means the event has no applicable rule.
    pub fn resolve(&self, current: &State<P>) -> Option<&State<P>> {
        let rules = &self.inner.transitions;
        rules
            .iter()
            .find(|rule| rule.from().is_some_and(|from| from == current))
            .or_else(|| rules.iter().find(|rule| rule.is_wildcard()))
            .map(Transition::to)
    }

    pub(crate) fn transitions(&self) -> &[Transition<P>] {
        &self.inner.transitions
    }
}

impl<P> Clone for Event<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> PartialEq for Event<P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<P> Eq for Event<P> {}

impl<P> std::hash::Hash for Event<P> {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.inner.id.hash(hasher);
    }
}

impl<P> fmt::Display for Event<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

impl<P> fmt::Debug for Event<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("transitions", &self.inner.transitions)
            .finish()
    }
}
