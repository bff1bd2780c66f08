//! Named states with optional entry actions.

use crate::error::{Error, Result};
use crate::transition::Handoff;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Type alias for entry-action callbacks.
///
/// The callback receives the payload passed to [`StateMachine::fire`] and
/// either returns `None` (the machine settles in this state) or
/// `Some((state, payload))` to request an immediate follow-on transition.
/// Returning the pair is the only sanctioned way for an action to drive the
/// machine further: calling `fire` on the same machine from inside an action
/// deadlocks, because the machine's lane is not reentrant.
///
/// [`StateMachine::fire`]: crate::StateMachine::fire
pub type EntryAction<P> = Arc<dyn Fn(Option<P>) -> Option<Handoff<P>> + Send + Sync>;

struct StateInner<P: 'static> {
    id: Uuid,
    name: String,
    action: Option<EntryAction<P>>,
}

/// A named node in a state machine, optionally bound to an entry action.
///
/// States compare by identity, not by name: each construction yields a fresh
/// opaque id, and two states built from the same name are distinct objects.
/// The name exists for diagnostics and for the machine's separate
/// duplicate-name validation. Cloning a `State` clones a handle to the same
/// underlying node, so clones remain identical to the original.
///
/// # Example
///
/// ```rust
/// use stance::State;
///
/// let idle: stance::State<()> = State::new("idle")?;
/// let also_idle: stance::State<()> = State::new("idle")?;
///
/// assert_eq!(idle, idle.clone());
/// assert_ne!(idle, also_idle);
/// # Ok::<(), stance::Error>(())
/// ```
pub struct State<P: 'static> {
    inner: Arc<StateInner<P>>,
}

impl<P> State<P> {
    /// Create a state with no entry action.
    ///
    /// Fails with [`Error::EmptyName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::build(name.into(), None)
    }

    /// Create a state whose entry action runs every time the state becomes
    /// current.
    ///
    /// The action receives the payload flowing through the transition and may
    /// return `Some((state, payload))` to chain into a further transition; see
    /// [`EntryAction`] for the reentrancy contract.
    ///
    /// Fails with [`Error::EmptyName`] when `name` is empty.
    pub fn with_action(
        name: impl Into<String>,
        action: impl Fn(Option<P>) -> Option<Handoff<P>> + Send + Sync + 'static,
    ) -> Result<Self> {
        Self::build(name.into(), Some(Arc::new(action)))
    }

    fn build(name: String, action: Option<EntryAction<P>>) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            inner: Arc::new(StateInner {
                id: Uuid::new_v4(),
                name,
                action,
            }),
        })
    }

    /// The state's name, as supplied at construction.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn entry_action(&self) -> Option<&EntryAction<P>> {
        self.inner.action.as_ref()
    }
}

impl<P> Clone for State<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> PartialEq for State<P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<P> Eq for State<P> {}

impl<P> std::hash::Hash for State<P> {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.inner.id.hash(hasher);
    }
}

impl<P> fmt::Display for State<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

impl<P> fmt::Debug for State<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("entry_action", &self.inner.action.is_some())
            .finish()
    }
}
