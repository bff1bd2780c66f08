//! Stance: an event-driven finite state machine engine.
//!
//! A caller defines named [`State`]s (each optionally carrying an entry
//! action), named [`Event`]s (each mapping from-states to a to-state, with an
//! optional wildcard fallback), and assembles them into a [`StateMachine`]
//! with a default state. Firing an event advances the machine; entry actions
//! may return a follow-on transition, which the engine applies in the same
//! serialized pass.
//!
//! # Core Concepts
//!
//! - **Identity, not names**: states and events compare by object identity.
//!   Two states named `"open"` are different states unless one is a clone of
//!   the other.
//! - **One lane per machine**: all state changes and entry actions of a
//!   machine are serialized; `fire` is safe to call from any thread, and
//!   blocks until the transition (including chained transitions) completes.
//! - **No current-state query**: the machine exposes no way to read its
//!   current state. Callers react to transitions inside entry actions.
//!
//! # Example
//!
//! ```rust
//! use stance::{Event, State, StateMachineBuilder, Transition};
//!
//! let closed: State<&str> = State::new("closed")?;
//! let open = State::with_action("open", |who: Option<&str>| {
//!     println!("opened by {}", who.unwrap_or("someone"));
//!     None
//! })?;
//!
//! let open_door = Event::new("open_door", vec![Transition::new(closed.clone(), open.clone())])?;
//! let close_door = Event::new("close_door", vec![Transition::new(open.clone(), closed.clone())])?;
//!
//! let door = StateMachineBuilder::new("door")
//!     .default_state(closed.clone())
//!     .states([closed, open])
//!     .events([open_door.clone(), close_door.clone()])
//!     .build()?;
//!
//! door.fire(&open_door, Some("alice"))?;
//! door.fire(&close_door, None)?;
//! # Ok::<(), stance::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod machine;
pub mod state;
pub mod transition;

pub use builder::StateMachineBuilder;
pub use error::{Error, Result};
pub use event::Event;
pub use machine::StateMachine;
pub use state::{EntryAction, State};
pub use transition::{Handoff, Transition};
