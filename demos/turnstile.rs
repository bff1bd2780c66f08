//! Turnstile State Machine
//!
//! The classic coin-operated turnstile: a coin unlocks it, a push rotates it
//! and locks it again.
//!
//! Key concepts:
//! - Entry actions reacting to state changes
//! - Self-referential rules as explicit no-ops (a second coin is swallowed
//!   without re-running the entry action)
//! - Observing the machine purely through entry actions
//!
//! Run with: cargo run --example turnstile

use stance::{Event, State, StateMachineBuilder, Transition};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let passages = Arc::new(AtomicUsize::new(0));

    let locked: State<()> = {
        let passages = Arc::clone(&passages);
        State::with_action("locked", move |_| {
            println!("  -> locked ({} passages so far)", passages.load(Ordering::SeqCst));
            None
        })
        .unwrap()
    };
    let unlocked: State<()> = {
        let passages = Arc::clone(&passages);
        State::with_action("unlocked", move |_| {
            passages.fetch_add(1, Ordering::SeqCst);
            println!("  -> unlocked, one passage paid for");
            None
        })
        .unwrap()
    };

    // A coin in an unlocked turnstile and a push against a locked one both
    // map a state onto itself: the machine treats that as a no-op.
    let coin = Event::new(
        "coin",
        vec![
            Transition::new(locked.clone(), unlocked.clone()),
            Transition::new(unlocked.clone(), unlocked.clone()),
        ],
    )
    .unwrap();
    let push = Event::new(
        "push",
        vec![
            Transition::new(unlocked.clone(), locked.clone()),
            Transition::new(locked.clone(), locked.clone()),
        ],
    )
    .unwrap();

    let turnstile = StateMachineBuilder::new("turnstile")
        .default_state(locked.clone())
        .states([locked, unlocked])
        .events([coin.clone(), push.clone()])
        .build()
        .unwrap();

    println!("\nVisitor pushes without paying:");
    turnstile.fire(&push, None).unwrap();
    println!("  (nothing happens)");

    println!("\nVisitor pays and passes:");
    turnstile.fire(&coin, None).unwrap();
    turnstile.fire(&push, None).unwrap();

    println!("\nVisitor pays twice, passes once:");
    turnstile.fire(&coin, None).unwrap();
    turnstile.fire(&coin, None).unwrap();
    turnstile.fire(&push, None).unwrap();

    println!("\nTotal passages: {}", passages.load(Ordering::SeqCst));
    println!("\n=== Example Complete ===");
}
