//! Concurrent firing against a single machine.
//!
//! Entry actions and state changes are serialized on the machine's lane, so
//! hammering one toggling event from many threads must account for every
//! fire exactly once.

use stance::{Event, State, StateMachineBuilder, Transition};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const FIRES_PER_THREAD: usize = 250;

#[test]
fn toggling_from_many_threads_accounts_for_every_fire() {
    let a_entries = Arc::new(AtomicUsize::new(0));
    let b_entries = Arc::new(AtomicUsize::new(0));

    let count = Arc::clone(&a_entries);
    let a: State<()> = State::with_action("a", move |_| {
        count.fetch_add(1, Ordering::SeqCst);
        None
    })
    .unwrap();
    let count = Arc::clone(&b_entries);
    let b: State<()> = State::with_action("b", move |_| {
        count.fetch_add(1, Ordering::SeqCst);
        None
    })
    .unwrap();

    let toggle = Event::new(
        "toggle",
        vec![
            Transition::new(a.clone(), b.clone()),
            Transition::new(b.clone(), a.clone()),
        ],
    )
    .unwrap();
    let from_a = Event::new("from_a", vec![Transition::new(a.clone(), b.clone())]).unwrap();

    let machine = Arc::new(
        StateMachineBuilder::new("hammer")
            .default_state(a.clone())
            .states([a, b])
            .events([toggle.clone(), from_a.clone()])
            .build()
            .unwrap(),
    );

    // Entering the default state counts once before any fire.
    assert_eq!(a_entries.load(Ordering::SeqCst), 1);

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let machine = Arc::clone(&machine);
            let toggle = toggle.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..FIRES_PER_THREAD {
                    machine.fire(&toggle, None).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Every fire toggled exactly once: 1 construction entry plus N*M fires.
    let total = THREADS * FIRES_PER_THREAD;
    assert_eq!(
        a_entries.load(Ordering::SeqCst) + b_entries.load(Ordering::SeqCst),
        1 + total
    );
    // An even fire count lands back in a, so the entries split evenly.
    assert_eq!(a_entries.load(Ordering::SeqCst), 1 + total / 2);
    assert_eq!(b_entries.load(Ordering::SeqCst), total / 2);

    // The final state is deterministic: from_a only applies from a.
    machine.fire(&from_a, None).unwrap();
    assert_eq!(b_entries.load(Ordering::SeqCst), total / 2 + 1);
}
