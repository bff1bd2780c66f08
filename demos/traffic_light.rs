//! Traffic Light State Machine
//!
//! A cyclic traffic light with a fault mode.
//!
//! Key concepts:
//! - Wildcard rules: the fault event fires from any state
//! - Chained transitions: resetting passes through a self-test state whose
//!   entry action immediately hands control on to red
//! - Payloads: the fault description flows through to the entry action
//!
//! Run with: cargo run --example traffic_light

use stance::{Event, State, StateMachineBuilder, Transition};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let red: State<String> = State::with_action("red", |_| {
        println!("  RED - stop");
        None
    })
    .unwrap();
    let green: State<String> = State::with_action("green", |_| {
        println!("  GREEN - go");
        None
    })
    .unwrap();
    let yellow: State<String> = State::with_action("yellow", |_| {
        println!("  YELLOW - caution");
        None
    })
    .unwrap();
    let fault: State<String> = State::with_action("fault", |reason: Option<String>| {
        println!(
            "  FAULT - flashing ({})",
            reason.as_deref().unwrap_or("unknown cause")
        );
        None
    })
    .unwrap();
    // Entering self_test chains straight into red once the check passes.
    let self_test: State<String> = {
        let red = red.clone();
        State::with_action("self_test", move |_| {
            println!("  SELF TEST - lamps ok, resuming");
            Some((red.clone(), None))
        })
        .unwrap()
    };

    let go = Event::new("go", vec![Transition::new(red.clone(), green.clone())]).unwrap();
    let caution = Event::new(
        "caution",
        vec![Transition::new(green.clone(), yellow.clone())],
    )
    .unwrap();
    let stop = Event::new("stop", vec![Transition::new(yellow.clone(), red.clone())]).unwrap();
    let fail = Event::new("fail", vec![Transition::wildcard(fault.clone())]).unwrap();
    let reset = Event::new(
        "reset",
        vec![Transition::new(fault.clone(), self_test.clone())],
    )
    .unwrap();

    let light = StateMachineBuilder::new("traffic_light")
        .default_state(red.clone())
        .states([red, green, yellow, fault, self_test])
        .events([go.clone(), caution.clone(), stop.clone(), fail.clone(), reset.clone()])
        .build()
        .unwrap();

    println!("\nNormal cycle:");
    light.fire(&go, None).unwrap();
    light.fire(&caution, None).unwrap();
    light.fire(&stop, None).unwrap();

    println!("\nFault strikes mid-cycle:");
    light.fire(&go, None).unwrap();
    light
        .fire(&fail, Some("lamp controller watchdog".to_owned()))
        .unwrap();

    println!("\nReset chains through the self test back to red:");
    light.fire(&reset, None).unwrap();

    println!("\nBack in service:");
    light.fire(&go, None).unwrap();

    println!("\n=== Example Complete ===");
}
