//! Property-based tests for the stopwatch state machine.
//!
//! Event sequences and clock movements are generated at random and the
//! machine is checked against its timing and transition guarantees.

use proptest::prelude::*;
use stopwatch::state::{lookup, Action, Clock, Event, ManualClock, State, StateMachine};

prop_compose! {
    fn arbitrary_event()(variant in 0..4u8) -> Event {
        match variant {
            0 => Event::Start,
            1 => Event::Pause,
            2 => Event::Continue,
            _ => Event::Stop,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> State {
        match variant {
            0 => State::Stopped,
            1 => State::Running,
            _ => State::Paused,
        }
    }
}

/// Drive a fresh machine through `steps`, advancing the clock before each event
fn drive(steps: &[(i64, Event)]) -> (StateMachine<ManualClock>, ManualClock, Vec<String>) {
    let clock = ManualClock::new(0);
    let mut machine = StateMachine::with_clock(clock.clone());
    let messages = steps
        .iter()
        .map(|(advance, event)| {
            clock.advance(*advance);
            match machine.handle(*event) {
                Ok(accepted) => accepted.message,
                Err(rejected) => rejected.message(),
            }
        })
        .collect();
    (machine, clock, messages)
}

proptest! {
    #[test]
    fn lookup_is_deterministic(state in arbitrary_state(), event in arbitrary_event()) {
        prop_assert_eq!(lookup(state, event), lookup(state, event));
    }

    #[test]
    fn handle_is_deterministic(
        steps in prop::collection::vec((0..100i64, arbitrary_event()), 0..30)
    ) {
        let (first, _, first_messages) = drive(&steps);
        let (second, _, second_messages) = drive(&steps);

        prop_assert_eq!(first.state(), second.state());
        prop_assert_eq!(first.timer(), second.timer());
        prop_assert_eq!(first_messages, second_messages);
    }

    #[test]
    fn rejected_events_change_nothing(
        steps in prop::collection::vec((0..100i64, arbitrary_event()), 0..30),
        event in arbitrary_event(),
        advance in 0..100i64,
    ) {
        let (mut machine, clock, _) = drive(&steps);
        let state = machine.state();
        let timer = machine.timer().clone();

        if lookup(state, event).is_err() {
            clock.advance(advance);
            prop_assert!(machine.handle(event).is_err());
            prop_assert_eq!(machine.state(), state);
            prop_assert_eq!(machine.timer(), &timer);
        }
    }

    #[test]
    fn accumulated_never_decreases_within_an_epoch(
        steps in prop::collection::vec((0..100i64, arbitrary_event()), 1..40)
    ) {
        let clock = ManualClock::new(0);
        let mut machine = StateMachine::with_clock(clock.clone());
        let mut last = 0u64;

        for (advance, event) in steps {
            clock.advance(advance);
            if let Ok(accepted) = machine.handle(event) {
                if accepted.action == Action::BeginTiming {
                    prop_assert_eq!(accepted.accumulated_seconds, 0);
                } else {
                    prop_assert!(accepted.accumulated_seconds >= last);
                }
                last = accepted.accumulated_seconds;
            }
        }
    }

    #[test]
    fn repeated_stop_is_idempotent(
        elapsed in 0..1_000i64,
        repeats in 1..10usize,
        gap in 0..1_000i64,
    ) {
        let clock = ManualClock::new(0);
        let mut machine = StateMachine::with_clock(clock.clone());
        machine.handle(Event::Start).unwrap();
        clock.advance(elapsed);
        machine.handle(Event::Stop).unwrap();

        for _ in 0..repeats {
            clock.advance(gap);
            let outcome = machine.handle(Event::Stop).unwrap();
            prop_assert_eq!(outcome.action, Action::None);
            prop_assert_eq!(outcome.accumulated_seconds, elapsed as u64);
            prop_assert_eq!(machine.state(), State::Stopped);
        }
    }

    #[test]
    fn segments_are_conserved(
        t1 in 0..10_000i64,
        t2 in 0..10_000i64,
        t3 in 0..10_000i64,
        idle1 in 0..10_000i64,
        idle2 in 0..10_000i64,
    ) {
        let clock = ManualClock::new(1_700_000_000);
        let mut machine = StateMachine::with_clock(clock.clone());

        machine.handle(Event::Start).unwrap();
        clock.advance(t1);
        let first = machine.handle(Event::Pause).unwrap();
        clock.advance(idle1);
        machine.handle(Event::Continue).unwrap();
        clock.advance(t2);
        let second = machine.handle(Event::Pause).unwrap();
        clock.advance(idle2);
        machine.handle(Event::Continue).unwrap();
        clock.advance(t3);
        let stopped = machine.handle(Event::Stop).unwrap();

        prop_assert_eq!(first.accumulated_seconds, t1 as u64);
        prop_assert_eq!(second.accumulated_seconds, (t1 + t2) as u64);
        prop_assert_eq!(stopped.accumulated_seconds, (t1 + t2 + t3) as u64);
        prop_assert_eq!(
            stopped.message,
            format!("Timer stopped. Total time: {} seconds.", t1 + t2 + t3)
        );
    }

    #[test]
    fn backwards_clock_never_goes_negative(back in 1..1_000i64) {
        let clock = ManualClock::new(10_000);
        let mut machine = StateMachine::with_clock(clock.clone());

        machine.handle(Event::Start).unwrap();
        clock.set(clock.now() - back);
        let stopped = machine.handle(Event::Stop).unwrap();

        prop_assert_eq!(stopped.accumulated_seconds, 0);
    }
}
