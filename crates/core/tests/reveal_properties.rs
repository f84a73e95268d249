//! Property-based tests for the reveal coordinator and typewriter using proptest.
//!
//! Properties verified:
//! - An element is revealed at most once and never un-reveals
//! - Elements seen together reveal in registration order
//! - Typewriter text is always a prefix of some phrase

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::testing::VirtualScheduler;
use folio_core::{RevealCoordinator, RevealTarget, TypingConfig, Typewriter};
use proptest::prelude::*;

#[derive(Clone)]
struct Probe {
    shows: Rc<Cell<u32>>,
}

impl Probe {
    fn new() -> Self {
        Self {
            shows: Rc::new(Cell::new(0)),
        }
    }
}

impl RevealTarget for Probe {
    fn show(&self) {
        self.shows.set(self.shows.get() + 1);
    }
}

// ==========================================================================
// PROPERTY: Reveal is one-way
// ==========================================================================

proptest! {
    /// Property: whatever the sequence of intersections and clock advances,
    /// the revealed count never decreases and no element is shown twice.
    #[test]
    fn prop_reveal_is_monotonic(
        count in 1usize..12,
        stagger in 0u32..300,
        steps in prop::collection::vec((0usize..16, 0u64..400), 0..60),
    ) {
        let clock = VirtualScheduler::new();
        let probes: Vec<Probe> = (0..count).map(|_| Probe::new()).collect();
        let coordinator = RevealCoordinator::register(probes.clone(), stagger, clock.clone());

        let mut previously_revealed = vec![false; count];
        let mut last_count = 0;
        for (index, advance) in steps {
            coordinator.on_intersect(index);
            clock.advance(advance);

            let now = coordinator.revealed_count();
            prop_assert!(now >= last_count);
            last_count = now;

            for (i, was) in previously_revealed.iter_mut().enumerate() {
                let is = coordinator.is_revealed(i);
                prop_assert!(!(*was && !is), "element {} un-revealed", i);
                *was = is;
            }
        }

        clock.advance(u64::from(stagger) * count as u64 + 1);
        for probe in &probes {
            prop_assert!(probe.shows.get() <= 1);
        }
    }

    /// Property: elements that intersect in the same instant reveal in
    /// registration order.
    #[test]
    fn prop_stagger_preserves_order(
        count in 1usize..20,
        stagger in 1u32..250,
        seen in prop::collection::vec(any::<bool>(), 20),
    ) {
        let clock = VirtualScheduler::new();
        let times: Rc<RefCell<Vec<(usize, u64)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&times);
        let hook_clock = clock.clone();
        let coordinator = RevealCoordinator::register((0..count).map(|_| Probe::new()), stagger, clock.clone())
            .with_reveal_hook(move |i| sink.borrow_mut().push((i, hook_clock.now_ms())));

        for i in (0..count).filter(|i| seen[*i]) {
            coordinator.on_intersect(i);
        }
        while clock.run_next() {}

        let times = times.borrow();
        for pair in times.windows(2) {
            let (i, ti) = pair[0];
            let (j, tj) = pair[1];
            prop_assert!(i < j);
            prop_assert!(ti <= tj);
            prop_assert_eq!(ti, u64::from(stagger) * i as u64);
        }
    }
}

// ==========================================================================
// PROPERTY: Typewriter only ever shows phrase prefixes
// ==========================================================================

proptest! {
    #[test]
    fn prop_typewriter_shows_prefixes(
        phrases in prop::collection::vec("[a-zé✨ ]{0,8}", 1..5),
        ticks in 0usize..200,
    ) {
        let mut typewriter = Typewriter::new(phrases.clone(), TypingConfig::default()).unwrap();
        for _ in 0..ticks {
            let frame = typewriter.tick();
            prop_assert!(
                phrases.iter().any(|p| p.starts_with(frame.text.as_str())),
                "{:?} is not a prefix of any phrase",
                frame.text
            );
        }
    }
}
