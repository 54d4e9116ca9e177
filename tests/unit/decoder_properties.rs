//! Property tests for the decoder state machine and position counter.

use proptest::prelude::*;

use quadrature_debounce::{DecoderContext, EncoderState, Position, QuadratureDecoder};

fn pins() -> impl Strategy<Value = (bool, bool)> {
    (any::<bool>(), any::<bool>())
}

proptest! {
    /// Increments and decrements clamp to the u16 range.
    #[test]
    fn position_saturates(start in any::<u16>(), ops in prop::collection::vec(any::<bool>(), 0..512)) {
        let position = Position::new(start);
        let mut model = i32::from(start);

        for up in ops {
            let value = if up { position.increment() } else { position.decrement() };
            model = if up { (model + 1).min(65535) } else { (model - 1).max(0) };
            prop_assert_eq!(i32::from(value), model);
        }
        prop_assert_eq!(i32::from(position.get()), model);
    }

    /// Released contacts always return the machine to rest.
    #[test]
    fn reset_guard_from_any_history(
        threshold in 0u8..5,
        history in prop::collection::vec(pins(), 0..64),
    ) {
        let mut ctx = DecoderContext::new(threshold);
        for (a, b) in history {
            ctx.update(a, b);
        }

        ctx.update(false, false);
        prop_assert_eq!(ctx.state(), EncoderState::Idle);
        prop_assert_eq!(ctx.debounce_count(), 0);
    }

    /// Position moves by at most one per tick, and only when both contacts
    /// are engaged.
    #[test]
    fn at_most_one_step_per_tick(
        threshold in 0u8..5,
        start in 1u16..u16::MAX,
        ticks in prop::collection::vec(pins(), 0..128),
    ) {
        let position = Position::new(start);
        let mut decoder = QuadratureDecoder::builder()
            .debounce_threshold(threshold)
            .position(&position)
            .build()
            .unwrap();

        for (a, b) in ticks {
            let before = i32::from(position.get());
            let step = decoder.update(a, b);
            let after = i32::from(position.get());

            prop_assert!((after - before).abs() <= 1);
            if step.is_some() {
                prop_assert!(a && b);
            } else {
                prop_assert_eq!(after, before);
            }
            if let Some(direction) = step {
                let expected = (before + i32::from(direction.sign())).clamp(0, 65535);
                prop_assert_eq!(after, expected);
            }
        }
    }

    /// Arming needs the single-contact pattern to hold for threshold + 1 ticks.
    #[test]
    fn debounce_threshold_is_enforced(threshold in 0u8..8, held in 0u8..8) {
        let mut ctx = DecoderContext::new(threshold);
        for _ in 0..held {
            ctx.update(true, false);
        }

        if held == 0 {
            prop_assert_eq!(ctx.state(), EncoderState::Idle);
        } else if held <= threshold {
            prop_assert_eq!(ctx.state(), EncoderState::DebounceTowardA);
            prop_assert_eq!(ctx.debounce_count(), held);
        } else {
            prop_assert_eq!(ctx.state(), EncoderState::ArmedB);
        }
    }

    /// Interrupting the pattern before the threshold never arms or counts.
    #[test]
    fn interrupted_debounce_returns_to_idle(threshold in 1u8..8, held in 1u8..8) {
        prop_assume!(held <= threshold);

        let position = Position::new(100);
        let mut decoder = QuadratureDecoder::builder()
            .debounce_threshold(threshold)
            .position(&position)
            .build()
            .unwrap();

        for _ in 0..held {
            decoder.update(false, true);
        }
        decoder.update(true, true);

        prop_assert_eq!(decoder.state(), EncoderState::Idle);
        prop_assert_eq!(position.get(), 100);
    }

    /// A position override is read back exactly while no step completes.
    #[test]
    fn override_is_read_back(value in any::<u16>(), a in any::<bool>()) {
        let position = Position::new(0);
        let mut decoder = QuadratureDecoder::builder().position(&position).build().unwrap();

        decoder.set_position(value);
        decoder.update(a, false);
        prop_assert_eq!(decoder.position(), value);
    }
}
