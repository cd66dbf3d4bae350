//! Property tests: every at-bat sequence can be unwound exactly.

use proptest::prelude::*;

use scorebook_core::{apply_at_bat, reverse_at_bat, GameStatus, Half, Outcome, Play, Situation};

fn arb_situation() -> impl Strategy<Value = Situation> {
    (1u32..12, any::<bool>(), 0u8..3, 0u32..15, 0u32..15).prop_map(
        |(inning, top, outs, ours, theirs)| Situation {
            status: GameStatus::InProgress,
            our_score: ours,
            opponent_score: theirs,
            inning,
            half: Half::from_is_top(top),
            outs,
        },
    )
}

fn arb_play() -> impl Strategy<Value = Play> {
    (0usize..Outcome::ALL.len(), 0u32..5, any::<bool>()).prop_map(|(i, rbi, runner_scored)| Play {
        outcome: Outcome::ALL[i],
        rbi,
        runner_scored,
    })
}

proptest! {
    #[test]
    fn reverse_undoes_apply(start in arb_situation(), is_home in any::<bool>(), play in arb_play()) {
        let applied = apply_at_bat(&start, is_home, &play);
        let back = reverse_at_bat(&applied.situation, is_home, &play, &applied.stamp);
        prop_assert_eq!(back, start);
    }

    #[test]
    fn sequences_unwind_in_reverse_order(
        start in arb_situation(),
        is_home in any::<bool>(),
        plays in proptest::collection::vec(arb_play(), 0..60),
    ) {
        let mut history = vec![start];
        let mut stamps = Vec::with_capacity(plays.len());
        let mut current = start;

        for play in &plays {
            let applied = apply_at_bat(&current, is_home, play);
            let next = applied.situation;

            prop_assert!(next.outs < 3);
            prop_assert!(next.inning >= current.inning);
            prop_assert!(next.our_score >= current.our_score);
            prop_assert!(next.opponent_score >= current.opponent_score);
            if next.inning > current.inning {
                prop_assert_eq!(current.half, Half::Bottom);
                prop_assert_eq!(next.half, Half::Top);
            }
            prop_assert_eq!(applied.stamp.inning, current.inning);
            prop_assert_eq!(applied.stamp.half, current.half);

            stamps.push(applied.stamp);
            history.push(next);
            current = next;
        }

        for (play, stamp) in plays.iter().zip(stamps.iter()).rev() {
            history.pop();
            current = reverse_at_bat(&current, is_home, play, stamp);
            prop_assert_eq!(Some(&current), history.last());
        }
        prop_assert_eq!(current, start);
    }

    #[test]
    fn three_outs_always_flip_the_half(start in arb_situation(), is_home in any::<bool>()) {
        let triple_play = Play::new(Outcome::TriplePlay);
        let applied = apply_at_bat(&start, is_home, &triple_play);
        prop_assert_eq!(applied.situation.outs, 0);
        prop_assert_ne!(applied.situation.half, start.half);
        prop_assert_eq!(applied.stamp.outs_recorded, 3 - start.outs);
    }
}
