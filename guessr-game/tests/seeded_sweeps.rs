use std::collections::HashSet;
use std::rc::Rc;

use guessr_game::{
    CelebrationConfig, CelebrationPlan, GuessEngine, GuessOutcome, GuessRange, RngBundle,
    seeded_engine,
};

#[test]
fn restarts_stay_in_range_and_vary() {
    let mut engine = seeded_engine(2024);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let secret = engine.secret();
        assert!(GuessRange::CLASSIC.contains(i64::from(secret)));
        seen.insert(secret);
        engine.restart();
    }
    assert!(seen.len() > 20, "secrets should vary, saw {}", seen.len());
}

#[test]
fn bisection_always_wins_within_seven_attempts() {
    for seed in 0..64_u64 {
        let mut engine = seeded_engine(seed);
        let (mut lo, mut hi) = (0_i32, 100_i32);
        loop {
            let guess = lo + (hi - lo) / 2;
            match engine.submit_value(i64::from(guess)) {
                GuessOutcome::Win { attempts, .. } => {
                    assert!(attempts <= 7, "seed {seed} took {attempts} attempts");
                    break;
                }
                GuessOutcome::Progress { direction, .. } => match direction {
                    guessr_game::Direction::Higher => lo = guess + 1,
                    guessr_game::Direction::Lower => hi = guess - 1,
                },
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }
}

#[test]
fn shared_bundle_keeps_secrets_independent_of_celebrations() {
    let cfg = CelebrationConfig::default_config();
    let quiet_bundle = Rc::new(RngBundle::from_user_seed(31));
    let noisy_bundle = Rc::new(RngBundle::from_user_seed(31));
    let mut quiet = GuessEngine::classic(Rc::clone(&quiet_bundle));
    let mut noisy = GuessEngine::classic(Rc::clone(&noisy_bundle));

    for _ in 0..5 {
        assert_eq!(quiet.secret(), noisy.secret());
        let secret = noisy.secret().to_string();
        assert!(noisy.submit(&secret).is_win());
        let plan = CelebrationPlan::draw(&mut *noisy_bundle.celebration(), &cfg);
        assert_eq!(plan.confetti.len(), 40);
        quiet.restart();
        noisy.restart();
    }
}
