//! Property-based tests for Tsetlin Machine.

use proptest::prelude::*;
use tsetlin_machine::{
    Automaton, Clause, Config, Hyperparams, Polarity, TsetlinMachine, feedback::type_ii,
    utils::rng_from_seed
};

/// Random binary vector of length `n`.
fn bits(n: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=1, n)
}

/// Dimensions plus a training sequence of (input, target) pairs.
fn training_run() -> impl Strategy<Value = (usize, usize, usize, Vec<(Vec<u8>, Vec<u8>)>)> {
    (1usize..6, 1usize..4, 1usize..9).prop_flat_map(|(n_inputs, n_outputs, n_clauses)| {
        let samples = prop::collection::vec((bits(n_inputs), bits(n_outputs)), 1..40);
        (Just(n_inputs), Just(n_outputs), Just(n_clauses), samples)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Inclusion sets match automaton signs after any learning sequence.
    #[test]
    fn inclusion_matches_automata(
        (n_inputs, n_outputs, n_clauses, samples) in training_run(),
        s in 1.5f32..10.0,
        t in 1i32..20,
        seed in 0u64..1000
    ) {
        let mut tm = TsetlinMachine::create(n_inputs, n_outputs, n_clauses).unwrap();
        let mut rng = rng_from_seed(seed);

        for (x, y) in &samples {
            tm.activate(x).unwrap();
            tm.learn(y, s, t, &mut rng).unwrap();
        }

        for unit in tm.output_units() {
            for clause in unit.clauses() {
                for (i, a) in clause.automata().iter().enumerate() {
                    prop_assert_eq!(clause.is_included(i), a.state() > 0);
                }
            }
        }
    }

    /// Two activations on the same input without learning agree.
    #[test]
    fn activation_idempotent(
        (n_inputs, n_outputs, n_clauses, samples) in training_run(),
        seed in 0u64..1000
    ) {
        let mut tm = TsetlinMachine::create(n_inputs, n_outputs, n_clauses).unwrap();
        let mut rng = rng_from_seed(seed);

        for (x, y) in &samples {
            tm.activate(x).unwrap();
            tm.learn(y, 4.0, 4, &mut rng).unwrap();
        }

        let probe = &samples[0].0;
        let first = tm.activate(probe).unwrap().to_vec();
        let second = tm.activate(probe).unwrap().to_vec();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, tm.predict(probe).unwrap());
    }

    /// Bounded automata stay in [-bound, bound] under training.
    #[test]
    fn bounded_states_stay_in_range(
        (n_inputs, n_outputs, n_clauses, samples) in training_run(),
        bound in 1i32..6,
        seed in 0u64..1000
    ) {
        let config = Config::builder()
            .inputs(n_inputs)
            .outputs(n_outputs)
            .clauses(n_clauses)
            .state_bound(bound)
            .build()
            .unwrap();
        let mut tm = TsetlinMachine::new(config).unwrap();
        let mut rng = rng_from_seed(seed);

        for _ in 0..5 {
            for (x, y) in &samples {
                tm.activate(x).unwrap();
                tm.learn(y, 2.0, 3, &mut rng).unwrap();
            }
        }

        for unit in tm.output_units() {
            for clause in unit.clauses() {
                for a in clause.automata() {
                    prop_assert!(a.state() >= -bound && a.state() <= bound);
                }
            }
        }
        prop_assert!(tm.is_consistent());
    }

    /// Automaton state tracks increments minus decrements when unbounded.
    #[test]
    fn automaton_unbounded_counts(
        increments in 0i32..500,
        decrements in 0i32..500
    ) {
        let mut a = Automaton::new();
        for _ in 0..increments {
            a.increment();
        }
        for _ in 0..decrements {
            a.decrement();
        }
        prop_assert_eq!(a.state(), increments - decrements);
        prop_assert_eq!(a.action(), increments > decrements);
    }

    /// Fresh machine: every clause fires, so the sum is
    /// (#even indices) - (#odd indices).
    #[test]
    fn fresh_machine_sum(
        n_inputs in 1usize..8,
        n_outputs in 1usize..4,
        n_clauses in 1usize..20,
        input in bits(8)
    ) {
        let mut tm = TsetlinMachine::create(n_inputs, n_outputs, n_clauses).unwrap();
        let x = &input[..n_inputs];

        let expected_sum = (n_clauses % 2) as i32;
        let out = tm.activate(x).unwrap().to_vec();

        prop_assert_eq!(tm.vote_sums(), vec![expected_sum; n_outputs]);
        prop_assert_eq!(out, vec![u8::from(expected_sum > 0); n_outputs]);
    }

    /// Feedback probabilities lie in [0, 1] and sum to 1.
    #[test]
    fn feedback_probabilities_partition(
        sum in -100i32..100,
        t in 1i32..50
    ) {
        let hp = Hyperparams::new(4.0, t).unwrap();
        let p = hp.feedback_probabilities(sum);

        prop_assert!((0.0..=1.0).contains(&p.reinforce));
        prop_assert!((0.0..=1.0).contains(&p.suppress));
        prop_assert!((p.reinforce + p.suppress - 1.0).abs() < 1e-5);

        if sum >= t {
            prop_assert_eq!((p.reinforce, p.suppress), (0.0, 1.0));
        }
        if sum <= -t {
            prop_assert_eq!((p.reinforce, p.suppress), (1.0, 0.0));
        }
    }

    /// Type II feedback leaves a non-firing clause untouched.
    #[test]
    fn type_ii_noop_on_silent_clause(
        n_inputs in 1usize..8,
        states in prop::collection::vec(-5i32..5, 16),
        input in bits(8)
    ) {
        let x = &input[..n_inputs];
        let mut clause = Clause::new(n_inputs, Polarity::Positive, None);
        for literal in 0..2 * n_inputs {
            clause.set_state(literal, states[literal]);
        }
        clause.activate(x);
        prop_assume!(!clause.output());

        let before = clause.automata().to_vec();
        type_ii(&mut clause, x);
        prop_assert_eq!(clause.automata(), before.as_slice());
    }

    /// Config validation works correctly.
    #[test]
    fn config_validation(
        n_inputs in 0usize..10,
        n_outputs in 0usize..10,
        n_clauses in 0usize..10
    ) {
        let result = Config::builder()
            .inputs(n_inputs)
            .outputs(n_outputs)
            .clauses(n_clauses)
            .build();

        prop_assert_eq!(result.is_ok(), n_inputs > 0 && n_outputs > 0 && n_clauses > 0);
    }
}
