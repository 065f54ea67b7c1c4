use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::question_engine::{
    difficulty::DifficultyProfile,
    error::{QuestionError, Result},
    models::{Operator, ProbabilityMap, Question, QuestionRequest, QuestionSource},
    sampling::{choose_weighted, random_in_range},
};

/// Build a question for a fixed operator with operands drawn from `[floor, ceiling)`.
///
/// Add, subtract and multiply take two independent draws. Divide draws two
/// multipliers `m1, m2` and returns `m1 * m2 ÷ m2`, so the answer is the
/// whole number `m1` whenever `m2 != 0`. A range containing 0 can draw a zero
/// divisor, giving `0 ÷ 0` whose [`Question::result`] is NaN.
pub fn question_for_operator<R: Rng + ?Sized>(
    rng: &mut R,
    operator: Operator,
    floor: f64,
    ceiling: f64,
) -> Result<Question> {
    let question = match operator {
        Operator::Add | Operator::Subtract | Operator::Multiply => {
            let first_term = random_in_range(rng, floor, ceiling)?;
            let second_term = random_in_range(rng, floor, ceiling)?;
            Question::new(operator, first_term, second_term)
        }
        Operator::Divide => {
            let m1 = random_in_range(rng, floor, ceiling)?;
            let m2 = random_in_range(rng, floor, ceiling)?;
            let product = m1
                .checked_mul(m2)
                .ok_or_else(|| QuestionError::invalid_range(floor, ceiling))?;
            Question::new(operator, product, m2)
        }
    };

    debug!(
        operator = operator.label(),
        first_term = question.first_term,
        second_term = question.second_term,
        "generated question"
    );
    Ok(question)
}

/// Pick an operator from `operator_weights`, then build its operands from
/// `[floor, ceiling)`.
pub fn generate_question<R: Rng + ?Sized>(
    rng: &mut R,
    operator_weights: &ProbabilityMap<Operator>,
    floor: f64,
    ceiling: f64,
) -> Result<Question> {
    let operator = choose_weighted(rng, operator_weights)?;
    question_for_operator(rng, operator, floor, ceiling)
}

/// Difficulty-driven generation: weights and the chosen operator's operand
/// range both come from [`DifficultyProfile::for_difficulty`].
pub fn generate_for_difficulty<R: Rng + ?Sized>(rng: &mut R, difficulty: f64) -> Result<Question> {
    let profile = DifficultyProfile::for_difficulty(difficulty);
    let operator = choose_weighted(rng, &profile.operator_weights)?;
    let range = profile.range_for(operator);
    question_for_operator(rng, operator, range.floor, range.ceiling)
}

/// One-shot entry point: seeds an RNG from the request and dispatches on its source.
pub fn generate(request: QuestionRequest) -> Result<Question> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    match request.source {
        QuestionSource::Difficulty(difficulty) =>
            generate_for_difficulty(&mut rng, difficulty),

        QuestionSource::Explicit(config) =>
            generate_question(&mut rng, &config.operator_weights, config.floor, config.ceiling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(op: Operator) -> ProbabilityMap<Operator> {
        Operator::ALL
            .iter()
            .map(|&o| (o, if o == op { 1.0 } else { 0.0 }))
            .collect()
    }

    #[test]
    fn divide_is_always_exact() {
        for seed in 0..500u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate_question(&mut rng, &only(Operator::Divide), 1.0, 13.0).unwrap();
            assert_eq!(q.operator, Operator::Divide);
            assert_eq!(q.first_term % q.second_term, 0, "seed {seed}: {q}");
            let m1 = q.first_term / q.second_term;
            assert!((1..13).contains(&m1));
            assert!((1..13).contains(&q.second_term));
            assert_eq!(q.result(), m1 as f64);
        }
    }

    #[test]
    fn non_divide_terms_stay_in_range() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply] {
            let mut rng = StdRng::seed_from_u64(11);
            for _ in 0..300 {
                let q = generate_question(&mut rng, &only(op), -5.0, 5.0).unwrap();
                assert_eq!(q.operator, op);
                assert!((-5..5).contains(&q.first_term));
                assert!((-5..5).contains(&q.second_term));
            }
        }
    }

    #[test]
    fn divide_range_spanning_zero_can_draw_zero_divisor() {
        let mut zero_divisors = 0;
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = question_for_operator(&mut rng, Operator::Divide, -2.0, 3.0).unwrap();
            assert!((-2..3).contains(&q.second_term));
            if q.second_term == 0 {
                zero_divisors += 1;
                assert_eq!(q.first_term, 0);
                assert!(q.result().is_nan());
            } else {
                assert_eq!(q.first_term % q.second_term, 0, "seed {seed}: {q}");
            }
        }
        assert!(zero_divisors > 0, "expected at least one zero divisor in 200 seeds");
    }

    #[test]
    fn invalid_range_propagates() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_question(&mut rng, &only(Operator::Add), 20.0, 10.0).unwrap_err();
        assert!(matches!(err, QuestionError::InvalidRange { .. }));
    }

    #[test]
    fn empty_weights_propagate() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_question(&mut rng, &ProbabilityMap::new(), 1.0, 10.0).unwrap_err();
        assert!(matches!(err, QuestionError::Configuration(_)));
    }

    #[test]
    fn divide_product_overflow_is_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        let floor = 4.0e18;
        let err = question_for_operator(&mut rng, Operator::Divide, floor, floor + 1024.0)
            .unwrap_err();
        assert!(matches!(err, QuestionError::InvalidRange { .. }));
    }

    #[test]
    fn difficulty_zero_never_divides() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..1_000 {
            let q = generate_for_difficulty(&mut rng, 0.0).unwrap();
            assert_ne!(q.operator, Operator::Divide);
        }
    }

    #[test]
    fn difficulty_operands_use_operator_range() {
        let difficulty = 500.0;
        let profile = DifficultyProfile::for_difficulty(difficulty);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1_000 {
            let q = generate_for_difficulty(&mut rng, difficulty).unwrap();
            let range = profile.range_for(q.operator);
            let (lo, hi) = (range.floor as i64, range.ceiling as i64);
            match q.operator {
                Operator::Divide => {
                    assert_eq!(q.first_term % q.second_term, 0);
                    assert!((lo..hi).contains(&(q.first_term / q.second_term)));
                    assert!((lo..hi).contains(&q.second_term));
                }
                _ => {
                    assert!((lo..hi).contains(&q.first_term));
                    assert!((lo..hi).contains(&q.second_term));
                }
            }
        }
    }
}
