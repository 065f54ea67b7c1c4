//! Demo of difficulty-driven and explicit question generation.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Difficulty ladder**: one seeded question per difficulty level, with
//!    the operand ranges the difficulty model derives.
//! 2. **Explicit weights**: a divide-heavy mix over `[2, 13)`, rendered as
//!    client JSON.

use arithmetic_drill_gen::{
    generate, to_client_question, DifficultyProfile, Operator, ProbabilityMap, QuestionConfig,
    QuestionRequest,
};

fn main() -> arithmetic_drill_gen::Result<()> {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Difficulty ladder");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (seed, difficulty) in [0.0, 20.0, 100.0, 500.0, 2_000.0].into_iter().enumerate() {
        let profile = DifficultyProfile::for_difficulty(difficulty);
        let q = generate(QuestionRequest::new(difficulty).seeded(seed as u64))?;
        println!(
            "  d={difficulty:>6}  +/− [{}, {})  ×/÷ [{}, {})  →  {q} = {}  ({} pts)",
            profile.additive_range.floor,
            profile.additive_range.ceiling,
            profile.multiplicative_range.floor,
            profile.multiplicative_range.ceiling,
            q.result(),
            q.score(),
        );
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Explicit weights (divide-heavy)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let weights = ProbabilityMap::new()
        .with(Operator::Multiply, 1.0)
        .with(Operator::Divide, 3.0);
    for seed in 0..5u64 {
        let config = QuestionConfig::new(weights.clone(), 2.0, 13.0);
        let q = generate(QuestionRequest::explicit(config).seeded(seed))?;
        println!("  {}", to_client_question(&q));
    }

    Ok(())
}
