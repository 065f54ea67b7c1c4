//! # arithmetic_drill_gen
//!
//! Generates arithmetic practice questions (addition, subtraction,
//! multiplication, division) with difficulty-scaled operand ranges and
//! weighted operator selection.
//!
//! ## How it works
//!
//! 1. Describe the mix of operators with a [`ProbabilityMap`] and pick an
//!    operand range, or let [`DifficultyProfile`] derive both from a single
//!    difficulty number.
//! 2. Call [`generate_question`] (bring your own RNG) or [`generate`] (one
//!    shot, optionally seeded). The engine picks an operator with
//!    [`choose_weighted`], then draws operands. Division questions are built
//!    from a multiplication so the answer is always a whole number.
//! 3. The returned [`Question`] knows its score, symbol and result. Use
//!    [`to_client_question`] to hand it to a front end as JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use arithmetic_drill_gen::{generate, Operator, ProbabilityMap, QuestionConfig, QuestionRequest};
//!
//! // Difficulty-driven, reproducible:
//! let q = generate(QuestionRequest::new(40.0).seeded(7)).unwrap();
//! println!("{q} = {}", q.result());
//!
//! // Explicit weights and range:
//! let weights = ProbabilityMap::new()
//!     .with(Operator::Multiply, 3.0)
//!     .with(Operator::Divide, 1.0);
//! let q = generate(QuestionRequest::explicit(QuestionConfig::new(weights, 2.0, 13.0))).unwrap();
//! assert!(matches!(q.operator, Operator::Multiply | Operator::Divide));
//! ```

pub mod client_adapter;
pub mod question_engine;

pub use client_adapter::to_client_question;
pub use question_engine::{
    choose_weighted, generate, generate_for_difficulty, generate_question, random_in_range,
    DifficultyProfile, OperandRange, Operator, ProbabilityMap, Question, QuestionConfig,
    QuestionError, QuestionRequest, QuestionSource, Result,
};
