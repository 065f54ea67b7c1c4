//! Core question engine: weighted selection, operand sampling and question
//! generation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: operators and their fixed table, questions, weight maps, requests |
//! | `error`      | `QuestionError` and the crate `Result` alias |
//! | `sampling`   | `random_in_range()` and `choose_weighted()` over a seeded or entropy RNG |
//! | `difficulty` | Maps a numeric difficulty to operator weights and operand ranges |
//! | `generator`  | `generate_question()`, `generate_for_difficulty()` and the one-shot `generate()` |

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod models;
pub mod sampling;

// Re-export the public API surface so callers can use
// `question_engine::generate_question` without reaching into sub-modules.
pub use difficulty::{operator_weights, DifficultyProfile, OperandRange};
pub use error::{QuestionError, Result};
pub use generator::{generate, generate_for_difficulty, generate_question, question_for_operator};
pub use models::{
    Operator, OperatorInfo, ProbabilityMap, Question, QuestionConfig, QuestionRequest,
    QuestionSource,
};
pub use sampling::{choose_weighted, random_in_range};
