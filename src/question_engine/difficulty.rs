//! Difficulty model: turns one number into operator weights and operand ranges.
//!
//! Harder operators grow more likely as difficulty rises because every weight
//! gains the same `d` while their fixed offsets stay put (add +200,
//! subtract +100, multiply +50, divide +0). Operand ranges grow as powers of
//! `d + 10`; multiply and divide use smaller exponents so products stay
//! mentally tractable.

use serde::{Deserialize, Serialize};

use crate::question_engine::models::{Operator, ProbabilityMap};

/// Half-open operand range `[floor, ceiling)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperandRange {
    pub floor: f64,
    pub ceiling: f64,
}

impl OperandRange {
    /// Range `[(base)^lo, (base)^hi)` with both bounds truncated toward zero.
    fn from_exponents(base: f64, lo: f64, hi: f64) -> Self {
        OperandRange {
            floor: base.powf(lo).trunc(),
            ceiling: base.powf(hi).trunc(),
        }
    }
}

/// Everything the generator needs for one difficulty level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyProfile {
    pub difficulty: f64,
    pub operator_weights: ProbabilityMap<Operator>,
    /// Used by add and subtract.
    pub additive_range: OperandRange,
    /// Used by multiply and divide.
    pub multiplicative_range: OperandRange,
}

impl DifficultyProfile {
    pub fn for_difficulty(difficulty: f64) -> Self {
        let base = difficulty + 10.0;
        DifficultyProfile {
            difficulty,
            operator_weights: operator_weights(difficulty),
            additive_range: OperandRange::from_exponents(base, 0.5, 0.7),
            multiplicative_range: OperandRange::from_exponents(base, 0.3, 0.5),
        }
    }

    pub fn range_for(&self, operator: Operator) -> OperandRange {
        match operator {
            Operator::Add | Operator::Subtract      => self.additive_range,
            Operator::Multiply | Operator::Divide   => self.multiplicative_range,
        }
    }
}

/// Operator weights for `difficulty`. At difficulty 0 divide has weight 0 and
/// is never chosen.
pub fn operator_weights(difficulty: f64) -> ProbabilityMap<Operator> {
    ProbabilityMap::new()
        .with(Operator::Add, difficulty + 200.0)
        .with(Operator::Subtract, difficulty + 100.0)
        .with(Operator::Multiply, difficulty + 50.0)
        .with(Operator::Divide, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_offsets() {
        let w = operator_weights(30.0);
        let got: Vec<_> = w.iter().map(|(op, w)| (*op, w)).collect();
        assert_eq!(
            got,
            vec![
                (Operator::Add, 230.0),
                (Operator::Subtract, 130.0),
                (Operator::Multiply, 80.0),
                (Operator::Divide, 30.0),
            ]
        );
    }

    #[test]
    fn difficulty_zero_ranges() {
        let p = DifficultyProfile::for_difficulty(0.0);
        // 10^0.5 = 3.16, 10^0.7 = 5.01, 10^0.3 = 1.99
        assert_eq!(p.additive_range, OperandRange { floor: 3.0, ceiling: 5.0 });
        assert_eq!(p.multiplicative_range, OperandRange { floor: 1.0, ceiling: 3.0 });
        assert_eq!(p.range_for(Operator::Subtract), p.additive_range);
        assert_eq!(p.range_for(Operator::Divide), p.multiplicative_range);
    }

    #[test]
    fn ranges_widen_with_difficulty() {
        let easy = DifficultyProfile::for_difficulty(0.0);
        let hard = DifficultyProfile::for_difficulty(990.0);
        // 1000^0.5 = 31.6, 1000^0.7 = 125.9, 1000^0.3 = 7.9
        assert_eq!(hard.additive_range, OperandRange { floor: 31.0, ceiling: 125.0 });
        assert_eq!(hard.multiplicative_range, OperandRange { floor: 7.0, ceiling: 31.0 });
        assert!(hard.additive_range.ceiling > easy.additive_range.ceiling);
    }
}
