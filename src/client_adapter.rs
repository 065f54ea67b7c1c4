use serde_json::{json, Value};

use crate::question_engine::models::Question;

/// Whole-number results go out as integers, everything else as floats.
fn result_value(result: f64) -> Value {
    if result.is_finite() && result.fract() == 0.0 && result.abs() < 9.0e15 {
        json!(result as i64)
    } else {
        json!(result)
    }
}

/// Map a `Question` to the JSON object a front end renders and grades.
///
/// Field names are camelCase. `result` is `null` when the quotient is not
/// finite (a hand-built divide by zero).
pub fn to_client_question(question: &Question) -> Value {
    json!({
        "operator": question.operator.label(),
        "symbol": question.symbol(),
        "noun": question.noun(),
        "firstTerm": question.first_term,
        "secondTerm": question.second_term,
        "score": question.score(),
        "result": result_value(question.result()),
        "prompt": format!("What is {question}?"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::models::Operator;

    #[test]
    fn divide_question_renders_all_fields() {
        let v = to_client_question(&Question::new(Operator::Divide, 12, 4));
        assert_eq!(
            v,
            json!({
                "operator": "divide",
                "symbol": "÷",
                "noun": "division",
                "firstTerm": 12,
                "secondTerm": 4,
                "score": 25,
                "result": 3,
                "prompt": "What is 12 ÷ 4?",
            })
        );
    }

    #[test]
    fn fractional_and_infinite_results() {
        let v = to_client_question(&Question::new(Operator::Divide, 7, 2));
        assert_eq!(v["result"], json!(3.5));

        let v = to_client_question(&Question::new(Operator::Divide, 7, 0));
        assert!(v["result"].is_null());
    }

    #[test]
    fn subtraction_uses_minus_sign() {
        let v = to_client_question(&Question::new(Operator::Subtract, 3, 8));
        assert_eq!(v["symbol"], "\u{2212}");
        assert_eq!(v["result"], json!(-5));
    }
}
