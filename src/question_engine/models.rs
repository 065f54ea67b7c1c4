use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Fixed display, scoring and evaluation data for one operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub symbol: &'static str,
    pub noun: &'static str,
    pub score: u32,
    pub calc: fn(f64, f64) -> f64,
}

fn add(a: f64, b: f64) -> f64 { a + b }
fn subtract(a: f64, b: f64) -> f64 { a - b }
fn multiply(a: f64, b: f64) -> f64 { a * b }
fn divide(a: f64, b: f64) -> f64 { a / b }

static ADD: OperatorInfo = OperatorInfo {
    symbol: "+",
    noun: "addition",
    score: 10,
    calc: add,
};

static SUBTRACT: OperatorInfo = OperatorInfo {
    symbol: "\u{2212}",
    noun: "subtraction",
    score: 15,
    calc: subtract,
};

static MULTIPLY: OperatorInfo = OperatorInfo {
    symbol: "×",
    noun: "multiplication",
    score: 20,
    calc: multiply,
};

static DIVIDE: OperatorInfo = OperatorInfo {
    symbol: "÷",
    noun: "division",
    score: 25,
    calc: divide,
};

impl Operator {
    /// All operators in canonical order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn info(self) -> &'static OperatorInfo {
        match self {
            Operator::Add      => &ADD,
            Operator::Subtract => &SUBTRACT,
            Operator::Multiply => &MULTIPLY,
            Operator::Divide   => &DIVIDE,
        }
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn noun(self) -> &'static str {
        self.info().noun
    }

    pub fn score(self) -> u32 {
        self.info().score
    }

    /// Apply the operator's arithmetic rule. Division is real division.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        (self.info().calc)(a, b)
    }

    /// Lowercase label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add      => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide   => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One arithmetic question: `first_term <operator> second_term`.
///
/// Generated divide questions always satisfy `first_term % second_term == 0`.
/// Hand-built ones are not checked, and [`Question::result`] then returns the
/// fractional quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub operator: Operator,
    pub first_term: i64,
    pub second_term: i64,
}

impl Question {
    pub fn new(operator: Operator, first_term: i64, second_term: i64) -> Self {
        Question { operator, first_term, second_term }
    }

    pub fn score(&self) -> u32 {
        self.operator.score()
    }

    pub fn symbol(&self) -> &'static str {
        self.operator.symbol()
    }

    pub fn noun(&self) -> &'static str {
        self.operator.noun()
    }

    pub fn result(&self) -> f64 {
        self.operator.apply(self.first_term as f64, self.second_term as f64)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first_term, self.operator, self.second_term)
    }
}

// ---------------------------------------------------------------------------
// Probability map
// ---------------------------------------------------------------------------

/// Insertion-ordered weight table from label to weight.
///
/// Weights are stored as given. Entries that are not finite or not positive
/// count as absent when choosing; see [`ProbabilityMap::valid_entries`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMap<T> {
    entries: Vec<(T, f64)>,
}

impl<T> Default for ProbabilityMap<T> {
    fn default() -> Self {
        ProbabilityMap { entries: Vec::new() }
    }
}

impl<T: PartialEq> ProbabilityMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight for `label`. An existing label keeps its position.
    pub fn insert(&mut self, label: T, weight: f64) {
        match self.entries.iter_mut().find(|(k, _)| *k == label) {
            Some(entry) => entry.1 = weight,
            None        => self.entries.push((label, weight)),
        }
    }

    /// Builder form of [`ProbabilityMap::insert`].
    pub fn with(mut self, label: T, weight: f64) -> Self {
        self.insert(label, weight);
        self
    }

    pub fn get(&self, label: &T) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == label).map(|(_, w)| *w)
    }
}

impl<T> ProbabilityMap<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order, invalid weights included.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.entries.iter().map(|(k, w)| (k, *w))
    }

    /// Entries whose weight is finite and strictly positive, in insertion order.
    pub fn valid_entries(&self) -> Vec<(&T, f64)> {
        self.iter().filter(|(_, w)| is_valid_weight(*w)).collect()
    }
}

pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

impl<T: PartialEq> FromIterator<(T, f64)> for ProbabilityMap<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut map = ProbabilityMap::new();
        for (label, weight) in iter {
            map.insert(label, weight);
        }
        map
    }
}

impl<T: Serialize> Serialize for ProbabilityMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, weight) in &self.entries {
            map.serialize_entry(label, weight)?;
        }
        map.end()
    }
}

// Non-numeric values become NaN so they are filtered like any other invalid
// weight instead of failing the whole document.
impl<'de, T: Deserialize<'de> + PartialEq> Deserialize<'de> for ProbabilityMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeightsVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de> + PartialEq> Visitor<'de> for WeightsVisitor<T> {
            type Value = ProbabilityMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of labels to numeric weights")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ProbabilityMap::new();
                while let Some((label, raw)) = access.next_entry::<T, serde_json::Value>()? {
                    map.insert(label, raw.as_f64().unwrap_or(f64::NAN));
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(WeightsVisitor(PhantomData))
    }
}

// ---------------------------------------------------------------------------
// Request / config types
// ---------------------------------------------------------------------------

/// Explicit generator input: operator weights plus an operand range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionConfig {
    pub operator_weights: ProbabilityMap<Operator>,
    pub floor: f64,
    pub ceiling: f64,
}

impl QuestionConfig {
    pub fn new(operator_weights: ProbabilityMap<Operator>, floor: f64, ceiling: f64) -> Self {
        QuestionConfig { operator_weights, floor, ceiling }
    }

    /// Parse a JSON document such as
    /// `{"operatorWeights": {"add": 1, "divide": 2}, "floor": 2, "ceiling": 10}`.
    pub fn from_json_str(json: &str) -> crate::question_engine::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where the generator takes its weights and ranges from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionSource {
    /// Weights and ranges derived from a numeric difficulty.
    Difficulty(f64),
    /// Caller-supplied weights and a single operand range.
    Explicit(QuestionConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub source: QuestionSource,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Difficulty-driven request with an entropy seed.
    pub fn new(difficulty: f64) -> Self {
        QuestionRequest {
            source: QuestionSource::Difficulty(difficulty),
            rng_seed: None,
        }
    }

    pub fn explicit(config: QuestionConfig) -> Self {
        QuestionRequest {
            source: QuestionSource::Explicit(config),
            rng_seed: None,
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
