//! Recursion trace recording for the multiplication engine.
//!
//! Every split, base case, and combine is appended to an ordered log as
//! it happens. Insertion order is emission order and is the only handle
//! a consumer has to reconstruct the recursion tree, so records are
//! never reordered or mutated after the fact.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Serializes exact integer values as decimal strings. Arbitrary
/// precision does not fit in a JSON number, and a consumer formatting
/// the value for display wants digits, not limbs.
pub(crate) mod decimal_string {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Discriminant for the three record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Split,
    BaseCase,
    Combine,
}

/// A single recorded step of the recursion.
///
/// Operand and result fields hold digit strings re-encoded in the active
/// radix at the moment of recording. `decimal` keeps the exact integer
/// value alongside, and `depth` the recursion depth (0 = outermost call).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// A pair was decomposed into high and low halves at split width `m`.
    Split {
        x: String,
        y: String,
        m: usize,
        high1: String,
        low1: String,
        high2: String,
        low2: String,
        depth: usize,
    },
    /// Both operands were single digits and were multiplied directly.
    BaseCase {
        x: String,
        y: String,
        result: String,
        #[serde(with = "decimal_string")]
        decimal: BigUint,
        depth: usize,
    },
    /// Three sub-products were merged back into one result.
    Combine {
        z2: String,
        z1: String,
        z0: String,
        #[serde(rename = "basePower")]
        base_power: String,
        result: String,
        #[serde(with = "decimal_string")]
        decimal: BigUint,
        depth: usize,
    },
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Split { .. } => StepKind::Split,
            Step::BaseCase { .. } => StepKind::BaseCase,
            Step::Combine { .. } => StepKind::Combine,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Step::Split { depth, .. }
            | Step::BaseCase { depth, .. }
            | Step::Combine { depth, .. } => *depth,
        }
    }
}

/// Append-only ordered log of recursion steps.
///
/// Created empty at the start of one top-level multiplication, appended
/// to exclusively by the engine while it runs, then handed to the caller
/// as an immutable record of the computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a record. Only the engine appends.
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Gets a record by emission index.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of records of the given kind.
    pub fn count_of(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
