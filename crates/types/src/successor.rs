//! Callable handles into a loaded model.
//!
//! These are forwarded across the dispatch boundary as opaque values. The
//! bridge never calls them; the consuming engine does, during exploration.

use std::fmt;
use std::sync::Arc;

/// One successor reported by the next-state function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor<'a> {
    /// Transition group that fired.
    pub group: usize,
    /// Edge label values (chunk indices) of the fired transition.
    pub edge_labels: &'a [i32],
    /// The successor state vector.
    pub state: &'a [i32],
}

type NextStatesInner = dyn Fn(&[i32], &mut dyn FnMut(Successor<'_>)) -> usize + Send + Sync;

/// Bulk successor enumeration: source state in, one callback per successor out.
///
/// Returns the number of successors reported.
#[derive(Clone)]
pub struct NextStatesFn(Arc<NextStatesInner>);

impl NextStatesFn {
    /// Wrap a successor enumeration closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[i32], &mut dyn FnMut(Successor<'_>)) -> usize + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Enumerate the successors of `src`.
    pub fn call(&self, src: &[i32], on_successor: &mut dyn FnMut(Successor<'_>)) -> usize {
        (self.0)(src, on_successor)
    }

    /// Whether both handles refer to the same function.
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NextStatesFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NextStatesFn(..)")
    }
}

/// Bulk label evaluation: fills one entry per state label.
pub type StateLabelsAllFn = Arc<dyn Fn(&[i32], &mut [i32]) + Send + Sync>;

/// Per-label evaluation: label index and state in, label value out.
pub type StateLabelLongFn = Arc<dyn Fn(usize, &[i32]) -> i32 + Send + Sync>;

/// The active state-label evaluation strategy of a model.
#[derive(Clone)]
pub enum LabelEvaluator {
    /// Evaluate every label in one call.
    All(StateLabelsAllFn),
    /// Evaluate one label per call.
    Long(StateLabelLongFn),
}

impl LabelEvaluator {
    /// Pick the evaluator to register, preferring bulk evaluation.
    pub fn prefer(all: Option<StateLabelsAllFn>, long: Option<StateLabelLongFn>) -> Option<Self> {
        match (all, long) {
            (Some(all), _) => Some(LabelEvaluator::All(all)),
            (None, Some(long)) => Some(LabelEvaluator::Long(long)),
            (None, None) => None,
        }
    }

    /// Short name of the strategy.
    pub fn kind(&self) -> &'static str {
        match self {
            LabelEvaluator::All(_) => "all",
            LabelEvaluator::Long(_) => "long",
        }
    }

    /// Indices of the labels that hold in `src`, out of `count` labels.
    pub fn true_labels(&self, src: &[i32], count: usize) -> Vec<usize> {
        match self {
            LabelEvaluator::All(f) => {
                let mut values = vec![0; count];
                f(src, &mut values);
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v != 0)
                    .map(|(i, _)| i)
                    .collect()
            }
            LabelEvaluator::Long(f) => (0..count).filter(|&i| f(i, src) != 0).collect(),
        }
    }

    /// Whether both evaluators refer to the same function.
    pub fn same_handle(&self, other: &Self) -> bool {
        match (self, other) {
            (LabelEvaluator::All(a), LabelEvaluator::All(b)) => Arc::ptr_eq(a, b),
            (LabelEvaluator::Long(a), LabelEvaluator::Long(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for LabelEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelEvaluator::{}(..)", self.kind())
    }
}
