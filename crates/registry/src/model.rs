//! The finished model.

use indexmap::{IndexMap, IndexSet};
use pins_matrix::DependencyMatrix;
use pins_types::{LabelEvaluator, NextStatesFn, Relation, TypeFormat};

/// A declared type and its values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LtsType {
    pub(crate) name: String,
    pub(crate) format: Option<TypeFormat>,
    pub(crate) chunks: Vec<String>,
}

impl LtsType {
    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format, if the model stated one.
    pub fn format(&self) -> Option<TypeFormat> {
        self.format
    }

    /// Values in chunk index order.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }
}

/// A named edge label bound to a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub(crate) name: String,
    pub(crate) type_id: usize,
}

impl EdgeLabel {
    /// Label name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the type the label is bound to.
    pub fn type_id(&self) -> usize {
        self.type_id
    }
}

/// A model rebuilt from one registration pass.
///
/// Owns copies of everything it was told. Exploration goes through the
/// stored handles: [`Model::next_states`] and [`Model::state_labels`] call
/// back into the provider.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) slots: Vec<String>,
    pub(crate) initial_state: Vec<i32>,
    pub(crate) next_states: NextStatesFn,
    pub(crate) types: Vec<LtsType>,
    pub(crate) edge_labels: Vec<EdgeLabel>,
    pub(crate) action_label: Option<usize>,
    pub(crate) action_count: usize,
    pub(crate) guards: Vec<IndexSet<usize>>,
    pub(crate) state_labels: Vec<String>,
    pub(crate) label_evaluator: Option<LabelEvaluator>,
    pub(crate) matrices: IndexMap<Relation, DependencyMatrix>,
}

impl Model {
    // ═══════════════════════════════════════════════════════════════════════
    // Structure
    // ═══════════════════════════════════════════════════════════════════════

    /// Number of state slots.
    pub fn state_length(&self) -> usize {
        self.slots.len()
    }

    /// Slot names in state vector order.
    pub fn slot_names(&self) -> &[String] {
        &self.slots
    }

    /// The initial state vector.
    pub fn initial_state(&self) -> &[i32] {
        &self.initial_state
    }

    /// Types by id.
    pub fn types(&self) -> &[LtsType] {
        &self.types
    }

    /// Edge labels by index.
    pub fn edge_labels(&self) -> &[EdgeLabel] {
        &self.edge_labels
    }

    /// Index of the edge label carrying the action identity.
    pub fn action_label(&self) -> Option<usize> {
        self.action_label
    }

    /// Number of actions (transition groups).
    pub fn action_count(&self) -> usize {
        self.action_count
    }

    /// Guard labels of an action, in the order received.
    pub fn guard(&self, action: usize) -> Option<&IndexSet<usize>> {
        self.guards.get(action)
    }

    /// State label names by index.
    pub fn state_label_names(&self) -> &[String] {
        &self.state_labels
    }

    /// A received relation, if the model reported it.
    pub fn matrix(&self, relation: Relation) -> Option<&DependencyMatrix> {
        self.matrices.get(&relation)
    }

    /// All received relations, in the order received.
    pub fn matrices(&self) -> impl Iterator<Item = (Relation, &DependencyMatrix)> + '_ {
        self.matrices.iter().map(|(r, m)| (*r, m))
    }

    /// Display name of an action: the action label's chunk at that index,
    /// or `Action {i}` when there is none.
    pub fn action_name(&self, action: usize) -> String {
        self.action_label
            .and_then(|label| self.edge_labels.get(label))
            .and_then(|label| self.types.get(label.type_id))
            .and_then(|ty| ty.chunks.get(action))
            .cloned()
            .unwrap_or_else(|| format!("Action {action}"))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Exploration
    // ═══════════════════════════════════════════════════════════════════════

    /// Successors of `src` as `(state, action)` pairs, in the order the
    /// provider reports them.
    pub fn next_states(&self, src: &[i32]) -> Vec<(Vec<i32>, usize)> {
        debug_assert_eq!(src.len(), self.slots.len(), "source state length");
        let slots = self.slots.len();
        let mut successors = Vec::new();
        self.next_states.call(src, &mut |successor| {
            let len = successor.state.len().min(slots);
            successors.push((successor.state[..len].to_vec(), successor.group));
        });
        successors
    }

    /// Indices of the state labels holding in `src`. Empty when the model
    /// registered no label evaluator.
    pub fn state_labels(&self, src: &[i32]) -> Vec<usize> {
        match &self.label_evaluator {
            Some(evaluator) => evaluator.true_labels(src, self.state_labels.len()),
            None => Vec::new(),
        }
    }

    /// Whether every guard label of `action` holds in `src`.
    pub fn is_enabled(&self, src: &[i32], action: usize) -> bool {
        let holding = self.state_labels(src);
        self.guard(action)
            .is_some_and(|guard| guard.iter().all(|label| holding.contains(label)))
    }
}
