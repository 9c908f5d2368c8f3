//! Table-driven in-memory model provider.

use pins_core::{ModelProvider, ProviderError};
use pins_types::{
    Chunk, Guard, NextStatesFn, Relation, StateLabelLongFn, StateLabelsAllFn, Successor,
    TypeFormat,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Which label evaluators a [`StaticModel`] offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Neither evaluator.
    #[default]
    None,
    /// Bulk evaluation only.
    All,
    /// Per-label evaluation only.
    Long,
    /// Both evaluators.
    Both,
}

#[derive(Debug, Clone)]
struct StaticType {
    name: String,
    format: Option<TypeFormat>,
    values: Vec<Chunk>,
}

#[derive(Debug, Clone)]
struct StaticTransition {
    src: Vec<i32>,
    group: usize,
    edge_labels: Vec<i32>,
    dst: Vec<i32>,
}

/// An in-memory model described by tables.
///
/// State labels are predicates of the form `state[slot] == value`.
/// Transitions are listed explicitly per source state.
#[derive(Debug, Clone, Default)]
pub struct StaticModel {
    slots: Vec<String>,
    initial: Vec<i32>,
    types: Vec<StaticType>,
    edge_labels: Vec<(String, usize)>,
    state_labels: Vec<(String, usize, i32)>,
    label_mode: LabelMode,
    guards: Vec<Guard>,
    guard_rows: HashMap<usize, Vec<i32>>,
    transitions: Arc<Vec<StaticTransition>>,
    relations: HashMap<Relation, Vec<Option<Vec<i32>>>>,
    unnamed_slots: Vec<usize>,
}

impl StaticModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a state slot with its initial value.
    pub fn slot(mut self, name: &str, initial: i32) -> Self {
        self.slots.push(name.to_string());
        self.initial.push(initial);
        self
    }

    /// Override the initial state, whatever its length.
    pub fn initial_state(mut self, state: Vec<i32>) -> Self {
        self.initial = state;
        self
    }

    /// Declare a type with the given values.
    pub fn declare_type(mut self, name: &str, values: &[&str]) -> Self {
        self.types.push(StaticType {
            name: name.to_string(),
            format: None,
            values: values.iter().map(|v| Chunk::new(v)).collect(),
        });
        self
    }

    /// Set the format of the last declared type.
    pub fn with_format(mut self, format: TypeFormat) -> Self {
        if let Some(ty) = self.types.last_mut() {
            ty.format = Some(format);
        }
        self
    }

    /// Append a raw chunk to the last declared type.
    pub fn raw_chunk(mut self, chunk: Chunk) -> Self {
        if let Some(ty) = self.types.last_mut() {
            ty.values.push(chunk);
        }
        self
    }

    /// Append an edge label bound to a type.
    pub fn edge_label(mut self, name: &str, ty: usize) -> Self {
        self.edge_labels.push((name.to_string(), ty));
        self
    }

    /// Append a state label holding when `state[slot] == value`.
    pub fn state_label(mut self, name: &str, slot: usize, value: i32) -> Self {
        self.state_labels.push((name.to_string(), slot, value));
        self
    }

    /// Choose which label evaluators are offered.
    pub fn label_mode(mut self, mode: LabelMode) -> Self {
        self.label_mode = mode;
        self
    }

    /// Set the number of transition groups; new groups get empty guards.
    pub fn actions(mut self, n: usize) -> Self {
        self.guards.resize(n, Guard::empty());
        self
    }

    /// Set the guard of a transition group, adding groups as needed.
    pub fn guard(mut self, group: usize, labels: &[usize]) -> Self {
        if self.guards.len() <= group {
            self.guards.resize(group + 1, Guard::empty());
        }
        self.guards[group] = Guard::new(labels.to_vec());
        self
    }

    /// Replace the encoded guard row of a group, adding groups as needed.
    pub fn guard_row(mut self, group: usize, row: Vec<i32>) -> Self {
        if self.guards.len() <= group {
            self.guards.resize(group + 1, Guard::empty());
        }
        self.guard_rows.insert(group, row);
        self
    }

    /// Add a transition.
    pub fn transition(mut self, src: &[i32], group: usize, edge_labels: &[i32], dst: &[i32]) -> Self {
        Arc::make_mut(&mut self.transitions).push(StaticTransition {
            src: src.to_vec(),
            group,
            edge_labels: edge_labels.to_vec(),
            dst: dst.to_vec(),
        });
        self
    }

    /// Provide the rows of a relation; `None` rows are absent.
    pub fn relation(mut self, relation: Relation, rows: Vec<Option<Vec<i32>>>) -> Self {
        self.relations.insert(relation, rows);
        self
    }

    /// Make the name query of a slot fail.
    pub fn failing_slot_name(mut self, slot: usize) -> Self {
        self.unnamed_slots.push(slot);
        self
    }

    fn row(&self, relation: Relation, i: usize) -> Option<Vec<i32>> {
        self.relations.get(&relation)?.get(i)?.clone()
    }

    fn label_table(&self) -> Arc<Vec<(usize, i32)>> {
        Arc::new(
            self.state_labels
                .iter()
                .map(|(_, slot, value)| (*slot, *value))
                .collect(),
        )
    }
}

fn lookup<T: Clone>(items: &[T], what: &'static str, index: usize) -> Result<T, ProviderError> {
    items
        .get(index)
        .cloned()
        .ok_or_else(|| ProviderError::query(what, index, "no such entry"))
}

impl ModelProvider for StaticModel {
    fn state_length(&self) -> usize {
        self.slots.len()
    }

    fn state_slot_name(&self, slot: usize) -> Result<String, ProviderError> {
        if self.unnamed_slots.contains(&slot) {
            return Err(ProviderError::query("state slot", slot, "name unavailable"));
        }
        lookup(&self.slots, "state slot", slot)
    }

    fn initial_state(&self) -> Result<Vec<i32>, ProviderError> {
        Ok(self.initial.clone())
    }

    fn next_states_all(&self) -> NextStatesFn {
        let transitions = Arc::clone(&self.transitions);
        NextStatesFn::new(move |src, on_successor| {
            let mut count = 0;
            for t in transitions.iter().filter(|t| t.src == src) {
                on_successor(Successor {
                    group: t.group,
                    edge_labels: &t.edge_labels,
                    state: &t.dst,
                });
                count += 1;
            }
            count
        })
    }

    fn type_count(&self) -> usize {
        self.types.len()
    }

    fn type_name(&self, ty: usize) -> Result<String, ProviderError> {
        Ok(lookup(&self.types, "type", ty)?.name)
    }

    fn type_format(&self, ty: usize) -> Option<TypeFormat> {
        self.types.get(ty).and_then(|t| t.format)
    }

    fn type_value_count(&self, ty: usize) -> usize {
        self.types.get(ty).map_or(0, |t| t.values.len())
    }

    fn type_value(&self, ty: usize, value: usize) -> Result<Chunk, ProviderError> {
        let values = &lookup(&self.types, "type", ty)?.values;
        lookup(values, "type value", value)
    }

    fn edge_label_count(&self) -> usize {
        self.edge_labels.len()
    }

    fn edge_label_name(&self, label: usize) -> Result<String, ProviderError> {
        Ok(lookup(&self.edge_labels, "edge label", label)?.0)
    }

    fn edge_label_type(&self, label: usize) -> usize {
        self.edge_labels.get(label).map_or(0, |(_, ty)| *ty)
    }

    fn state_label_count(&self) -> usize {
        self.state_labels.len()
    }

    fn state_label_name(&self, label: usize) -> Result<String, ProviderError> {
        Ok(lookup(&self.state_labels, "state label", label)?.0)
    }

    fn state_labels_all(&self) -> Option<StateLabelsAllFn> {
        if !matches!(self.label_mode, LabelMode::All | LabelMode::Both) {
            return None;
        }
        let table = self.label_table();
        Some(Arc::new(move |src: &[i32], dst: &mut [i32]| {
            for (d, (slot, value)) in dst.iter_mut().zip(table.iter()) {
                *d = i32::from(src.get(*slot) == Some(value));
            }
        }))
    }

    fn state_label_long(&self) -> Option<StateLabelLongFn> {
        if !matches!(self.label_mode, LabelMode::Long | LabelMode::Both) {
            return None;
        }
        let table = self.label_table();
        Some(Arc::new(move |label: usize, src: &[i32]| {
            table
                .get(label)
                .map_or(0, |(slot, value)| i32::from(src.get(*slot) == Some(value)))
        }))
    }

    fn transition_group_count(&self) -> usize {
        self.guards.len()
    }

    fn transition_guard_row(&self, group: usize) -> Option<Vec<i32>> {
        match self.guard_rows.get(&group) {
            Some(row) => Some(row.clone()),
            None => self.guards.get(group)?.to_prefixed().ok(),
        }
    }

    fn do_not_accord_row(&self, group: usize) -> Option<Vec<i32>> {
        self.row(Relation::NoAccord, group)
    }

    fn guard_nes_row(&self, label: usize) -> Option<Vec<i32>> {
        self.row(Relation::GuardNes, label)
    }

    fn guard_nds_row(&self, label: usize) -> Option<Vec<i32>> {
        self.row(Relation::GuardNds, label)
    }

    fn commutes_row(&self, group: usize) -> Option<Vec<i32>> {
        self.row(Relation::Commute, group)
    }

    fn coenabled_row(&self, label: usize) -> Option<Vec<i32>> {
        self.row(Relation::CoEnabled, label)
    }

    fn read_dependencies_row(&self, group: usize) -> Option<Vec<i32>> {
        self.row(Relation::ActionRead, group)
    }

    fn may_write_dependencies_row(&self, group: usize) -> Option<Vec<i32>> {
        self.row(Relation::ActionMayWrite, group)
    }

    fn must_write_dependencies_row(&self, group: usize) -> Option<Vec<i32>> {
        self.row(Relation::ActionMustWrite, group)
    }

    fn label_dependencies_row(&self, label: usize) -> Option<Vec<i32>> {
        self.row(Relation::GuardTest, label)
    }
}
