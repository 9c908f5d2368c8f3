//! Dispatcher that records a model.

use crate::{EdgeLabel, LtsType, Model, RegistryConfig, RegistryError};
use indexmap::{IndexMap, IndexSet};
use pins_core::{Call, DispatchError, Dispatcher, FnHandle, Operation, Reply};
use pins_matrix::DependencyMatrix;
use pins_types::{Guard, IndexSpace, LabelEvaluator, NextStatesFn, Relation, TypeFormat};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
struct PendingEdgeLabel {
    name: Option<String>,
    type_id: Option<usize>,
}

/// Records the calls of a registration pass and builds a [`Model`].
///
/// Every call is validated against its operation signature, and every index
/// is checked against what has been recorded so far. Type ids are assigned
/// in `addType` order. Nothing from a call is borrowed past `dispatch`.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    config: RegistryConfig,
    state_length: Option<usize>,
    slots: Vec<Option<String>>,
    initial_state: Option<Vec<i32>>,
    next_states: Option<NextStatesFn>,
    types: Vec<LtsType>,
    edge_labels: Vec<PendingEdgeLabel>,
    action_label: Option<usize>,
    state_labels: Vec<Option<String>>,
    label_evaluator: Option<LabelEvaluator>,
    action_count: usize,
    guards: BTreeMap<usize, Guard>,
    matrices: IndexMap<Relation, DependencyMatrix>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Number of types added so far.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Action count as currently known, reported or inferred.
    pub fn action_count(&self) -> usize {
        self.action_count
    }

    /// Build the model from everything received.
    ///
    /// # Errors
    ///
    /// Fails if a required call is missing, a name or type binding was never
    /// set, or a matrix or guard does not fit the final dimensions.
    pub fn finish(self) -> Result<Model, RegistryError> {
        if self.state_length.is_none() {
            return Err(RegistryError::Missing("setStateLength"));
        }
        let slots = named(self.slots, "state slot")?;
        let initial_state = self
            .initial_state
            .ok_or(RegistryError::Missing("setInitialState"))?;
        let next_states = self
            .next_states
            .ok_or(RegistryError::Missing("setNextStatesFn"))?;
        let state_labels = named(self.state_labels, "state label")?;

        let edge_labels = self
            .edge_labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let name = label
                    .name
                    .ok_or(RegistryError::Unnamed { what: "edge label", index: i })?;
                let type_id = label.type_id.ok_or(RegistryError::Untyped(i))?;
                Ok(EdgeLabel { name, type_id })
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        let action_label = match self.action_label {
            Some(label) => Some(label),
            None if self.config.default_action_label && !edge_labels.is_empty() => {
                debug!("No action label reported, using edge label 0");
                Some(0)
            }
            None => None,
        };

        let actions = self.action_count;
        let action_chunks = action_label
            .and_then(|label| edge_labels.get(label))
            .and_then(|label| self.types.get(label.type_id))
            .map(|ty| ty.chunks.len());
        if let (Some(label), Some(chunks)) = (action_label, action_chunks) {
            if chunks != actions {
                warn!(
                    label,
                    chunks,
                    actions,
                    "Action label values do not match the action count"
                );
            }
        }

        let mut guards = vec![IndexSet::new(); actions];
        for (action, guard) in self.guards {
            let slot = guards.get_mut(action).ok_or(RegistryError::GuardAction {
                action,
                actions,
            })?;
            slot.extend(guard.labels().iter().copied());
        }

        for (relation, matrix) in &self.matrices {
            let (row_space, col_space) = relation.shape();
            let dimension = |space: IndexSpace| match space {
                IndexSpace::Actions => actions,
                IndexSpace::Labels => state_labels.len(),
                IndexSpace::Slots => slots.len(),
            };
            let expected = (dimension(row_space), dimension(col_space));
            let found = (matrix.rows(), matrix.cols());
            if expected != found {
                return Err(RegistryError::MatrixShape {
                    relation: *relation,
                    expected,
                    found,
                });
            }
        }

        info!(
            slots = slots.len(),
            types = self.types.len(),
            actions,
            state_labels = state_labels.len(),
            matrices = self.matrices.len(),
            "Model finished"
        );

        Ok(Model {
            slots,
            initial_state,
            next_states,
            types: self.types,
            edge_labels,
            action_label,
            action_count: actions,
            guards,
            state_labels,
            label_evaluator: self.label_evaluator,
            matrices: self.matrices,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Call handlers
    // ═══════════════════════════════════════════════════════════════════════

    fn on_state_vector(&mut self, call: &Call) -> Result<(), DispatchError> {
        let op = call.op();
        match op {
            Operation::SetStateLength => {
                let n = call.index_at(0)?;
                self.slots = self.table(op, n, None)?;
                self.state_length = Some(n);
            }
            Operation::SetStateSlotName => {
                let slot = check_index(op, call.index_at(0)?, self.slots.len())?;
                self.slots[slot] = Some(call.text_at(1)?.to_string());
            }
            Operation::SetInitialState => {
                let state = call.vector_at(0)?;
                if state.len() != self.slots.len() {
                    return Err(DispatchError::Rejected(format!(
                        "{op}: state has {} slots, expected {}",
                        state.len(),
                        self.slots.len()
                    )));
                }
                self.initial_state = Some(state.to_vec());
            }
            Operation::SetNextStatesFn => match call.handle_at(0)? {
                FnHandle::NextStates(f) => self.next_states = Some(f.clone()),
                FnHandle::StateLabels(_) => return Err(wrong_handle(op)),
            },
            _ => return Err(misrouted(op)),
        }
        Ok(())
    }

    fn on_type(&mut self, call: &Call) -> Result<Reply, DispatchError> {
        let op = call.op();
        match op {
            Operation::AddType => {
                let id = self.types.len();
                self.types.push(LtsType {
                    name: call.text_at(0)?.to_string(),
                    ..LtsType::default()
                });
                debug!(type_id = id, name = %self.types[id].name, "Added type");
                return Ok(Reply::TypeId(id));
            }
            Operation::SetTypeFormat => {
                let ty = check_index(op, call.index_at(0)?, self.types.len())?;
                let code = call.int_at(1)?;
                let format = TypeFormat::from_code(code)
                    .ok_or_else(|| DispatchError::Rejected(format!("{op}: unknown format {code}")))?;
                self.types[ty].format = Some(format);
            }
            Operation::AddChunk => {
                let ty = check_index(op, call.index_at(0)?, self.types.len())?;
                self.types[ty].chunks.push(call.text_at(1)?.to_string());
            }
            _ => return Err(misrouted(op)),
        }
        Ok(Reply::None)
    }

    fn on_edge_label(&mut self, call: &Call) -> Result<(), DispatchError> {
        let op = call.op();
        match op {
            Operation::SetEdgeLabelCount => {
                self.edge_labels = self.table(op, call.index_at(0)?, PendingEdgeLabel::default())?;
            }
            Operation::SetEdgeLabelName => {
                let label = check_index(op, call.index_at(0)?, self.edge_labels.len())?;
                self.edge_labels[label].name = Some(call.text_at(1)?.to_string());
            }
            Operation::SetEdgeLabelType => {
                let label = check_index(op, call.index_at(0)?, self.edge_labels.len())?;
                let ty = check_index(op, call.index_at(1)?, self.types.len())?;
                self.edge_labels[label].type_id = Some(ty);
            }
            Operation::SetActionLabel => {
                let label = check_index(op, call.index_at(0)?, self.edge_labels.len())?;
                self.action_label = Some(label);
            }
            _ => return Err(misrouted(op)),
        }
        Ok(())
    }

    fn on_state_label(&mut self, call: &Call) -> Result<(), DispatchError> {
        let op = call.op();
        match op {
            Operation::SetStateLabelCount => {
                self.state_labels = self.table(op, call.index_at(0)?, None)?;
            }
            Operation::SetStateLabelName => {
                let label = check_index(op, call.index_at(0)?, self.state_labels.len())?;
                self.state_labels[label] = Some(call.text_at(1)?.to_string());
            }
            Operation::SetStateLabelsFn => match call.handle_at(0)? {
                FnHandle::StateLabels(evaluator) => {
                    debug!(evaluator = evaluator.kind(), "Stored label evaluator");
                    self.label_evaluator = Some(evaluator.clone());
                }
                FnHandle::NextStates(_) => return Err(wrong_handle(op)),
            },
            _ => return Err(misrouted(op)),
        }
        Ok(())
    }

    fn on_transition_group(&mut self, call: &Call) -> Result<(), DispatchError> {
        let op = call.op();
        let labels = self.state_labels.len();
        match op {
            Operation::SetActionCount => {
                self.action_count = self.check_count(op, call.index_at(0)?)?;
            }
            Operation::SetGuardsAll => {
                let guards = call.guards_at(0)?;
                if let Some(label) = guards.max_label() {
                    check_index(op, label, labels)?;
                }
                if guards.len() != self.action_count {
                    warn!(
                        guards = guards.len(),
                        actions = self.action_count,
                        "Guard list size differs from action count"
                    );
                }
                for (action, guard) in guards.iter() {
                    self.guards.insert(action, guard.clone());
                }
            }
            Operation::SetGuards => {
                let action = call.index_at(0)?;
                let guard = call.guard_at(1)?;
                for &label in guard.labels() {
                    check_index(op, label, labels)?;
                }
                self.guards.insert(action, guard.clone());
            }
            _ => return Err(misrouted(op)),
        }
        Ok(())
    }

    fn on_matrix(&mut self, call: &Call) -> Result<(), DispatchError> {
        let op = call.op();
        let relation = call
            .text_at(0)?
            .parse::<Relation>()
            .map_err(|e| DispatchError::Rejected(format!("{op}: {e}")))?;
        let matrix = call.matrix_at(1)?;

        if self.config.infer_action_count && self.action_count == 0 && relation.sizes_actions() {
            self.action_count = self.check_count(op, matrix.rows())?;
            debug!(%relation, actions = self.action_count, "Inferred action count");
        }

        debug!(
            %relation,
            rows = matrix.rows(),
            cols = matrix.cols(),
            set = matrix.count_ones(),
            "Stored matrix"
        );
        self.matrices.insert(relation, matrix.clone());
        Ok(())
    }

    fn check_count(&self, op: Operation, count: usize) -> Result<usize, DispatchError> {
        if count > self.config.max_count {
            warn!(op = op.name(), count, limit = self.config.max_count, "Count too large");
            return Err(DispatchError::CountTooLarge {
                op: op.name(),
                count,
                limit: self.config.max_count,
            });
        }
        Ok(count)
    }

    /// A table of `count` entries, refused rather than aborting when it
    /// cannot be allocated.
    fn table<T: Clone>(
        &self,
        op: Operation,
        count: usize,
        fill: T,
    ) -> Result<Vec<T>, DispatchError> {
        let count = self.check_count(op, count)?;
        let mut table = Vec::new();
        table
            .try_reserve_exact(count)
            .map_err(|e| DispatchError::Rejected(format!("{op}: {e}")))?;
        table.resize(count, fill);
        Ok(table)
    }
}

impl Dispatcher for ModelRegistry {
    fn dispatch(&mut self, call: Call) -> Result<Reply, DispatchError> {
        call.validate()?;

        use Operation::*;
        match call.op() {
            SetStateLength | SetStateSlotName | SetInitialState | SetNextStatesFn => {
                self.on_state_vector(&call)?
            }
            AddType | SetTypeFormat | AddChunk => return self.on_type(&call),
            SetEdgeLabelCount | SetEdgeLabelName | SetEdgeLabelType | SetActionLabel => {
                self.on_edge_label(&call)?
            }
            SetStateLabelCount | SetStateLabelName | SetStateLabelsFn => {
                self.on_state_label(&call)?
            }
            SetActionCount | SetGuardsAll | SetGuards => self.on_transition_group(&call)?,
            SetMatrix => self.on_matrix(&call)?,
        }
        Ok(Reply::None)
    }
}

fn check_index(op: Operation, index: usize, len: usize) -> Result<usize, DispatchError> {
    if index < len {
        Ok(index)
    } else {
        Err(DispatchError::OutOfRange {
            op: op.name(),
            index,
            len,
        })
    }
}

fn misrouted(op: Operation) -> DispatchError {
    DispatchError::UnknownOperation(op.name().to_string())
}

fn wrong_handle(op: Operation) -> DispatchError {
    DispatchError::Rejected(format!("{op}: wrong function handle"))
}

fn named(names: Vec<Option<String>>, what: &'static str) -> Result<Vec<String>, RegistryError> {
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| name.ok_or(RegistryError::Unnamed { what, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pins_core::ArgCell;
    use pins_loader::{register_model, LoaderConfig};
    use pins_test_helpers::fixtures::{three_slot_model, traffic_light};
    use pins_test_helpers::StaticModel;
    use pins_types::{Chunk, GuardList};
    use tracing_test::traced_test;

    fn load(model: &StaticModel, config: RegistryConfig) -> Model {
        let mut registry = ModelRegistry::new(config);
        register_model(model, &mut registry, &LoaderConfig::default()).unwrap();
        registry.finish().unwrap()
    }

    fn matrix_call(relation: Relation, rows: usize, cols: usize) -> Call {
        Call::set_matrix(relation, DependencyMatrix::new(rows, cols).unwrap())
    }

    #[traced_test]
    #[test]
    fn test_traffic_light_end_to_end() {
        let model = load(&traffic_light(), RegistryConfig::default());

        assert_eq!(model.slot_names(), ["red", "green"]);
        assert_eq!(model.initial_state(), [1, 0]);
        assert_eq!(model.action_count(), 2);
        assert_eq!(model.action_label(), Some(0));
        assert_eq!(model.action_name(0), "red -> green");
        assert_eq!(model.action_name(1), "green -> red");
        assert_eq!(model.state_label_names(), ["red", "green"]);

        let guard: Vec<_> = model.guard(1).unwrap().iter().copied().collect();
        assert_eq!(guard, vec![1]);

        assert_eq!(model.next_states(&[1, 0]), vec![(vec![0, 1], 0)]);
        assert_eq!(model.next_states(&[0, 1]), vec![(vec![1, 0], 1)]);
        assert_eq!(model.state_labels(&[1, 0]), vec![0]);
        assert!(model.is_enabled(&[1, 0], 0));
        assert!(!model.is_enabled(&[1, 0], 1));

        assert!(model.matrix(Relation::Commute).is_none());
        assert_eq!(model.matrices().count(), 8);
        let reads = model.matrix(Relation::ActionRead).unwrap();
        assert_eq!(reads.iter_set().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);

        assert!(logs_contain("Model finished"));
    }

    #[test]
    fn test_three_slot_model_end_to_end() {
        let model = load(&three_slot_model(), RegistryConfig::default());

        assert_eq!(model.state_length(), 3);
        assert_eq!(model.types()[0].name(), "statement");
        assert_eq!(model.types()[0].chunks(), ["a", "b"]);
        assert_eq!(model.edge_labels()[0].name(), "action");
        assert_eq!(model.action_name(1), "b");
        assert_eq!(model.action_name(2), "Action 2");
        assert!(model.state_labels(&[0, 0, 0]).is_empty());
        assert_eq!(model.matrices().count(), 0);

        let successors: Vec<_> = model
            .next_states(&[0, 0, 0])
            .into_iter()
            .map(|(_, action)| model.action_name(action))
            .collect();
        assert_eq!(successors, vec!["a", "b"]);
    }

    #[test]
    fn test_action_label_default() {
        let provider = StaticModel::new()
            .slot("x", 0)
            .declare_type("int", &["p", "q"])
            .edge_label("value", 0)
            .actions(2);

        let model = load(&provider, RegistryConfig::default());
        assert_eq!(model.action_label(), Some(0));
        assert_eq!(model.action_name(1), "q");

        let model = load(
            &provider,
            RegistryConfig::default().with_default_action_label(false),
        );
        assert_eq!(model.action_label(), None);
        assert_eq!(model.action_name(1), "Action 1");
    }

    #[test]
    fn test_action_count_inferred_from_matrix() {
        let provider = StaticModel::new()
            .slot("x", 0)
            .slot("y", 0)
            .relation(
                Relation::ActionRead,
                vec![Some(vec![1, 0]), Some(vec![0, 1]), Some(vec![1, 1])],
            );

        let mut registry = ModelRegistry::default();
        register_model(&provider, &mut registry, &LoaderConfig::default()).unwrap();
        // Zero transition groups: the relation is never queried.
        assert_eq!(registry.action_count(), 0);

        let mut registry = ModelRegistry::default();
        registry.dispatch(Call::set_action_count(0)).unwrap();
        registry.dispatch(matrix_call(Relation::NoAccord, 3, 3)).unwrap();
        assert_eq!(registry.action_count(), 3);
        registry.dispatch(matrix_call(Relation::ActionRead, 5, 2)).unwrap();
        assert_eq!(registry.action_count(), 3);

        let mut registry = ModelRegistry::new(RegistryConfig::default().with_infer_action_count(false));
        registry.dispatch(matrix_call(Relation::NoAccord, 3, 3)).unwrap();
        assert_eq!(registry.action_count(), 0);
    }

    #[test]
    fn test_matrix_shape_checked_on_finish() {
        let mut registry = ModelRegistry::new(RegistryConfig::default().with_infer_action_count(false));
        register_model(&three_slot_model(), &mut registry, &LoaderConfig::default()).unwrap();
        registry.dispatch(matrix_call(Relation::ActionRead, 2, 2)).unwrap();

        assert_eq!(
            registry.finish().unwrap_err(),
            RegistryError::MatrixShape {
                relation: Relation::ActionRead,
                expected: (2, 3),
                found: (2, 2),
            }
        );
    }

    #[test]
    fn test_type_ids_in_call_order() {
        let mut registry = ModelRegistry::default();
        assert_eq!(registry.dispatch(Call::add_type("a")).unwrap(), Reply::TypeId(0));
        assert_eq!(registry.dispatch(Call::add_type("b")).unwrap(), Reply::TypeId(1));
        registry
            .dispatch(Call::add_chunk(1, &Chunk::new("x")).unwrap())
            .unwrap();
        assert_eq!(registry.type_count(), 2);

        let err = registry
            .dispatch(Call::add_chunk(2, &Chunk::new("y")).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::OutOfRange { index: 2, len: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_malformed_calls() {
        let mut registry = ModelRegistry::default();
        registry.dispatch(Call::set_state_length(2)).unwrap();

        let err = registry
            .dispatch(Call::set_state_slot_name(2, "z"))
            .unwrap_err();
        assert!(matches!(err, DispatchError::OutOfRange { index: 2, len: 2, .. }));

        let wrong_kind = Call::new(
            Operation::SetStateSlotName,
            vec![ArgCell::Text("0".into()), ArgCell::Text("x".into())],
        );
        assert!(matches!(
            registry.dispatch(wrong_kind).unwrap_err(),
            DispatchError::CellMismatch { position: 0, .. }
        ));

        let unknown = Call::new(
            Operation::SetMatrix,
            vec![
                ArgCell::Text("actionAccess".into()),
                ArgCell::Matrix(DependencyMatrix::new(1, 1).unwrap()),
            ],
        );
        assert!(matches!(
            registry.dispatch(unknown).unwrap_err(),
            DispatchError::Rejected(_)
        ));

        let swapped = Call::new(
            Operation::SetStateLabelsFn,
            vec![ArgCell::Handle(FnHandle::NextStates(NextStatesFn::new(
                |_, _| 0,
            )))],
        );
        assert!(matches!(
            registry.dispatch(swapped).unwrap_err(),
            DispatchError::Rejected(_)
        ));

        assert!(matches!(
            registry.dispatch(Call::set_initial_state(vec![0])).unwrap_err(),
            DispatchError::Rejected(_)
        ));
    }

    #[traced_test]
    #[test]
    fn test_huge_counts_rejected() {
        let counts = [
            Operation::SetStateLength,
            Operation::SetEdgeLabelCount,
            Operation::SetStateLabelCount,
            Operation::SetActionCount,
        ];
        for op in counts {
            let mut registry = ModelRegistry::default();
            let err = registry
                .dispatch(Call::new(op, vec![ArgCell::Int(i64::MAX)]))
                .unwrap_err();
            assert!(
                matches!(err, DispatchError::CountTooLarge { limit, .. } if limit == 1 << 24),
                "{op}: {err}"
            );
            assert_eq!(registry.action_count(), 0);
        }
        assert!(logs_contain("Count too large"));
    }

    #[test]
    fn test_max_count_is_inclusive() {
        let mut registry = ModelRegistry::new(RegistryConfig::default().with_max_count(4));
        registry.dispatch(Call::set_state_length(4)).unwrap();
        registry.dispatch(Call::set_action_count(4)).unwrap();

        let err = registry.dispatch(Call::set_edge_label_count(5)).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::CountTooLarge { count: 5, limit: 4, .. }
        ));

        let mut registry = ModelRegistry::new(RegistryConfig::default().with_max_count(4));
        let err = registry
            .dispatch(matrix_call(Relation::NoAccord, 5, 5))
            .unwrap_err();
        assert!(matches!(err, DispatchError::CountTooLarge { count: 5, .. }));
        assert_eq!(registry.action_count(), 0);
    }

    #[test]
    fn test_guards() {
        let mut registry = ModelRegistry::default();
        registry.dispatch(Call::set_state_label_count(2)).unwrap();
        registry.dispatch(Call::set_action_count(2)).unwrap();
        registry
            .dispatch(Call::set_guards_all(GuardList::new(vec![
                Guard::new(vec![1, 0, 1]),
                Guard::empty(),
            ])))
            .unwrap();
        registry
            .dispatch(Call::set_guards(1, Guard::new(vec![0])))
            .unwrap();

        let err = registry
            .dispatch(Call::set_guards(0, Guard::new(vec![2])))
            .unwrap_err();
        assert!(matches!(err, DispatchError::OutOfRange { index: 2, len: 2, .. }));

        registry.dispatch(Call::set_guards(4, Guard::new(vec![0]))).unwrap();
        assert_eq!(
            finish_minimal(registry).unwrap_err(),
            RegistryError::GuardAction {
                action: 4,
                actions: 2
            }
        );
    }

    #[test]
    fn test_guard_order_and_dedup() {
        let mut registry = ModelRegistry::default();
        registry.dispatch(Call::set_state_label_count(3)).unwrap();
        registry.dispatch(Call::set_action_count(1)).unwrap();
        registry
            .dispatch(Call::set_guards(0, Guard::new(vec![2, 0, 2])))
            .unwrap();

        let model = finish_minimal(registry).unwrap();
        let guard: Vec<_> = model.guard(0).unwrap().iter().copied().collect();
        assert_eq!(guard, vec![2, 0]);
    }

    #[test]
    fn test_finish_reports_missing_calls() {
        assert_eq!(
            ModelRegistry::default().finish().unwrap_err(),
            RegistryError::Missing("setStateLength")
        );

        let mut registry = ModelRegistry::default();
        registry.dispatch(Call::set_state_length(1)).unwrap();
        assert_eq!(
            registry.finish().unwrap_err(),
            RegistryError::Unnamed {
                what: "state slot",
                index: 0
            }
        );

        let mut registry = ModelRegistry::default();
        registry.dispatch(Call::set_state_length(0)).unwrap();
        registry.dispatch(Call::set_initial_state(vec![])).unwrap();
        assert_eq!(
            registry.finish().unwrap_err(),
            RegistryError::Missing("setNextStatesFn")
        );
    }

    /// Supply the calls `finish` requires, with an empty state vector and
    /// unnamed-free labels.
    fn finish_minimal(mut registry: ModelRegistry) -> Result<Model, RegistryError> {
        registry.dispatch(Call::set_state_length(0)).unwrap();
        registry.dispatch(Call::set_initial_state(vec![])).unwrap();
        registry
            .dispatch(Call::set_next_states_fn(NextStatesFn::new(|_, _| 0)))
            .unwrap();
        for label in 0..registry.state_labels.len() {
            registry
                .dispatch(Call::set_state_label_name(label, format!("l{label}")))
                .unwrap();
        }
        registry.finish()
    }
}
