//! The registration pass.

use crate::{ActionLabelPolicy, LoaderConfig, RegistrationError};
use pins_core::{Call, Dispatcher, ModelProvider, Reply};
use pins_matrix::convert;
use pins_types::{GuardList, IndexSpace, LabelEvaluator, Relation};
use tracing::{debug, info, trace, warn};

/// What a registration pass sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
    /// State vector length.
    pub slots: usize,
    /// Number of types declared.
    pub types: usize,
    /// Number of chunks sent across all types.
    pub chunks: usize,
    /// Number of edge labels.
    pub edge_labels: usize,
    /// Edge label chosen as action label, if any.
    pub action_label: Option<usize>,
    /// Number of state labels.
    pub state_labels: usize,
    /// Kind of label evaluator sent (`"all"` or `"long"`), if any.
    pub label_evaluator: Option<&'static str>,
    /// Number of transition groups.
    pub actions: usize,
    /// Relations sent with `setMatrix`, in order.
    pub emitted: Vec<Relation>,
    /// Relations found absent and not sent.
    pub suppressed: Vec<Relation>,
}

/// Register `provider` with `dispatcher`.
///
/// Walks the provider once in a fixed order and dispatches every fact. The
/// first provider, guard or dispatch failure aborts the pass; calls already
/// dispatched are not retracted.
///
/// # Errors
///
/// See [`RegistrationError`].
pub fn register_model<P, D>(
    provider: &P,
    dispatcher: &mut D,
    config: &LoaderConfig,
) -> Result<RegistrationSummary, RegistrationError>
where
    P: ModelProvider + ?Sized,
    D: Dispatcher + ?Sized,
{
    let mut pass = Registration {
        provider,
        dispatcher,
        config,
        type_names: Vec::new(),
        summary: RegistrationSummary::default(),
    };

    pass.state_vector()?;
    pass.types()?;
    pass.edge_labels()?;
    pass.initial_state()?;
    pass.next_states()?;
    pass.state_labels()?;
    pass.transition_groups()?;
    pass.matrices()?;

    let summary = pass.summary;
    info!(
        slots = summary.slots,
        types = summary.types,
        edge_labels = summary.edge_labels,
        state_labels = summary.state_labels,
        actions = summary.actions,
        matrices = summary.emitted.len(),
        "Registered model"
    );
    Ok(summary)
}

/// State of one registration pass.
struct Registration<'a, P: ?Sized, D: ?Sized> {
    provider: &'a P,
    dispatcher: &'a mut D,
    config: &'a LoaderConfig,
    /// Declared types by id.
    type_names: Vec<String>,
    summary: RegistrationSummary,
}

impl<P, D> Registration<'_, P, D>
where
    P: ModelProvider + ?Sized,
    D: Dispatcher + ?Sized,
{
    fn send(&mut self, call: Call) -> Result<Reply, RegistrationError> {
        trace!(call = %call, "Dispatching");
        Ok(self.dispatcher.dispatch(call)?)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // State vector
    // ═══════════════════════════════════════════════════════════════════════

    fn state_vector(&mut self) -> Result<(), RegistrationError> {
        let slots = self.provider.state_length();
        self.send(Call::set_state_length(slots))?;
        for slot in 0..slots {
            let name = self.provider.state_slot_name(slot)?;
            self.send(Call::set_state_slot_name(slot, name))?;
        }
        self.summary.slots = slots;
        debug!(slots, "Registered state vector");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Types and chunks
    // ═══════════════════════════════════════════════════════════════════════

    fn types(&mut self) -> Result<(), RegistrationError> {
        let types = self.provider.type_count();
        for ty in 0..types {
            let name = self.provider.type_name(ty)?;
            match self.send(Call::add_type(name.clone()))? {
                Reply::TypeId(id) if id == ty => {}
                reply => {
                    return Err(RegistrationError::TypeIdMismatch {
                        expected: ty,
                        reply,
                    })
                }
            }
            self.type_names.push(name);

            if let Some(format) = self.provider.type_format(ty) {
                self.send(Call::set_type_format(ty, format))?;
            }

            let values = self.provider.type_value_count(ty);
            for value in 0..values {
                let chunk = self.provider.type_value(ty, value)?;
                let call = Call::add_chunk(ty, &chunk).map_err(|source| {
                    RegistrationError::Chunk {
                        type_id: ty,
                        value,
                        source,
                    }
                })?;
                self.send(call)?;
            }
            self.summary.chunks += values;
            debug!(type_id = ty, name = %self.type_names[ty], values, "Registered type");
        }
        self.summary.types = types;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Edge labels
    // ═══════════════════════════════════════════════════════════════════════

    fn edge_labels(&mut self) -> Result<(), RegistrationError> {
        let labels = self.provider.edge_label_count();
        self.send(Call::set_edge_label_count(labels))?;

        let mut candidates = Vec::new();
        for label in 0..labels {
            let name = self.provider.edge_label_name(label)?;
            self.send(Call::set_edge_label_name(label, name))?;

            let type_id = self.provider.edge_label_type(label);
            let Some(type_name) = self.type_names.get(type_id) else {
                return Err(RegistrationError::UnknownType { label, type_id });
            };
            if *type_name == self.config.action_type_name {
                candidates.push(label);
            }
            self.send(Call::set_edge_label_type(label, type_id))?;
        }
        self.summary.edge_labels = labels;

        if candidates.len() > 1 {
            warn!(
                candidates = ?candidates,
                policy = ?self.config.action_label_policy,
                "Several edge labels qualify as action label"
            );
        }
        let chosen = match self.config.action_label_policy {
            ActionLabelPolicy::FirstMatch => candidates.first(),
            ActionLabelPolicy::LastMatch => candidates.last(),
        };
        match chosen.copied() {
            Some(label) => {
                self.send(Call::set_action_label(label))?;
                self.summary.action_label = Some(label);
                debug!(label, "Registered action label");
            }
            None => debug!(
                type_name = %self.config.action_type_name,
                "No edge label carries the action type"
            ),
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Initial state and successor function
    // ═══════════════════════════════════════════════════════════════════════

    fn initial_state(&mut self) -> Result<(), RegistrationError> {
        let state = self.provider.initial_state()?;
        if state.len() != self.summary.slots {
            return Err(RegistrationError::StateLength {
                expected: self.summary.slots,
                actual: state.len(),
            });
        }
        self.send(Call::set_initial_state(state))?;
        Ok(())
    }

    fn next_states(&mut self) -> Result<(), RegistrationError> {
        let next = self.provider.next_states_all();
        self.send(Call::set_next_states_fn(next))?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // State labels
    // ═══════════════════════════════════════════════════════════════════════

    fn state_labels(&mut self) -> Result<(), RegistrationError> {
        let labels = self.provider.state_label_count();
        self.send(Call::set_state_label_count(labels))?;
        for label in 0..labels {
            let name = self.provider.state_label_name(label)?;
            self.send(Call::set_state_label_name(label, name))?;
        }
        self.summary.state_labels = labels;

        let evaluator = LabelEvaluator::prefer(
            self.provider.state_labels_all(),
            self.provider.state_label_long(),
        );
        match evaluator {
            Some(evaluator) => {
                let kind = evaluator.kind();
                self.send(Call::set_state_labels_fn(evaluator))?;
                self.summary.label_evaluator = Some(kind);
                debug!(labels, evaluator = kind, "Registered state labels");
            }
            None => debug!(labels, "Registered state labels without evaluator"),
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Transition groups
    // ═══════════════════════════════════════════════════════════════════════

    fn transition_groups(&mut self) -> Result<(), RegistrationError> {
        let actions = self.provider.transition_group_count();
        self.send(Call::set_action_count(actions))?;

        let guards = (0..actions)
            .map(|group| self.provider.transition_guard(group))
            .collect::<Result<GuardList, _>>()?;
        let labels = self.summary.state_labels;
        for (group, guard) in guards.iter() {
            if let Some(&label) = guard.labels().iter().find(|&&l| l >= labels) {
                return Err(RegistrationError::GuardLabel {
                    group,
                    label,
                    labels,
                });
            }
        }

        self.send(Call::set_guards_all(guards))?;
        self.summary.actions = actions;
        debug!(actions, "Registered transition groups");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Relations
    // ═══════════════════════════════════════════════════════════════════════

    fn dimension(&self, space: IndexSpace) -> usize {
        match space {
            IndexSpace::Actions => self.summary.actions,
            IndexSpace::Labels => self.summary.state_labels,
            IndexSpace::Slots => self.summary.slots,
        }
    }

    fn matrices(&mut self) -> Result<(), RegistrationError> {
        let provider = self.provider;
        for relation in Relation::ALL {
            let (row_space, col_space) = relation.shape();
            let rows = self.dimension(row_space);
            let cols = self.dimension(col_space);

            let sent = convert(
                rows,
                cols,
                |row| provider.relation_row(relation, row),
                |matrix| self.send(Call::set_matrix(relation, matrix)).map(|_| ()),
            )?;

            if sent {
                self.summary.emitted.push(relation);
            } else {
                debug!(%relation, rows, cols, "Relation absent, not sent");
                self.summary.suppressed.push(relation);
            }
        }
        Ok(())
    }
}
