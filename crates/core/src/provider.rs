//! The query contract of a loadable model.

use crate::ProviderError;
use pins_types::{
    Chunk, Guard, NextStatesFn, Relation, StateLabelLongFn, StateLabelsAllFn, TypeFormat,
};

/// An already-elaborated state-transition system, seen through queries.
///
/// The registration driver calls these in a fixed order, once per pass.
/// Counts are infallible; lookups of names and values may fail, and any
/// failure aborts the pass.
///
/// # Dependency relations
///
/// Each relation is exposed as a row accessor returning either a row of
/// `cols` integers (non-zero meaning "related") or `None`. A `None` for row 0
/// means the model has no information for that relation at all. The
/// accessors default to `None`.
pub trait ModelProvider {
    // ═══════════════════════════════════════════════════════════════════════
    // State vector
    // ═══════════════════════════════════════════════════════════════════════

    /// Number of slots in the state vector.
    fn state_length(&self) -> usize;

    /// Name of a state slot.
    fn state_slot_name(&self, slot: usize) -> Result<String, ProviderError>;

    /// The initial state; must have `state_length()` entries.
    fn initial_state(&self) -> Result<Vec<i32>, ProviderError>;

    /// Bulk successor enumeration.
    fn next_states_all(&self) -> NextStatesFn;

    // ═══════════════════════════════════════════════════════════════════════
    // Types
    // ═══════════════════════════════════════════════════════════════════════

    /// Number of declared types.
    fn type_count(&self) -> usize;

    /// Name of a declared type.
    fn type_name(&self, ty: usize) -> Result<String, ProviderError>;

    /// Format of a declared type, if the model states one.
    fn type_format(&self, _ty: usize) -> Option<TypeFormat> {
        None
    }

    /// Number of values (chunks) of a declared type.
    fn type_value_count(&self, ty: usize) -> usize;

    /// One value of a declared type.
    fn type_value(&self, ty: usize, value: usize) -> Result<Chunk, ProviderError>;

    // ═══════════════════════════════════════════════════════════════════════
    // Edge labels
    // ═══════════════════════════════════════════════════════════════════════

    /// Number of edge labels.
    fn edge_label_count(&self) -> usize;

    /// Name of an edge label.
    fn edge_label_name(&self, label: usize) -> Result<String, ProviderError>;

    /// Declared type of an edge label.
    fn edge_label_type(&self, label: usize) -> usize;

    // ═══════════════════════════════════════════════════════════════════════
    // State labels
    // ═══════════════════════════════════════════════════════════════════════

    /// Number of state labels (guards included).
    fn state_label_count(&self) -> usize;

    /// Name of a state label.
    fn state_label_name(&self, label: usize) -> Result<String, ProviderError>;

    /// Bulk label evaluation, if offered.
    fn state_labels_all(&self) -> Option<StateLabelsAllFn> {
        None
    }

    /// Per-label evaluation, if offered.
    fn state_label_long(&self) -> Option<StateLabelLongFn> {
        None
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Transition groups
    // ═══════════════════════════════════════════════════════════════════════

    /// Number of transition groups.
    fn transition_group_count(&self) -> usize;

    /// Guard of a transition group as a `[length, label0, label1, ...]` row.
    fn transition_guard_row(&self, _group: usize) -> Option<Vec<i32>> {
        None
    }

    /// Guard of a transition group.
    ///
    /// Decodes [`ModelProvider::transition_guard_row`] unless overridden.
    /// A group without a row, or with a malformed one, is an error.
    fn transition_guard(&self, group: usize) -> Result<Guard, ProviderError> {
        let row = self
            .transition_guard_row(group)
            .ok_or_else(|| ProviderError::query("transition group", group, "no guard row"))?;
        Ok(Guard::from_prefixed(&row)?)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Dependency relations
    // ═══════════════════════════════════════════════════════════════════════

    /// Do-not-accord row (actions x actions).
    fn do_not_accord_row(&self, _group: usize) -> Option<Vec<i32>> {
        None
    }

    /// Necessary enabling set row (labels x actions).
    fn guard_nes_row(&self, _label: usize) -> Option<Vec<i32>> {
        None
    }

    /// Necessary disabling set row (labels x actions).
    fn guard_nds_row(&self, _label: usize) -> Option<Vec<i32>> {
        None
    }

    /// Commutation row (actions x actions).
    fn commutes_row(&self, _group: usize) -> Option<Vec<i32>> {
        None
    }

    /// May-be-co-enabled row (labels x labels).
    fn coenabled_row(&self, _label: usize) -> Option<Vec<i32>> {
        None
    }

    /// Read dependencies (actions x slots).
    fn read_dependencies_row(&self, _group: usize) -> Option<Vec<i32>> {
        None
    }

    /// May-write dependencies (actions x slots).
    fn may_write_dependencies_row(&self, _group: usize) -> Option<Vec<i32>> {
        None
    }

    /// Must-write dependencies (actions x slots).
    fn must_write_dependencies_row(&self, _group: usize) -> Option<Vec<i32>> {
        None
    }

    /// State label dependencies (labels x slots).
    fn label_dependencies_row(&self, _label: usize) -> Option<Vec<i32>> {
        None
    }

    /// Row of any relation, routed to its accessor.
    fn relation_row(&self, relation: Relation, row: usize) -> Option<Vec<i32>> {
        match relation {
            Relation::NoAccord => self.do_not_accord_row(row),
            Relation::GuardNes => self.guard_nes_row(row),
            Relation::GuardNds => self.guard_nds_row(row),
            Relation::Commute => self.commutes_row(row),
            Relation::CoEnabled => self.coenabled_row(row),
            Relation::ActionRead => self.read_dependencies_row(row),
            Relation::ActionMayWrite => self.may_write_dependencies_row(row),
            Relation::ActionMustWrite => self.must_write_dependencies_row(row),
            Relation::GuardTest => self.label_dependencies_row(row),
        }
    }
}
