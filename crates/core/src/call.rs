//! Calls: an operation plus its argument cells.

use crate::{ArgCell, CellKind, DispatchError, FnHandle, Operation};
use pins_matrix::DependencyMatrix;
use pins_types::{
    Chunk, ChunkError, Guard, GuardList, LabelEvaluator, NextStatesFn, Relation, TypeFormat,
};
use std::fmt;

/// One fact crossing the dispatch boundary.
#[derive(Debug, Clone)]
pub struct Call {
    op: Operation,
    args: Vec<ArgCell>,
}

impl Call {
    /// Create a call from raw parts. Use [`Call::validate`] before trusting it.
    pub fn new(op: Operation, args: Vec<ArgCell>) -> Self {
        Self { op, args }
    }

    // Collection sizes never exceed isize::MAX, so saturation only hits
    // values no receiver could accept anyway.
    fn int(n: usize) -> ArgCell {
        ArgCell::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Builders
    // ═══════════════════════════════════════════════════════════════════════

    /// Declare the number of state slots.
    pub fn set_state_length(n: usize) -> Self {
        Self::new(Operation::SetStateLength, vec![Self::int(n)])
    }

    /// Name a state slot.
    pub fn set_state_slot_name(slot: usize, name: impl Into<String>) -> Self {
        Self::new(
            Operation::SetStateSlotName,
            vec![Self::int(slot), ArgCell::Text(name.into())],
        )
    }

    /// Send the initial state vector.
    pub fn set_initial_state(state: Vec<i32>) -> Self {
        Self::new(Operation::SetInitialState, vec![ArgCell::Vector(state)])
    }

    /// Hand over the bulk successor function.
    pub fn set_next_states_fn(f: NextStatesFn) -> Self {
        Self::new(
            Operation::SetNextStatesFn,
            vec![ArgCell::Handle(FnHandle::NextStates(f))],
        )
    }

    /// Declare a type; the receiver replies with its id.
    pub fn add_type(name: impl Into<String>) -> Self {
        Self::new(Operation::AddType, vec![ArgCell::Text(name.into())])
    }

    /// Set the format of a declared type.
    pub fn set_type_format(type_id: usize, format: TypeFormat) -> Self {
        Self::new(
            Operation::SetTypeFormat,
            vec![Self::int(type_id), ArgCell::Int(format.code())],
        )
    }

    /// Marshal a chunk value. Fails if the chunk's terminator is not at its
    /// declared length.
    pub fn add_chunk(type_id: usize, chunk: &Chunk) -> Result<Self, ChunkError> {
        let text = chunk.to_text()?;
        Ok(Self::new(
            Operation::AddChunk,
            vec![Self::int(type_id), ArgCell::Text(text)],
        ))
    }

    /// Declare the number of edge labels.
    pub fn set_edge_label_count(n: usize) -> Self {
        Self::new(Operation::SetEdgeLabelCount, vec![Self::int(n)])
    }

    /// Name an edge label.
    pub fn set_edge_label_name(label: usize, name: impl Into<String>) -> Self {
        Self::new(
            Operation::SetEdgeLabelName,
            vec![Self::int(label), ArgCell::Text(name.into())],
        )
    }

    /// Bind an edge label to a declared type.
    pub fn set_edge_label_type(label: usize, type_id: usize) -> Self {
        Self::new(
            Operation::SetEdgeLabelType,
            vec![Self::int(label), Self::int(type_id)],
        )
    }

    /// Mark the edge label carrying the action identity.
    pub fn set_action_label(label: usize) -> Self {
        Self::new(Operation::SetActionLabel, vec![Self::int(label)])
    }

    /// Declare the number of state labels.
    pub fn set_state_label_count(n: usize) -> Self {
        Self::new(Operation::SetStateLabelCount, vec![Self::int(n)])
    }

    /// Name a state label.
    pub fn set_state_label_name(label: usize, name: impl Into<String>) -> Self {
        Self::new(
            Operation::SetStateLabelName,
            vec![Self::int(label), ArgCell::Text(name.into())],
        )
    }

    /// Hand over the chosen label evaluator.
    pub fn set_state_labels_fn(evaluator: LabelEvaluator) -> Self {
        Self::new(
            Operation::SetStateLabelsFn,
            vec![ArgCell::Handle(FnHandle::StateLabels(evaluator))],
        )
    }

    /// Declare the number of actions (transition groups).
    pub fn set_action_count(n: usize) -> Self {
        Self::new(Operation::SetActionCount, vec![Self::int(n)])
    }

    /// Send the guards of every action at once.
    pub fn set_guards_all(guards: GuardList) -> Self {
        Self::new(Operation::SetGuardsAll, vec![ArgCell::GuardList(guards)])
    }

    /// Send the guard of one action.
    pub fn set_guards(action: usize, guard: Guard) -> Self {
        Self::new(
            Operation::SetGuards,
            vec![Self::int(action), ArgCell::Guard(guard)],
        )
    }

    /// Send a dependency relation under its relation name.
    pub fn set_matrix(relation: Relation, matrix: DependencyMatrix) -> Self {
        Self::new(
            Operation::SetMatrix,
            vec![
                ArgCell::Text(relation.name().to_string()),
                ArgCell::Matrix(matrix),
            ],
        )
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Receiver side
    // ═══════════════════════════════════════════════════════════════════════

    /// The operation.
    pub fn op(&self) -> Operation {
        self.op
    }

    /// The argument cells.
    pub fn args(&self) -> &[ArgCell] {
        &self.args
    }

    /// Check arity and cell kinds against the operation's signature.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let signature = self.op.signature();
        if signature.len() != self.args.len() {
            return Err(DispatchError::ArityMismatch {
                op: self.op.name(),
                expected: signature.len(),
                found: self.args.len(),
            });
        }

        for (position, (expected, cell)) in signature.iter().zip(&self.args).enumerate() {
            if cell.kind() != *expected {
                return Err(self.mismatch(position, *expected));
            }
        }
        Ok(())
    }

    fn mismatch(&self, position: usize, expected: CellKind) -> DispatchError {
        match self.args.get(position) {
            Some(cell) => DispatchError::CellMismatch {
                op: self.op.name(),
                position,
                expected,
                found: cell.kind(),
            },
            None => DispatchError::ArityMismatch {
                op: self.op.name(),
                expected: self.op.signature().len(),
                found: self.args.len(),
            },
        }
    }

    /// Integer cell at `position`.
    pub fn int_at(&self, position: usize) -> Result<i64, DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::Int(n)) => Ok(*n),
            _ => Err(self.mismatch(position, CellKind::Int)),
        }
    }

    /// Integer cell at `position`, as a non-negative index.
    pub fn index_at(&self, position: usize) -> Result<usize, DispatchError> {
        let value = self.int_at(position)?;
        usize::try_from(value).map_err(|_| DispatchError::NegativeIndex {
            op: self.op.name(),
            position,
            value,
        })
    }

    /// Text cell at `position`.
    pub fn text_at(&self, position: usize) -> Result<&str, DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::Text(s)) => Ok(s.as_str()),
            _ => Err(self.mismatch(position, CellKind::Text)),
        }
    }

    /// Vector cell at `position`.
    pub fn vector_at(&self, position: usize) -> Result<&[i32], DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::Vector(v)) => Ok(v.as_slice()),
            _ => Err(self.mismatch(position, CellKind::Vector)),
        }
    }

    /// Matrix cell at `position`.
    pub fn matrix_at(&self, position: usize) -> Result<&DependencyMatrix, DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::Matrix(m)) => Ok(m),
            _ => Err(self.mismatch(position, CellKind::Matrix)),
        }
    }

    /// Guard cell at `position`.
    pub fn guard_at(&self, position: usize) -> Result<&Guard, DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::Guard(g)) => Ok(g),
            _ => Err(self.mismatch(position, CellKind::Guard)),
        }
    }

    /// Guard list cell at `position`.
    pub fn guards_at(&self, position: usize) -> Result<&GuardList, DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::GuardList(g)) => Ok(g),
            _ => Err(self.mismatch(position, CellKind::GuardList)),
        }
    }

    /// Function handle cell at `position`.
    pub fn handle_at(&self, position: usize) -> Result<&FnHandle, DispatchError> {
        match self.args.get(position) {
            Some(ArgCell::Handle(h)) => Ok(h),
            _ => Err(self.mismatch(position, CellKind::Handle)),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.op)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_match_signatures() {
        let calls = vec![
            Call::set_state_length(3),
            Call::set_state_slot_name(0, "x"),
            Call::set_initial_state(vec![0, 0, 0]),
            Call::set_next_states_fn(NextStatesFn::new(|_, _| 0)),
            Call::add_type("statement"),
            Call::set_type_format(0, TypeFormat::Enum),
            Call::add_chunk(0, &Chunk::new("a")).unwrap(),
            Call::set_edge_label_count(1),
            Call::set_edge_label_name(0, "action"),
            Call::set_edge_label_type(0, 0),
            Call::set_action_label(0),
            Call::set_state_label_count(0),
            Call::set_state_label_name(0, "green"),
            Call::set_state_labels_fn(LabelEvaluator::Long(std::sync::Arc::new(
                |_: usize, _: &[i32]| 0,
            ))),
            Call::set_action_count(2),
            Call::set_guards_all(GuardList::default()),
            Call::set_guards(0, Guard::empty()),
            Call::set_matrix(Relation::Commute, DependencyMatrix::new(2, 2).unwrap()),
        ];

        assert_eq!(calls.len(), Operation::ALL.len());
        for call in &calls {
            call.validate().unwrap();
        }
    }

    #[test]
    fn test_add_chunk_runs_boundary_guard() {
        let bad = Chunk::from_raw(1, b"ab\0".to_vec());
        assert!(matches!(
            Call::add_chunk(0, &bad),
            Err(ChunkError::Unterminated { declared: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_wrong_shape() {
        let call = Call::new(Operation::SetStateLength, vec![]);
        assert!(matches!(
            call.validate(),
            Err(DispatchError::ArityMismatch {
                expected: 1,
                found: 0,
                ..
            })
        ));

        let call = Call::new(
            Operation::SetMatrix,
            vec![ArgCell::Text("commute".into()), ArgCell::Int(4)],
        );
        assert!(matches!(
            call.validate(),
            Err(DispatchError::CellMismatch {
                position: 1,
                expected: CellKind::Matrix,
                found: CellKind::Int,
                ..
            })
        ));
    }

    #[test]
    fn test_typed_getters() {
        let call = Call::set_state_slot_name(2, "pc");
        assert_eq!(call.index_at(0).unwrap(), 2);
        assert_eq!(call.text_at(1).unwrap(), "pc");
        assert!(call.text_at(0).is_err());
        assert!(call.int_at(5).is_err());

        let negative = Call::new(Operation::SetActionLabel, vec![ArgCell::Int(-1)]);
        assert!(matches!(
            negative.index_at(0),
            Err(DispatchError::NegativeIndex { value: -1, .. })
        ));
    }

    #[test]
    fn test_oversized_count_saturates() {
        let call = Call::set_action_count(usize::MAX);
        call.validate().unwrap();
        let expected = i64::try_from(usize::MAX).unwrap_or(i64::MAX);
        assert_eq!(call.int_at(0).unwrap(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Call::set_state_slot_name(1, "y").to_string(),
            "setStateSlotName(1, \"y\")"
        );
        assert_eq!(
            Call::set_matrix(Relation::GuardTest, DependencyMatrix::new(2, 3).unwrap()).to_string(),
            "setMatrix(\"guardTest\", <matrix 2x3>)"
        );
    }
}
