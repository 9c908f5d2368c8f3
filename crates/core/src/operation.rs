//! The dispatch operation catalog.

use crate::CellKind;
use std::fmt;
use std::str::FromStr;

/// Every operation that may cross the dispatch boundary.
///
/// The operation alone decides how each positional cell is interpreted;
/// [`Operation::signature`] lists the expected cell kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // ═══════════════════════════════════════════════════════════════════════
    // State vector
    // ═══════════════════════════════════════════════════════════════════════
    /// `setStateLength(n)`
    SetStateLength,
    /// `setStateSlotName(slot, name)`
    SetStateSlotName,
    /// `setInitialState(vector)`
    SetInitialState,
    /// `setNextStatesFn(handle)`
    SetNextStatesFn,

    // ═══════════════════════════════════════════════════════════════════════
    // Types and chunks
    // ═══════════════════════════════════════════════════════════════════════
    /// `addType(name) -> typeId`
    AddType,
    /// `setTypeFormat(typeId, format)`
    SetTypeFormat,
    /// `addChunk(typeId, value)`
    AddChunk,

    // ═══════════════════════════════════════════════════════════════════════
    // Edge labels
    // ═══════════════════════════════════════════════════════════════════════
    /// `setEdgeLabelCount(n)`
    SetEdgeLabelCount,
    /// `edgeLabel.setName(label, name)`
    SetEdgeLabelName,
    /// `edgeLabel.setType(label, typeId)`
    SetEdgeLabelType,
    /// `setActionLabel(label)`
    SetActionLabel,

    // ═══════════════════════════════════════════════════════════════════════
    // State labels
    // ═══════════════════════════════════════════════════════════════════════
    /// `setStateLabelCount(n)`
    SetStateLabelCount,
    /// `setStateLabelName(label, name)`
    SetStateLabelName,
    /// `setStateLabelsFn(handle)`
    SetStateLabelsFn,

    // ═══════════════════════════════════════════════════════════════════════
    // Transition groups
    // ═══════════════════════════════════════════════════════════════════════
    /// `setActionCount(n)`
    SetActionCount,
    /// `setGuardsAll(guards)`
    SetGuardsAll,
    /// `setGuards(action, guard)`
    SetGuards,
    /// `setMatrix(relation, matrix)`
    SetMatrix,
}

impl Operation {
    /// The whole catalog.
    pub const ALL: [Operation; 18] = [
        Operation::SetStateLength,
        Operation::SetStateSlotName,
        Operation::SetInitialState,
        Operation::SetNextStatesFn,
        Operation::AddType,
        Operation::SetTypeFormat,
        Operation::AddChunk,
        Operation::SetEdgeLabelCount,
        Operation::SetEdgeLabelName,
        Operation::SetEdgeLabelType,
        Operation::SetActionLabel,
        Operation::SetStateLabelCount,
        Operation::SetStateLabelName,
        Operation::SetStateLabelsFn,
        Operation::SetActionCount,
        Operation::SetGuardsAll,
        Operation::SetGuards,
        Operation::SetMatrix,
    ];

    /// Name of the operation on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Operation::SetStateLength => "setStateLength",
            Operation::SetStateSlotName => "setStateSlotName",
            Operation::SetInitialState => "setInitialState",
            Operation::SetNextStatesFn => "setNextStatesFn",
            Operation::AddType => "addType",
            Operation::SetTypeFormat => "setTypeFormat",
            Operation::AddChunk => "addChunk",
            Operation::SetEdgeLabelCount => "setEdgeLabelCount",
            Operation::SetEdgeLabelName => "edgeLabel.setName",
            Operation::SetEdgeLabelType => "edgeLabel.setType",
            Operation::SetActionLabel => "setActionLabel",
            Operation::SetStateLabelCount => "setStateLabelCount",
            Operation::SetStateLabelName => "setStateLabelName",
            Operation::SetStateLabelsFn => "setStateLabelsFn",
            Operation::SetActionCount => "setActionCount",
            Operation::SetGuardsAll => "setGuardsAll",
            Operation::SetGuards => "setGuards",
            Operation::SetMatrix => "setMatrix",
        }
    }

    /// Expected kinds of the argument cells, in order.
    pub fn signature(self) -> &'static [CellKind] {
        use CellKind::*;
        match self {
            Operation::SetStateLength
            | Operation::SetEdgeLabelCount
            | Operation::SetActionLabel
            | Operation::SetStateLabelCount
            | Operation::SetActionCount => &[Int],
            Operation::SetStateSlotName
            | Operation::AddChunk
            | Operation::SetEdgeLabelName
            | Operation::SetStateLabelName => &[Int, Text],
            Operation::SetTypeFormat | Operation::SetEdgeLabelType => &[Int, Int],
            Operation::AddType => &[Text],
            Operation::SetInitialState => &[Vector],
            Operation::SetNextStatesFn | Operation::SetStateLabelsFn => &[Handle],
            Operation::SetGuardsAll => &[GuardList],
            Operation::SetGuards => &[Int, Guard],
            Operation::SetMatrix => &[Text, Matrix],
        }
    }

    /// Whether the receiver answers with a value.
    pub fn has_reply(self) -> bool {
        matches!(self, Operation::AddType)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| s.to_string())
    }
}
