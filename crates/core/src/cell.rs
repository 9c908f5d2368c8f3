//! Tagged argument cells.

use pins_matrix::DependencyMatrix;
use pins_types::{Guard, GuardList, LabelEvaluator, NextStatesFn};
use std::fmt;

/// Function-valued argument, transported but never called by the bridge.
#[derive(Debug, Clone)]
pub enum FnHandle {
    /// Bulk successor enumeration.
    NextStates(NextStatesFn),
    /// State label evaluation.
    StateLabels(LabelEvaluator),
}

impl FnHandle {
    /// Whether both handles refer to the same function.
    pub fn same_handle(&self, other: &Self) -> bool {
        match (self, other) {
            (FnHandle::NextStates(a), FnHandle::NextStates(b)) => a.same_handle(b),
            (FnHandle::StateLabels(a), FnHandle::StateLabels(b)) => a.same_handle(b),
            _ => false,
        }
    }
}

/// Kind of an argument cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Int,
    Text,
    Vector,
    Matrix,
    Guard,
    GuardList,
    Handle,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Int => "integer",
            CellKind::Text => "text",
            CellKind::Vector => "vector",
            CellKind::Matrix => "matrix",
            CellKind::Guard => "guard",
            CellKind::GuardList => "guard list",
            CellKind::Handle => "function handle",
        };
        f.write_str(name)
    }
}

/// One positional argument of a [`Call`](crate::Call).
///
/// Cells own their payload. Once a call is dispatched the sender keeps
/// nothing, so a receiver may hold on to whatever it takes out.
#[derive(Debug, Clone)]
pub enum ArgCell {
    /// Integer (counts, indices, type ids, format codes).
    Int(i64),
    /// Explicit-length UTF-8 text; may contain NUL.
    Text(String),
    /// State vector.
    Vector(Vec<i32>),
    /// Dependency matrix.
    Matrix(DependencyMatrix),
    /// Guard of a single transition group.
    Guard(Guard),
    /// Guards of every transition group.
    GuardList(GuardList),
    /// Function handle.
    Handle(FnHandle),
}

impl ArgCell {
    /// Kind of this cell.
    pub fn kind(&self) -> CellKind {
        match self {
            ArgCell::Int(_) => CellKind::Int,
            ArgCell::Text(_) => CellKind::Text,
            ArgCell::Vector(_) => CellKind::Vector,
            ArgCell::Matrix(_) => CellKind::Matrix,
            ArgCell::Guard(_) => CellKind::Guard,
            ArgCell::GuardList(_) => CellKind::GuardList,
            ArgCell::Handle(_) => CellKind::Handle,
        }
    }
}

impl fmt::Display for ArgCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgCell::Int(n) => write!(f, "{n}"),
            ArgCell::Text(s) => write!(f, "{s:?}"),
            ArgCell::Vector(v) => write!(f, "{v:?}"),
            ArgCell::Matrix(m) => write!(f, "<matrix {}x{}>", m.rows(), m.cols()),
            ArgCell::Guard(g) => write!(f, "<guard {:?}>", g.labels()),
            ArgCell::GuardList(g) => write!(f, "<guards x{}>", g.len()),
            ArgCell::Handle(FnHandle::NextStates(_)) => f.write_str("<fn next-states>"),
            ArgCell::Handle(FnHandle::StateLabels(e)) => write!(f, "<fn labels:{}>", e.kind()),
        }
    }
}
