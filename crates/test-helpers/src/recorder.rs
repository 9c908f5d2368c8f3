//! Dispatcher that records calls.

use pins_core::{Call, DispatchError, Dispatcher, Operation, Reply};

/// Records every call it receives.
///
/// Answers `addType` with ids 0, 1, 2, ... unless told to lie, and can be
/// told to reject a given operation.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    calls: Vec<Call>,
    types_added: usize,
    type_id_offset: usize,
    reject: Option<Operation>,
}

impl RecordingDispatcher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `addType` with ids shifted by `offset`.
    pub fn with_type_id_offset(mut self, offset: usize) -> Self {
        self.type_id_offset = offset;
        self
    }

    /// Reject every call of `op`.
    pub fn rejecting(mut self, op: Operation) -> Self {
        self.reject = Some(op);
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Recorded operations, in order.
    pub fn ops(&self) -> Vec<Operation> {
        self.calls.iter().map(|c| c.op()).collect()
    }

    /// Recorded calls rendered as text; handles render without identity.
    pub fn transcript(&self) -> Vec<String> {
        self.calls.iter().map(|c| c.to_string()).collect()
    }

    /// Recorded calls of one operation.
    pub fn calls_of(&self, op: Operation) -> impl Iterator<Item = &Call> + '_ {
        self.calls.iter().filter(move |c| c.op() == op)
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&mut self, call: Call) -> Result<Reply, DispatchError> {
        call.validate()?;
        if self.reject == Some(call.op()) {
            return Err(DispatchError::Rejected(call.op().name().to_string()));
        }

        let reply = if call.op().has_reply() {
            let id = self.types_added + self.type_id_offset;
            self.types_added += 1;
            Reply::TypeId(id)
        } else {
            Reply::None
        };

        self.calls.push(call);
        Ok(reply)
    }
}
