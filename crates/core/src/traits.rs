//! The receiving side of the dispatch boundary.

use crate::{Call, DispatchError};
use std::fmt;

/// Answer to a dispatched call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to report.
    None,
    /// Id assigned to a newly added type.
    TypeId(usize),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::None => f.write_str("none"),
            Reply::TypeId(id) => write!(f, "type id {id}"),
        }
    }
}

/// Receives every fact of a registration pass.
///
/// This is the single channel through which a model's structure leaves the
/// loader. Implementations typically build their own in-memory model.
///
/// # Guarantees expected of implementors
///
/// - **Synchronous**: `dispatch` returns before the sender proceeds
/// - **Owning**: the call is handed over by value; anything kept is the
///   receiver's own copy
/// - **Ordered ids**: `addType` is answered with [`Reply::TypeId`], ids
///   allocated 0, 1, 2, ... in call order
///
/// # Example
///
/// ```ignore
/// impl Dispatcher for Recorder {
///     fn dispatch(&mut self, call: Call) -> Result<Reply, DispatchError> {
///         call.validate()?;
///         let reply = match call.op() {
///             Operation::AddType => {
///                 self.types += 1;
///                 Reply::TypeId(self.types - 1)
///             }
///             _ => Reply::None,
///         };
///         self.calls.push(call);
///         Ok(reply)
///     }
/// }
/// ```
pub trait Dispatcher {
    /// Handle one call.
    fn dispatch(&mut self, call: Call) -> Result<Reply, DispatchError>;
}

impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    fn dispatch(&mut self, call: Call) -> Result<Reply, DispatchError> {
        (**self).dispatch(call)
    }
}

/// Adapts a single callback function into a [`Dispatcher`].
pub struct FnDispatcher<F>(pub F);

impl<F> Dispatcher for FnDispatcher<F>
where
    F: FnMut(Call) -> Result<Reply, DispatchError>,
{
    fn dispatch(&mut self, call: Call) -> Result<Reply, DispatchError> {
        (self.0)(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operation;

    #[test]
    fn test_fn_dispatcher() {
        let mut seen = Vec::new();
        let mut dispatcher = FnDispatcher(|call: Call| {
            seen.push(call.op());
            Ok(Reply::None)
        });

        dispatcher.dispatch(Call::set_state_length(1)).unwrap();
        dispatcher.dispatch(Call::set_action_count(0)).unwrap();
        drop(dispatcher);

        assert_eq!(
            seen,
            vec![Operation::SetStateLength, Operation::SetActionCount]
        );
    }

    #[test]
    fn test_boxed_dispatcher() {
        let mut boxed: Box<dyn Dispatcher> =
            Box::new(FnDispatcher(|_: Call| Err(DispatchError::Rejected("no".into()))));
        assert!(matches!(
            boxed.dispatch(Call::set_state_length(1)),
            Err(DispatchError::Rejected(_))
        ));
    }
}
