//! Typed errors for family graph mutations.

/// Errors raised by graph mutations.
///
/// Only `add_child` carries a genuine precondition: the parent must
/// already be registered. Every other builder path is a deliberate soft
/// no-op (idempotent person upsert, silent spouse overwrite).
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("parent {name:?} is not in the family tree")]
    UnknownParent { name: String },
}
