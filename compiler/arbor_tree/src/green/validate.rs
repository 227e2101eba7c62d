//! Shape checks for green node construction.
//!
//! `GreenNode::new` runs these in debug builds and panics on failure;
//! `GreenNode::try_new` returns the error instead. A correctly generated
//! factory never fails them.

use thiserror::Error;

use super::GreenNode;
use crate::{Kind, Payload, PayloadType, SlotArity};

/// A node that does not fit its kind's shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("kind `{kind}` has no shape")]
    MissingShape { kind: &'static str },

    #[error("kind `{kind}` is not valid for shape `{shape}`")]
    KindNotInShape {
        kind: &'static str,
        shape: &'static str,
    },

    #[error("`{kind}` expects {expected} slots, got {found}")]
    SlotCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`{kind}` expects {expected} payload fields, got {found}")]
    PayloadCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("payload field `{field}` of `{kind}` expects {expected:?}, got {found:?}")]
    PayloadMismatch {
        kind: &'static str,
        field: &'static str,
        expected: PayloadType,
        found: PayloadType,
    },

    #[error("required slot `{slot}` of `{kind}` is absent")]
    MissingChild {
        kind: &'static str,
        slot: &'static str,
    },

    #[error("slot `{slot}` of `{kind}` does not accept `{child}`")]
    UnexpectedChildKind {
        kind: &'static str,
        slot: &'static str,
        child: &'static str,
    },

    #[error("slot `{slot}` of `{kind}` expects a list, got `{child}`")]
    ExpectedList {
        kind: &'static str,
        slot: &'static str,
        child: &'static str,
    },

    #[error("slot `{slot}` of `{kind}` holds a list but is not list-valued")]
    UnexpectedList {
        kind: &'static str,
        slot: &'static str,
    },

    #[error("list element {index} is absent")]
    AbsentListElement { index: usize },

    #[error("list element {index} is itself a list")]
    NestedList { index: usize },
}

pub(super) fn check<K: Kind>(
    kind: K,
    slots: &[Option<GreenNode<K>>],
    payload: &[Payload],
) -> Result<(), ShapeError> {
    if kind.is_list() {
        return check_list(kind, slots, payload);
    }

    let shape = kind
        .shape()
        .ok_or(ShapeError::MissingShape { kind: kind.name() })?;

    if !shape.allows_kind(kind) {
        return Err(ShapeError::KindNotInShape {
            kind: kind.name(),
            shape: shape.name,
        });
    }
    if slots.len() != shape.slots.len() {
        return Err(ShapeError::SlotCount {
            kind: kind.name(),
            expected: shape.slots.len(),
            found: slots.len(),
        });
    }
    if payload.len() != shape.payload.len() {
        return Err(ShapeError::PayloadCount {
            kind: kind.name(),
            expected: shape.payload.len(),
            found: payload.len(),
        });
    }

    for (spec, value) in shape.payload.iter().zip(payload) {
        if spec.ty != value.ty() {
            return Err(ShapeError::PayloadMismatch {
                kind: kind.name(),
                field: spec.name,
                expected: spec.ty,
                found: value.ty(),
            });
        }
    }

    for (spec, slot) in shape.slots.iter().zip(slots) {
        let unexpected = |child: K| ShapeError::UnexpectedChildKind {
            kind: kind.name(),
            slot: spec.name,
            child: child.name(),
        };

        match (spec.arity, slot) {
            (SlotArity::Required, None) => {
                return Err(ShapeError::MissingChild {
                    kind: kind.name(),
                    slot: spec.name,
                });
            }
            (SlotArity::Optional | SlotArity::List, None) => {}
            (SlotArity::Required | SlotArity::Optional, Some(child)) => {
                if child.kind().is_list() {
                    return Err(ShapeError::UnexpectedList {
                        kind: kind.name(),
                        slot: spec.name,
                    });
                }
                if !spec.accepts_kind(child.kind()) {
                    return Err(unexpected(child.kind()));
                }
            }
            (SlotArity::List, Some(list)) => {
                if !list.kind().is_list() {
                    return Err(ShapeError::ExpectedList {
                        kind: kind.name(),
                        slot: spec.name,
                        child: list.kind().name(),
                    });
                }
                if let Some(element) = list
                    .child_nodes()
                    .find(|element| !spec.accepts_kind(element.kind()))
                {
                    return Err(unexpected(element.kind()));
                }
            }
        }
    }

    Ok(())
}

fn check_list<K: Kind>(
    kind: K,
    elements: &[Option<GreenNode<K>>],
    payload: &[Payload],
) -> Result<(), ShapeError> {
    if !payload.is_empty() {
        return Err(ShapeError::PayloadCount {
            kind: kind.name(),
            expected: 0,
            found: payload.len(),
        });
    }
    for (index, element) in elements.iter().enumerate() {
        match element {
            None => return Err(ShapeError::AbsentListElement { index }),
            Some(element) if element.kind().is_list() => {
                return Err(ShapeError::NestedList { index });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
