//! Ready-made models.

use crate::{LabelMode, StaticModel};
use pins_types::Relation;

/// Three slots, one `statement` type with values `a` and `b`, one `action`
/// edge label, no state labels, two transition groups, no relations.
pub fn three_slot_model() -> StaticModel {
    StaticModel::new()
        .slot("x", 0)
        .slot("y", 0)
        .slot("z", 0)
        .declare_type("statement", &["a", "b"])
        .edge_label("action", 0)
        .actions(2)
        .transition(&[0, 0, 0], 0, &[0], &[1, 0, 0])
        .transition(&[0, 0, 0], 1, &[1], &[0, 1, 0])
}

/// Traffic light with two slots (`red`, `green`) and two transition groups.
///
/// Group 0 switches red to green and is guarded by label `red`; group 1
/// switches back and is guarded by `green`. Every relation except `commute`
/// is present; `commute` is absent at row 0 and must not be sent.
pub fn traffic_light() -> StaticModel {
    StaticModel::new()
        .slot("red", 1)
        .slot("green", 0)
        .declare_type("statement", &["red -> green", "green -> red"])
        .edge_label("action", 0)
        .state_label("red", 0, 1)
        .state_label("green", 1, 1)
        .label_mode(LabelMode::Both)
        .guard(0, &[0])
        .guard(1, &[1])
        .transition(&[1, 0], 0, &[0], &[0, 1])
        .transition(&[0, 1], 1, &[1], &[1, 0])
        .relation(
            Relation::NoAccord,
            vec![Some(vec![0, 1]), Some(vec![1, 0])],
        )
        .relation(Relation::GuardNes, vec![Some(vec![0, 1]), Some(vec![1, 0])])
        .relation(Relation::GuardNds, vec![Some(vec![1, 0]), Some(vec![0, 1])])
        .relation(Relation::Commute, vec![None, Some(vec![1, 1])])
        .relation(Relation::CoEnabled, vec![Some(vec![1, 0]), Some(vec![0, 1])])
        .relation(Relation::ActionRead, vec![Some(vec![1, 0]), Some(vec![0, 1])])
        .relation(
            Relation::ActionMayWrite,
            vec![Some(vec![1, 1]), Some(vec![1, 1])],
        )
        .relation(
            Relation::ActionMustWrite,
            vec![Some(vec![1, 1]), None],
        )
        .relation(Relation::GuardTest, vec![Some(vec![1, 0]), Some(vec![0, 1])])
}
