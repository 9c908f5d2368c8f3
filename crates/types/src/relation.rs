//! Named dependency and reduction relations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index space a relation ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexSpace {
    /// Transition groups.
    Actions,
    /// State labels (guards).
    Labels,
    /// State vector slots.
    Slots,
}

/// A boolean relation between two index spaces, as sent in `setMatrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    /// Transitions that cannot be safely commuted (actions x actions).
    #[serde(rename = "noAccord")]
    NoAccord,
    /// Actions that may newly enable a guard label (labels x actions).
    #[serde(rename = "guardNES")]
    GuardNes,
    /// Actions that may newly disable a guard label (labels x actions).
    #[serde(rename = "guardNDS")]
    GuardNds,
    /// Transitions whose application order is irrelevant (actions x actions).
    #[serde(rename = "commute")]
    Commute,
    /// Guard labels that may hold simultaneously (labels x labels).
    #[serde(rename = "coenable")]
    CoEnabled,
    /// Slots a transition group may read (actions x slots).
    #[serde(rename = "actionRead")]
    ActionRead,
    /// Slots a transition group may write (actions x slots).
    #[serde(rename = "actionMayWrite")]
    ActionMayWrite,
    /// Slots a transition group always writes (actions x slots).
    #[serde(rename = "actionMustWrite")]
    ActionMustWrite,
    /// Slots a state label reads (labels x slots).
    #[serde(rename = "guardTest")]
    GuardTest,
}

impl Relation {
    /// All relations, in registration order.
    pub const ALL: [Relation; 9] = [
        Relation::NoAccord,
        Relation::GuardNes,
        Relation::GuardNds,
        Relation::Commute,
        Relation::CoEnabled,
        Relation::ActionRead,
        Relation::ActionMayWrite,
        Relation::ActionMustWrite,
        Relation::GuardTest,
    ];

    /// Name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Relation::NoAccord => "noAccord",
            Relation::GuardNes => "guardNES",
            Relation::GuardNds => "guardNDS",
            Relation::Commute => "commute",
            Relation::CoEnabled => "coenable",
            Relation::ActionRead => "actionRead",
            Relation::ActionMayWrite => "actionMayWrite",
            Relation::ActionMustWrite => "actionMustWrite",
            Relation::GuardTest => "guardTest",
        }
    }

    /// Row and column index spaces.
    pub fn shape(self) -> (IndexSpace, IndexSpace) {
        use IndexSpace::*;
        match self {
            Relation::NoAccord | Relation::Commute => (Actions, Actions),
            Relation::GuardNes | Relation::GuardNds => (Labels, Actions),
            Relation::CoEnabled => (Labels, Labels),
            Relation::ActionRead | Relation::ActionMayWrite | Relation::ActionMustWrite => {
                (Actions, Slots)
            }
            Relation::GuardTest => (Labels, Slots),
        }
    }

    /// Whether the row count of this relation tells the number of actions.
    pub fn sizes_actions(self) -> bool {
        matches!(self, Relation::NoAccord | Relation::ActionRead)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| format!("unknown relation: {s}"))
    }
}
