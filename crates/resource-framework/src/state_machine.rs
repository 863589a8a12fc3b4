//! # Status Lifecycles
//!
//! A [`Lifecycle`] is a closed set of statuses plus a static transition table
//! `(from, action, to)`. [`StateMachine`] is the pure evaluator over that table.
//!
//! The same table answers two questions:
//! - *May this action run now?* ([`StateMachine::attempt_transition`]), asked by the service.
//! - *Which actions should be advertised?* ([`StateMachine::legal_actions`]), asked by the link builder.
//!
//! Because both read one table, the links a resource advertises are always
//! exactly the transitions it will accept.
//!
//! ```rust,ignore
//! impl Lifecycle for OrderStatus {
//!     type Action = OrderAction;
//!     const INITIAL: Self = OrderStatus::InProgress;
//!     const ALL: &'static [Self] = &[InProgress, Completed, Cancelled];
//!     const TRANSITIONS: &'static [(Self, OrderAction, Self)] = &[
//!         (InProgress, OrderAction::Cancel, Cancelled),
//!         (InProgress, OrderAction::Complete, Completed),
//!     ];
//! }
//! ```

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

/// A closed status set with its transition table.
///
/// Statuses and actions render with `Display` (wire names such as `IN_PROGRESS`
/// and `cancel`) and parse back with `FromStr`; parsing only succeeds for
/// declared values.
pub trait Lifecycle: Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static {
    /// Named triggers of transitions. Their `Display` form is the link relation.
    type Action: Copy + Eq + Debug + Display + FromStr + Send + Sync + 'static;

    /// Status assigned on create.
    const INITIAL: Self;

    /// Every declared status.
    const ALL: &'static [Self];

    /// Legal moves. Pairs absent from the table are rejected.
    const TRANSITIONS: &'static [(Self, Self::Action, Self)];
}

/// Text that does not name a declared status or action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A `(status, action)` pair with no entry in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected<S: Lifecycle> {
    pub status: S,
    pub action: S::Action,
}

impl<S: Lifecycle> Display for Rejected<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} from {}", self.action, self.status)
    }
}

impl<S: Lifecycle> std::error::Error for Rejected<S> {}

/// Pure evaluator over a [`Lifecycle`] table.
///
/// Zero-sized and `Copy`: it carries no state, so identical inputs always
/// produce identical outputs.
#[derive(Debug, Clone, Copy)]
pub struct StateMachine<S: Lifecycle> {
    _status: PhantomData<fn() -> S>,
}

impl<S: Lifecycle> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Lifecycle> StateMachine<S> {
    pub const fn new() -> Self {
        Self {
            _status: PhantomData,
        }
    }

    pub fn initial(&self) -> S {
        S::INITIAL
    }

    pub fn attempt_transition(&self, current: S, action: S::Action) -> Result<S, Rejected<S>> {
        S::TRANSITIONS
            .iter()
            .find(|(from, candidate, _)| *from == current && *candidate == action)
            .map(|(_, _, to)| *to)
            .ok_or(Rejected {
                status: current,
                action,
            })
    }

    /// Actions accepted from `current`, in table order.
    pub fn legal_actions(&self, current: S) -> impl Iterator<Item = S::Action> {
        S::TRANSITIONS
            .iter()
            .filter(move |(from, _, _)| *from == current)
            .map(|(_, action, _)| *action)
    }

    pub fn is_terminal(&self, status: S) -> bool {
        self.legal_actions(status).next().is_none()
    }

    pub fn parse_action(&self, name: &str) -> Option<S::Action> {
        name.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Door {
        Open,
        Closed,
        Locked,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum DoorAction {
        Close,
        Open,
        Lock,
        Unlock,
    }

    impl Display for Door {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Door::Open => "OPEN",
                Door::Closed => "CLOSED",
                Door::Locked => "LOCKED",
            })
        }
    }

    impl FromStr for Door {
        type Err = UnknownVariant;
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Door::ALL
                .iter()
                .copied()
                .find(|door| door.to_string() == s)
                .ok_or_else(|| UnknownVariant::new("door status", s))
        }
    }

    impl Display for DoorAction {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                DoorAction::Close => "close",
                DoorAction::Open => "open",
                DoorAction::Lock => "lock",
                DoorAction::Unlock => "unlock",
            })
        }
    }

    impl FromStr for DoorAction {
        type Err = UnknownVariant;
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "close" => Ok(DoorAction::Close),
                "open" => Ok(DoorAction::Open),
                "lock" => Ok(DoorAction::Lock),
                "unlock" => Ok(DoorAction::Unlock),
                other => Err(UnknownVariant::new("door action", other)),
            }
        }
    }

    impl Lifecycle for Door {
        type Action = DoorAction;
        const INITIAL: Self = Door::Open;
        const ALL: &'static [Self] = &[Door::Open, Door::Closed, Door::Locked];
        const TRANSITIONS: &'static [(Self, DoorAction, Self)] = &[
            (Door::Open, DoorAction::Close, Door::Closed),
            (Door::Closed, DoorAction::Open, Door::Open),
            (Door::Closed, DoorAction::Lock, Door::Locked),
            (Door::Locked, DoorAction::Unlock, Door::Closed),
        ];
    }

    #[test]
    fn follows_the_table() {
        let machine = StateMachine::<Door>::new();
        assert_eq!(machine.initial(), Door::Open);
        assert_eq!(
            machine.attempt_transition(Door::Open, DoorAction::Close),
            Ok(Door::Closed)
        );
        assert_eq!(
            machine.attempt_transition(Door::Closed, DoorAction::Lock),
            Ok(Door::Locked)
        );
    }

    #[test]
    fn rejects_pairs_missing_from_the_table() {
        let machine = StateMachine::<Door>::new();
        let rejected = machine
            .attempt_transition(Door::Open, DoorAction::Lock)
            .unwrap_err();
        assert_eq!(rejected.status, Door::Open);
        assert_eq!(rejected.action, DoorAction::Lock);
        assert_eq!(rejected.to_string(), "cannot lock from OPEN");
    }

    #[test]
    fn legal_actions_keep_table_order() {
        let machine = StateMachine::<Door>::new();
        let actions: Vec<_> = machine.legal_actions(Door::Closed).collect();
        assert_eq!(actions, vec![DoorAction::Open, DoorAction::Lock]);
        assert!(!machine.is_terminal(Door::Locked));
    }

    #[test]
    fn parse_action_only_accepts_declared_names() {
        let machine = StateMachine::<Door>::new();
        assert_eq!(machine.parse_action("unlock"), Some(DoorAction::Unlock));
        assert_eq!(machine.parse_action("kick"), None);
        assert_eq!("LOCKED".parse::<Door>(), Ok(Door::Locked));
        assert!("AJAR".parse::<Door>().is_err());
    }
}
