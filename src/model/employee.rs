//! Employees of the payroll.
//!
//! Employees carry a single status, `ACTIVE`, and no actions: their links are
//! only `self` and `employees`.

use resource_framework::{require_text, Lifecycle, ResourceKind, UnknownVariant, ValidationError};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }

    /// Builds an employee from a full name, split at the first space.
    ///
    /// `"Bilbo Baggins"` gives first name `Bilbo` and last name `Baggins`. A name
    /// without a space leaves the last name empty, which fails validation.
    pub fn from_full_name(name: &str, role: impl Into<String>) -> Self {
        let (first, last) = name.trim().split_once(' ').unwrap_or((name.trim(), ""));
        Self::new(first, last.trim(), role)
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ResourceKind for Employee {
    type Status = EmployeeStatus;

    const NAME: &'static str = "employee";
    const COLLECTION: &'static str = "employees";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("role", &self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeStatus {
    Active,
}

impl Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeStatus::Active => f.write_str("ACTIVE"),
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(EmployeeStatus::Active),
            other => Err(UnknownVariant::new("employee status", other)),
        }
    }
}

/// Employees have no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeAction {}

impl Display for EmployeeAction {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl FromStr for EmployeeAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Err(UnknownVariant::new("employee action", s))
    }
}

impl Lifecycle for EmployeeStatus {
    type Action = EmployeeAction;

    const INITIAL: Self = EmployeeStatus::Active;
    const ALL: &'static [Self] = &[EmployeeStatus::Active];
    const TRANSITIONS: &'static [(Self, EmployeeAction, Self)] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::StateMachine;

    #[test]
    fn full_name_splits_at_first_space() {
        let employee = Employee::from_full_name("Samwise Gamgee Jr", "gardener");
        assert_eq!(employee.first_name, "Samwise");
        assert_eq!(employee.last_name, "Gamgee Jr");
        assert_eq!(employee.name(), "Samwise Gamgee Jr");
    }

    #[test]
    fn single_word_name_is_invalid() {
        let employee = Employee::from_full_name("Gandalf", "wizard");
        assert_eq!(employee.last_name, "");
        assert_eq!(
            employee.validate(),
            Err(ValidationError::blank("lastName"))
        );
    }

    #[test]
    fn active_is_terminal() {
        let machine = StateMachine::<EmployeeStatus>::new();
        assert!(machine.is_terminal(EmployeeStatus::Active));
        assert_eq!(machine.parse_action("promote"), None);
    }
}
