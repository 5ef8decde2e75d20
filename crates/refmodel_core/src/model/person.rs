//! Person reference entities.
//!
//! # Responsibility
//! - Model a named person whose handles all observe the same state.
//! - Provide a variant with optional, private name parts.
//!
//! # Invariants
//! - `Person` names are never blank, including after mutation.
//! - Cloning a `Person` shares storage; use `snapshot()` for a detached copy.

use crate::model::error::{require_text, ModelResult};
use crate::model::shared::Shared;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Placeholder returned by `PrivatePerson::full_name` when a part is absent.
pub const BLANK_NAME: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonState {
    first_name: String,
    last_name: String,
}

/// Shared handle to a person.
///
/// `==` compares names; use [`crate::identity`] to ask whether two handles
/// are the same person.
#[derive(Debug, Clone)]
pub struct Person(Rc<RefCell<PersonState>>);

impl Person {
    /// Creates a new person on its own storage.
    ///
    /// # Errors
    /// - `EmptyField` when either name is blank.
    pub fn new(first_name: &str, last_name: &str) -> ModelResult<Self> {
        let state = PersonState {
            first_name: require_text(first_name, "first_name")?,
            last_name: require_text(last_name, "last_name")?,
        };
        log::debug!("event=person_created module=person status=ok");
        Ok(Self(Rc::new(RefCell::new(state))))
    }

    pub fn first_name(&self) -> String {
        self.0.borrow().first_name.clone()
    }

    pub fn last_name(&self) -> String {
        self.0.borrow().last_name.clone()
    }

    pub fn full_name(&self) -> String {
        let state = self.0.borrow();
        format!("{} {}", state.first_name, state.last_name)
    }

    /// Renames in place; every handle observes the change.
    pub fn set_first_name(&self, first_name: &str) -> ModelResult<()> {
        let first_name = require_text(first_name, "first_name")?;
        self.0.borrow_mut().first_name = first_name;
        Ok(())
    }

    /// Renames in place; every handle observes the change.
    pub fn set_last_name(&self, last_name: &str) -> ModelResult<()> {
        let last_name = require_text(last_name, "last_name")?;
        self.0.borrow_mut().last_name = last_name;
        Ok(())
    }

    /// Detached value copy of the current state.
    pub fn snapshot(&self) -> PersonSnapshot {
        let state = self.0.borrow();
        PersonSnapshot {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
        }
    }
}

impl Shared for Person {
    type State = PersonState;

    fn cell(&self) -> &Rc<RefCell<PersonState>> {
        &self.0
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        // Same storage short-circuits so a self-comparison never double-borrows.
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for Person {}

/// Serializable value copy of a `Person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSnapshot {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivatePersonState {
    first_name: Option<String>,
    last_name: Option<String>,
}

/// Shared handle to a person whose name parts may be unknown.
///
/// Name parts are only reachable through `full_name` and `change_first_name`.
#[derive(Debug, Clone, Default)]
pub struct PrivatePerson(Rc<RefCell<PrivatePersonState>>);

impl PrivatePerson {
    /// Person with no known name parts.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(first_name: &str, last_name: &str) -> ModelResult<Self> {
        let state = PrivatePersonState {
            first_name: Some(require_text(first_name, "first_name")?),
            last_name: Some(require_text(last_name, "last_name")?),
        };
        Ok(Self(Rc::new(RefCell::new(state))))
    }

    /// Returns `"first last"`, or [`BLANK_NAME`] when either part is absent.
    pub fn full_name(&self) -> String {
        let state = self.0.borrow();
        match (&state.first_name, &state.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => BLANK_NAME.to_string(),
        }
    }

    pub fn change_first_name(&self, first_name: &str) -> ModelResult<()> {
        let first_name = require_text(first_name, "first_name")?;
        self.0.borrow_mut().first_name = Some(first_name);
        Ok(())
    }
}

impl Shared for PrivatePerson {
    type State = PrivatePersonState;

    fn cell(&self) -> &Rc<RefCell<PrivatePersonState>> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Person, PrivatePerson, BLANK_NAME};
    use crate::model::error::ModelValidationError;

    #[test]
    fn new_rejects_blank_last_name() {
        let err = Person::new("Alper", "  ").unwrap_err();
        assert_eq!(err, ModelValidationError::EmptyField("last_name"));
    }

    #[test]
    fn failed_rename_keeps_previous_value() {
        let person = Person::new("Alper", "Akinci").unwrap();
        assert!(person.set_last_name("").is_err());
        assert_eq!(person.last_name(), "Akinci");
    }

    #[test]
    fn self_comparison_is_equal() {
        let person = Person::new("Alper", "Akinci").unwrap();
        assert_eq!(person, person.clone());
    }

    #[test]
    fn anonymous_private_person_renders_blank() {
        let person = PrivatePerson::anonymous();
        assert_eq!(person.full_name(), BLANK_NAME);

        person.change_first_name("Michael").unwrap();
        assert_eq!(person.full_name(), BLANK_NAME);
    }
}
