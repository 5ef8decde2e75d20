//! Student reference entity with an append-only grade history.
//!
//! # Invariants
//! - `grades` only grows, through `record_grade`.
//! - `calculate_gpa` is NaN when total credits are zero (no grades recorded,
//!   or only zero-credit grades). This is reported, not corrected.

use crate::model::error::{require_text, ModelResult};
use crate::model::grade::Grade;
use crate::model::shared::Shared;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentState {
    first_name: String,
    last_name: String,
    grades: Vec<Grade>,
}

/// Shared handle to a student.
#[derive(Debug, Clone)]
pub struct Student(Rc<RefCell<StudentState>>);

impl Student {
    /// Creates a student with an empty grade history.
    pub fn new(first_name: &str, last_name: &str) -> ModelResult<Self> {
        let state = StudentState {
            first_name: require_text(first_name, "first_name")?,
            last_name: require_text(last_name, "last_name")?,
            grades: Vec::new(),
        };
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

    /// Appends a copy of `grade`; visible through every handle.
    pub fn record_grade(&self, grade: Grade) {
        let mut state = self.0.borrow_mut();
        state.grades.push(grade);
        log::debug!(
            "event=grade_recorded module=student status=ok grade_count={}",
            state.grades.len()
        );
    }

    /// Copies of the recorded grades, in recording order.
    pub fn grades(&self) -> Vec<Grade> {
        self.0.borrow().grades.clone()
    }

    pub fn grade_count(&self) -> usize {
        self.0.borrow().grades.len()
    }

    /// Total points divided by total credits.
    ///
    /// Returns `NaN` when total credits are zero; callers check
    /// `f64::is_nan` rather than expecting an error.
    pub fn calculate_gpa(&self) -> f64 {
        let state = self.0.borrow();
        let (points, credits) = state
            .grades
            .iter()
            .fold((0.0_f64, 0.0_f64), |(points, credits), grade| {
                (points + grade.points(), credits + grade.credits())
            });
        if credits == 0.0 {
            log::warn!(
                "event=gpa_undefined module=student status=nan grade_count={}",
                state.grades.len()
            );
            return f64::NAN;
        }
        points / credits
    }

    pub fn snapshot(&self) -> StudentSnapshot {
        let state = self.0.borrow();
        StudentSnapshot {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
            grades: state.grades.clone(),
        }
    }
}

impl Shared for Student {
    type State = StudentState;

    fn cell(&self) -> &Rc<RefCell<StudentState>> {
        &self.0
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

/// Serializable value copy of a `Student`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub grades: Vec<Grade>,
}

#[cfg(test)]
mod tests {
    use super::Student;
    use crate::model::grade::Grade;

    #[test]
    fn zero_credit_grades_yield_nan() {
        let student = Student::new("Jane", "Appleseed").unwrap();
        student.record_grade(Grade::new("F", 0.0, 0.0).unwrap());
        assert!(student.calculate_gpa().is_nan());
    }

    #[test]
    fn grades_are_kept_in_recording_order() {
        let student = Student::new("Jane", "Appleseed").unwrap();
        student.record_grade(Grade::new("B", 9.0, 3.0).unwrap());
        student.record_grade(Grade::new("A", 16.0, 4.0).unwrap());

        let letters: Vec<String> = student
            .grades()
            .iter()
            .map(|grade| grade.letter().to_string())
            .collect();
        assert_eq!(letters, vec!["B", "A"]);
    }
}
