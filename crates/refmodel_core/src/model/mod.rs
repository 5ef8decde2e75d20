//! Entity model: value records and reference objects.
//!
//! # Responsibility
//! - Define value-semantic records that are copied on assignment.
//! - Define reference-semantic objects shared through `Rc<RefCell<_>>` handles.
//!
//! # Invariants
//! - Constructors validate every required field; no partial entities exist.
//! - Identity (`Shared::ptr_eq`) and field equality (`PartialEq`) stay distinct.

pub mod error;
pub mod grade;
pub mod location;
pub mod movie_list;
pub mod person;
pub mod shared;
pub mod student;
