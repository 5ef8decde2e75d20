//! Value records and shared reference objects, side by side.
//! Value records are copied on assignment; reference objects hand out
//! another handle to the same state.

pub mod logging;
pub mod model;
pub mod scenario;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::error::{ModelResult, ModelValidationError};
pub use model::grade::{Grade, GradeBuilder};
pub use model::location::{ClimateControl, DeliveryRange, Location, PizzaOrder};
pub use model::movie_list::{MovieList, MovieListSnapshot, User};
pub use model::person::{Person, PersonSnapshot, PrivatePerson, BLANK_NAME};
pub use model::shared::{identity, member_of, Shared};
pub use model::student::{Student, StudentSnapshot};
pub use scenario::{find_scenario, scenarios, Scenario, ScenarioError, ScenarioResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
