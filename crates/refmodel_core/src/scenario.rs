//! Example drivers that build entities and report what they print.
//!
//! # Responsibility
//! - Give each demonstration its own setup; nothing is shared across runs.
//! - Return output lines so callers decide where to print them.

use crate::model::error::ModelValidationError;
use crate::model::grade::Grade;
use crate::model::location::{ClimateControl, DeliveryRange, Location, PizzaOrder};
use crate::model::movie_list::{MovieList, User};
use crate::model::person::{Person, PrivatePerson};
use crate::model::shared::{identity, member_of};
use crate::model::student::Student;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ScenarioResult = Result<Vec<String>, ScenarioError>;

/// Failure while running a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    Validation {
        scenario: &'static str,
        source: ModelValidationError,
    },
    UnknownScenario(String),
}

impl Display for ScenarioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { scenario, source } => {
                write!(f, "scenario `{scenario}` failed validation: {source}")
            }
            Self::UnknownScenario(name) => write!(f, "unknown scenario `{name}`"),
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::UnknownScenario(_) => None,
        }
    }
}

/// One named demonstration.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    run: fn() -> Result<Vec<String>, ModelValidationError>,
}

impl Scenario {
    pub fn run(&self) -> ScenarioResult {
        let result = (self.run)().map_err(|source| ScenarioError::Validation {
            scenario: self.name,
            source,
        });
        match &result {
            Ok(lines) => log::info!(
                "event=scenario_run module=scenario status=ok name={} lines={}",
                self.name,
                lines.len()
            ),
            Err(err) => log::error!(
                "event=scenario_run module=scenario status=error name={} error={}",
                self.name,
                err
            ),
        }
        result
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "shared_person",
        run: shared_person,
    },
    Scenario {
        name: "group_membership",
        run: group_membership,
    },
    Scenario {
        name: "student_gpa",
        run: student_gpa,
    },
    Scenario {
        name: "private_person",
        run: private_person,
    },
    Scenario {
        name: "movie_lists",
        run: movie_lists,
    },
    Scenario {
        name: "pizza_delivery",
        run: pizza_delivery,
    },
];

/// All scenarios in display order.
pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

/// Looks a scenario up by name.
pub fn find_scenario(name: &str) -> Result<Scenario, ScenarioError> {
    SCENARIOS
        .iter()
        .copied()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| ScenarioError::UnknownScenario(name.to_string()))
}

fn shared_person() -> Result<Vec<String>, ModelValidationError> {
    let alper = Person::new("Alper", "Akinci")?;
    let friend = alper.clone();
    friend.set_last_name("Walker")?;

    let enemy = Person::new("Johny", "Stalk")?;
    let fake_alper = Person::new("Alper", "Walker")?;

    Ok(vec![
        alper.full_name(),
        friend.full_name(),
        format!("alper === friend: {}", identity(&alper, &friend)),
        format!("alper === enemy: {}", identity(&alper, &enemy)),
        format!("alper === fakeAlper: {}", identity(&alper, &fake_alper)),
        format!("alper == fakeAlper: {}", alper == fake_alper),
    ])
}

fn group_membership() -> Result<Vec<String>, ModelValidationError> {
    let alper = Person::new("Alper", "Walker")?;
    let enemy = Person::new("Johny", "Stalk")?;
    let fake_alper = Person::new("Alper", "Walker")?;
    let bystander = Person::new("Jane", "Doe")?;

    let leading = [alper.clone(), enemy.clone(), bystander.clone()];
    let trailing = [enemy.clone(), bystander.clone(), alper.clone()];
    let absent = [fake_alper, enemy, bystander];

    Ok(vec![
        format!("memberOf(alper, leading): {}", member_of(&alper, &leading)),
        format!("memberOf(alper, trailing): {}", member_of(&alper, &trailing)),
        format!("memberOf(alper, absent): {}", member_of(&alper, &absent)),
    ])
}

fn student_gpa() -> Result<Vec<String>, ModelValidationError> {
    let jane = Student::new("Jane", "Appleseed")?;
    let mut lines = vec![format!(
        "{} gpa (no grades): {}",
        jane.full_name(),
        jane.calculate_gpa()
    )];

    let history = Grade::new("B", 9.0, 3.0)?;
    let math = Grade::new("A", 16.0, 4.0)?;
    jane.record_grade(history);
    jane.record_grade(math);

    lines.push(format!(
        "{} gpa: {:.3}",
        jane.full_name(),
        jane.calculate_gpa()
    ));
    Ok(lines)
}

fn private_person() -> Result<Vec<String>, ModelValidationError> {
    let gadget = PrivatePerson::new("Detective", "Gadget")?;
    let before = gadget.full_name();
    gadget.change_first_name("Michael")?;

    Ok(vec![
        before,
        gadget.full_name(),
        format!("anonymous: '{}'", PrivatePerson::anonymous().full_name()),
    ])
}

fn movie_lists() -> Result<Vec<String>, ModelValidationError> {
    let paul = User::new();
    let simon = User::new();
    let surf_movies = MovieList::new("SurfMovies")?;
    paul.add_list(&surf_movies);
    simon.add_list(&surf_movies);

    let mut lines = Vec::new();
    if let Some(list) = simon.list("SurfMovies") {
        lines.push(format!("simon sees: {}", list.list_name()));
    }
    if let Some(list) = paul.list("SurfMovies") {
        list.add_movie_to_list("Point Break")?;
        list.add_movie_to_list("Point Break")?;
    }
    if let Some(list) = simon.list("SurfMovies") {
        lines.extend(list.render());
    }
    Ok(lines)
}

fn pizza_delivery() -> Result<Vec<String>, ModelValidationError> {
    let store = Location::new(45.4232, 56.3212)?;
    let mut pizza_range = DeliveryRange::new(300.0, store)?;
    let const_range = pizza_range;
    pizza_range.set_range(500.0)?;

    let order = PizzaOrder::with_default_crust(vec!["Pepperoni".to_string()], 12)?;
    let cold = ClimateControl::new(6.0)?;

    let downtown_center = Location::from_coordinate_string("44.9871,-93.2758")?;
    let downtown = DeliveryRange::new(150.0, downtown_center)?;
    let customer = Location::from_coordinate_string("44.9850,-93.2750")?;

    Ok(vec![
        format!("center: ({}, {})", store.latitude(), store.longitude()),
        format!(
            "range: {}, copy keeps: {}",
            pizza_range.range(),
            const_range.range()
        ),
        format!("city range: {}", DeliveryRange::for_city(store).range()),
        format!("crust: {}", order.crust()),
        format!("humidity: {:?}", cold.humidity),
        format!("customer in range: {}", downtown.is_in_range(&customer)),
    ])
}

#[cfg(test)]
mod tests {
    use super::{find_scenario, scenarios, ScenarioError};

    #[test]
    fn every_scenario_runs() {
        for scenario in scenarios() {
            let lines = scenario.run().expect("scenario should succeed");
            assert!(!lines.is_empty(), "{} printed nothing", scenario.name);
        }
    }

    #[test]
    fn unknown_scenario_is_reported() {
        let err = find_scenario("tshirt").unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownScenario(_)));
    }
}
