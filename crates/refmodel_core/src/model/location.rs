//! Value records for pizza delivery: coordinates, ranges, orders, climate.
//!
//! # Invariants
//! - Every record is fully initialized by its constructor or not at all.
//! - Assignment copies; no record shares state with another.
//! - `Location` coordinates are finite and within geographic bounds.

use crate::model::error::{require_non_negative, require_text, ModelResult, ModelValidationError};
use serde::{Deserialize, Serialize};

/// Range used by `DeliveryRange::from_location`.
pub const DEFAULT_DELIVERY_RANGE: f64 = 150.0;
/// Range used by `DeliveryRange::for_city`.
pub const CITY_DELIVERY_RANGE: f64 = 100.0;
/// Range used by `DeliveryRange::for_suburb`.
pub const SUBURB_DELIVERY_RANGE: f64 = 150.0;
/// Crust used by `PizzaOrder::with_default_crust`.
pub const DEFAULT_CRUST: &str = "Extra Crust";
/// Humidity used by `ClimateControl::new`.
pub const DEFAULT_HUMIDITY: f64 = 5.0;

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawLocation> for Location {
    type Error = ModelValidationError;

    fn try_from(value: RawLocation) -> Result<Self, Self::Error> {
        Location::new(value.latitude, value.longitude)
    }
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> ModelResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ModelValidationError::InvalidCoordinate(format!(
                "latitude {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ModelValidationError::InvalidCoordinate(format!(
                "longitude {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses `"latitude,longitude"`, e.g. `"42.222,12.3453"`.
    pub fn from_coordinate_string(value: &str) -> ModelResult<Self> {
        let invalid = || ModelValidationError::InvalidCoordinate(value.to_string());
        let (latitude, longitude) = value.split_once(',').ok_or_else(invalid)?;
        let latitude = latitude.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = longitude.trim().parse::<f64>().map_err(|_| invalid())?;
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Straight-line distance in coordinate units (not meters).
    pub fn planar_distance(&self, other: &Location) -> f64 {
        (self.latitude - other.latitude).hypot(self.longitude - other.longitude)
    }
}

/// Delivery area: a center point and a radius in coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeliveryRange")]
pub struct DeliveryRange {
    range: f64,
    center: Location,
}

#[derive(Deserialize)]
struct RawDeliveryRange {
    range: f64,
    center: Location,
}

impl TryFrom<RawDeliveryRange> for DeliveryRange {
    type Error = ModelValidationError;

    fn try_from(value: RawDeliveryRange) -> Result<Self, Self::Error> {
        DeliveryRange::new(value.range, value.center)
    }
}

impl DeliveryRange {
    pub fn new(range: f64, center: Location) -> ModelResult<Self> {
        Ok(Self {
            range: require_non_negative(range, "range")?,
            center,
        })
    }

    pub fn from_location(center: Location) -> Self {
        Self {
            range: DEFAULT_DELIVERY_RANGE,
            center,
        }
    }

    pub fn for_city(center: Location) -> Self {
        Self {
            range: CITY_DELIVERY_RANGE,
            center,
        }
    }

    pub fn for_suburb(center: Location) -> Self {
        Self {
            range: SUBURB_DELIVERY_RANGE,
            center,
        }
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// The center is fixed for the lifetime of the value.
    pub fn center(&self) -> Location {
        self.center
    }

    pub fn set_range(&mut self, range: f64) -> ModelResult<()> {
        self.range = require_non_negative(range, "range")?;
        Ok(())
    }

    /// True when `customer` is strictly closer to the center than `range`.
    pub fn is_in_range(&self, customer: &Location) -> bool {
        self.center.planar_distance(customer) < self.range
    }
}

/// Pizza order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPizzaOrder")]
pub struct PizzaOrder {
    toppings: Vec<String>,
    size: u32,
    crust: String,
}

#[derive(Deserialize)]
struct RawPizzaOrder {
    toppings: Vec<String>,
    size: u32,
    crust: String,
}

impl TryFrom<RawPizzaOrder> for PizzaOrder {
    type Error = ModelValidationError;

    fn try_from(value: RawPizzaOrder) -> Result<Self, Self::Error> {
        PizzaOrder::new(value.toppings, value.size, &value.crust)
    }
}

impl PizzaOrder {
    /// # Errors
    /// - `InvalidNumber` when `size` is zero.
    /// - `EmptyField` when `crust` or any topping is blank.
    pub fn new(toppings: Vec<String>, size: u32, crust: &str) -> ModelResult<Self> {
        if size == 0 {
            return Err(ModelValidationError::InvalidNumber {
                field: "size",
                value: 0.0,
            });
        }
        let toppings = toppings
            .iter()
            .map(|topping| require_text(topping, "toppings"))
            .collect::<ModelResult<Vec<_>>>()?;
        Ok(Self {
            toppings,
            size,
            crust: require_text(crust, "crust")?,
        })
    }

    pub fn with_default_crust(toppings: Vec<String>, size: u32) -> ModelResult<Self> {
        Self::new(toppings, size, DEFAULT_CRUST)
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn crust(&self) -> &str {
        &self.crust
    }

    pub fn add_topping(&mut self, topping: &str) -> ModelResult<()> {
        self.toppings.push(require_text(topping, "toppings")?);
        Ok(())
    }
}

/// Climate setting where humidity is optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateControl {
    pub temperature: f64,
    pub humidity: Option<f64>,
}

impl ClimateControl {
    /// Sets `temperature` and defaults humidity to [`DEFAULT_HUMIDITY`].
    pub fn new(temperature: f64) -> ModelResult<Self> {
        if !temperature.is_finite() {
            return Err(ModelValidationError::InvalidNumber {
                field: "temperature",
                value: temperature,
            });
        }
        Ok(Self {
            temperature,
            humidity: Some(DEFAULT_HUMIDITY),
        })
    }
}
