use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::KitError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Base vehicle record. Fields are private so a value cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

/// A [`Vehicle`] extended with a model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    base: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            base: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn base(&self) -> &Vehicle {
        &self.base
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyVehicle {
    Plain(Vehicle),
    Car(Car),
}

impl From<Vehicle> for AnyVehicle {
    fn from(vehicle: Vehicle) -> Self {
        AnyVehicle::Plain(vehicle)
    }
}

impl From<Car> for AnyVehicle {
    fn from(car: Car) -> Self {
        AnyVehicle::Car(car)
    }
}

/// Input accepted by the length-or-double dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{:?}", text),
            Value::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Day {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn from_index(index: u8) -> Option<Day> {
        Day::ALL.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KitError::ParseError {
                kind: "day of the week".to_string(),
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for Day {
    type Error = KitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered result of one showcase run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseOutput {
    pub name: String,
    pub lines: Vec<String>,
}

impl ShowcaseOutput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_indices_follow_declaration_order() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.index()), i);
            assert_eq!(Day::from_index(i as u8), Some(*day));
        }
        assert_eq!(Day::from_index(7), None);
    }

    #[test]
    fn test_day_from_str() {
        assert_eq!("sunday".parse::<Day>().unwrap(), Day::Sunday);
        assert_eq!(" Friday ".parse::<Day>().unwrap(), Day::Friday);
        assert!("Funday".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_deserializes_like_from_str() {
        let days: Vec<Day> = serde_json::from_str(r#"["saturday", "SUNDAY", "Monday"]"#).unwrap();
        assert_eq!(days, vec![Day::Saturday, Day::Sunday, Day::Monday]);
        assert!(serde_json::from_str::<Day>("\"Funday\"").is_err());
        assert_eq!(serde_json::to_string(&Day::Friday).unwrap(), "\"Friday\"");
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let text: Value = serde_json::from_str("\"hello\"").unwrap();
        let number: Value = serde_json::from_str("10").unwrap();
        assert_eq!(text, Value::Text("hello".to_string()));
        assert_eq!(number, Value::Number(10.0));
    }

    #[test]
    fn test_car_keeps_base_record() {
        let car = Car::new("Toyota", 2020, "Corolla");
        assert_eq!(car.base().make(), "Toyota");
        assert_eq!(car.base().year(), 2020);
        assert_eq!(car.model(), "Corolla");
    }
}
