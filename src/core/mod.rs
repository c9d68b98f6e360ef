pub mod calendar;
pub mod collections;
pub mod dispatch;
pub mod engine;
pub mod square;
pub mod text;
pub mod vehicle;

pub use crate::domain::model::{
    AnyVehicle, Car, Day, DayType, Product, RatedItem, ShowcaseOutput, Value, Vehicle,
};
pub use crate::domain::ports::Showcase;
pub use crate::utils::error::Result;
