pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::showcases::engine_from_config;
pub use config::toml_config::SampleConfig;
pub use crate::core::{
    calendar::get_day_type,
    collections::{
        concatenate_arrays, filter_by_min_rating, filter_by_rating, most_expensive_product,
    },
    dispatch::process_value,
    engine::ShowcaseEngine,
    square::{square_async, square_async_with_delay, SQUARE_DELAY},
    text::format_string,
    vehicle::{car_info, car_model, describe, vehicle_info},
};
pub use domain::model::{
    AnyVehicle, Car, Day, DayType, Product, RatedItem, ShowcaseOutput, Value, Vehicle,
};
pub use utils::error::{KitError, Result};
