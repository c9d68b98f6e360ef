use crate::app::showcases::{
    engine_from_config, CalendarShowcase, ConcatShowcase, ProductShowcase, RatingShowcase,
    SquareShowcase, TextShowcase, ValueShowcase, VehicleShowcase,
};
use crate::config::cli::Command;
use crate::config::toml_config::SampleConfig;
use crate::core::engine::ShowcaseEngine;
use crate::core::{Car, Day, Product, RatedItem, Value, Vehicle};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::Validate;
use std::time::Duration;

/// Turns a parsed command into the engine that runs it.
pub fn build_engine(command: &Command) -> Result<ShowcaseEngine> {
    let engine = ShowcaseEngine::new();
    let engine = match command {
        Command::Format { text, .. } => engine.with_showcase(TextShowcase {
            inputs: vec![text.clone()],
            to_upper: command.to_upper(),
        }),
        Command::Filter { items, min_rating } => {
            let items: Vec<RatedItem> = serde_json::from_str(items)?;
            engine.with_showcase(RatingShowcase {
                items,
                threshold: *min_rating,
            })
        }
        Command::Concat { arrays } => {
            let arrays = arrays
                .iter()
                .map(|raw| serde_json::from_str::<Vec<serde_json::Value>>(raw))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            engine.with_showcase(ConcatShowcase { arrays })
        }
        Command::Process { value, text } => engine.with_showcase(ValueShowcase {
            inputs: vec![parse_value(value, *text)],
        }),
        Command::MaxPrice { products } => {
            let products: Vec<Product> = serde_json::from_str(products)?;
            engine.with_showcase(ProductShowcase { products })
        }
        Command::Day { day } => engine.with_showcase(CalendarShowcase {
            days: vec![parse_day(day)?],
        }),
        Command::Vehicle { make, year, model } => {
            let vehicle = match model {
                Some(model) => Car::new(make.clone(), *year, model.clone()).into(),
                None => Vehicle::new(make.clone(), *year).into(),
            };
            engine.with_showcase(VehicleShowcase {
                vehicles: vec![vehicle],
            })
        }
        Command::Square { n, delay_ms } => engine.with_showcase(SquareShowcase {
            inputs: vec![*n],
            delay: Duration::from_millis(*delay_ms),
        }),
        Command::Demo { config } => {
            let samples = match config {
                Some(path) => {
                    tracing::info!("📁 Loading samples from: {}", path);
                    SampleConfig::from_file(path)?
                }
                None => SampleConfig::default(),
            };
            samples.validate()?;
            return Ok(engine_from_config(&samples));
        }
    };
    Ok(engine)
}

fn parse_value(raw: &str, force_text: bool) -> Value {
    if force_text {
        return Value::from(raw);
    }
    match raw.trim().parse::<f64>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::from(raw),
    }
}

fn parse_day(raw: &str) -> Result<Day> {
    if let Ok(index) = raw.trim().parse::<u8>() {
        return Day::from_index(index).ok_or_else(|| KitError::ParseError {
            kind: "day index (0-6)".to_string(),
            input: raw.to_string(),
        });
    }
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("10", false), Value::Number(10.0));
        assert_eq!(parse_value("10", true), Value::from("10"));
        assert_eq!(parse_value("hello", false), Value::from("hello"));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("6").unwrap(), Day::Sunday);
        assert_eq!(parse_day("monday").unwrap(), Day::Monday);
        assert!(parse_day("7").is_err());
        assert!(parse_day("someday").is_err());
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let command = Command::Filter {
            items: "not json".to_string(),
            min_rating: 4.0,
        };
        assert!(matches!(
            build_engine(&command),
            Err(KitError::SerializationError(_))
        ));
    }

    #[test]
    fn test_demo_uses_builtin_samples() {
        let engine = build_engine(&Command::Demo { config: None }).unwrap();
        assert_eq!(engine.len(), 8);
    }
}
