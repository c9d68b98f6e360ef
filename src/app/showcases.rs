use crate::config::toml_config::SampleConfig;
use crate::core::calendar::get_day_type;
use crate::core::collections::{concatenate_arrays, filter_by_min_rating, most_expensive_product};
use crate::core::dispatch::process_value;
use crate::core::engine::ShowcaseEngine;
use crate::core::square::square_async_with_delay;
use crate::core::text::format_string;
use crate::core::vehicle::describe;
use crate::core::{AnyVehicle, Day, Product, RatedItem, Showcase, ShowcaseOutput, Value};
use crate::utils::error::{KitError, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct TextShowcase {
    pub inputs: Vec<String>,
    pub to_upper: Option<bool>,
}

#[async_trait]
impl Showcase for TextShowcase {
    fn name(&self) -> &str {
        "format"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        Ok(self
            .inputs
            .iter()
            .fold(ShowcaseOutput::new(self.name()), |out, input| {
                out.line(format_string(input, self.to_upper))
            }))
    }
}

pub struct RatingShowcase {
    pub items: Vec<RatedItem>,
    pub threshold: f64,
}

#[async_trait]
impl Showcase for RatingShowcase {
    fn name(&self) -> &str {
        "filter"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        let kept = filter_by_min_rating(&self.items, self.threshold);
        Ok(ShowcaseOutput::new(self.name()).line(serde_json::to_string(&kept)?))
    }
}

pub struct ConcatShowcase {
    pub arrays: Vec<Vec<serde_json::Value>>,
}

#[async_trait]
impl Showcase for ConcatShowcase {
    fn name(&self) -> &str {
        "concat"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        let joined = concatenate_arrays(self.arrays.iter().cloned());
        Ok(ShowcaseOutput::new(self.name()).line(serde_json::to_string(&joined)?))
    }
}

pub struct ValueShowcase {
    pub inputs: Vec<Value>,
}

#[async_trait]
impl Showcase for ValueShowcase {
    fn name(&self) -> &str {
        "process"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        Ok(self
            .inputs
            .iter()
            .fold(ShowcaseOutput::new(self.name()), |out, value| {
                out.line(format!("{} -> {}", value, process_value(value)))
            }))
    }
}

pub struct ProductShowcase {
    pub products: Vec<Product>,
}

#[async_trait]
impl Showcase for ProductShowcase {
    fn name(&self) -> &str {
        "max-price"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        let line = match most_expensive_product(&self.products) {
            Some(product) => serde_json::to_string(product)?,
            None => "null".to_string(),
        };
        Ok(ShowcaseOutput::new(self.name()).line(line))
    }
}

pub struct CalendarShowcase {
    pub days: Vec<Day>,
}

#[async_trait]
impl Showcase for CalendarShowcase {
    fn name(&self) -> &str {
        "day"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        Ok(self
            .days
            .iter()
            .fold(ShowcaseOutput::new(self.name()), |out, day| {
                out.line(format!("{}: {}", day, get_day_type(*day)))
            }))
    }
}

pub struct VehicleShowcase {
    pub vehicles: Vec<AnyVehicle>,
}

#[async_trait]
impl Showcase for VehicleShowcase {
    fn name(&self) -> &str {
        "vehicle"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        let mut out = ShowcaseOutput::new(self.name());
        for vehicle in &self.vehicles {
            out.lines.extend(describe(vehicle));
        }
        Ok(out)
    }
}

/// Negative inputs are part of the sample set, so their rejection is rendered instead of returned.
pub struct SquareShowcase {
    pub inputs: Vec<f64>,
    pub delay: Duration,
}

#[async_trait]
impl Showcase for SquareShowcase {
    fn name(&self) -> &str {
        "square"
    }

    async fn run(&self) -> Result<ShowcaseOutput> {
        let mut out = ShowcaseOutput::new(self.name());
        for &n in &self.inputs {
            match square_async_with_delay(n, self.delay).await {
                Ok(squared) => out.lines.push(format!("{} -> {}", n, squared)),
                Err(e @ KitError::NegativeInput { .. }) => {
                    tracing::warn!("square({}) rejected", n);
                    out.lines.push(format!("{} -> rejected: {}", n, e));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }
}

/// Builds an engine with one showcase per utility, fed from `config`.
pub fn engine_from_config(config: &SampleConfig) -> ShowcaseEngine {
    ShowcaseEngine::new()
        .with_showcase(TextShowcase {
            inputs: config.text.inputs.clone(),
            to_upper: config.text.to_upper,
        })
        .with_showcase(RatingShowcase {
            items: config.rating.items.clone(),
            threshold: config.rating.threshold,
        })
        .with_showcase(ConcatShowcase {
            arrays: config.concat.arrays.clone(),
        })
        .with_showcase(ValueShowcase {
            inputs: config.values.inputs.clone(),
        })
        .with_showcase(ProductShowcase {
            products: config.products.items.clone(),
        })
        .with_showcase(CalendarShowcase {
            days: config.calendar.days.clone(),
        })
        .with_showcase(VehicleShowcase {
            vehicles: config.vehicles(),
        })
        .with_showcase(SquareShowcase {
            inputs: config.square.inputs.clone(),
            delay: config.square.delay(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rating_showcase_renders_json() {
        let showcase = RatingShowcase {
            items: vec![RatedItem::new("Book A", 4.5), RatedItem::new("Book B", 3.2)],
            threshold: 4.0,
        };
        let out = showcase.run().await.unwrap();
        assert_eq!(out.lines, vec![r#"[{"title":"Book A","rating":4.5}]"#]);
    }

    #[tokio::test]
    async fn test_product_showcase_empty_is_null() {
        let out = ProductShowcase { products: vec![] }.run().await.unwrap();
        assert_eq!(out.lines, vec!["null"]);
    }

    #[tokio::test]
    async fn test_concat_showcase_mixed_arrays() {
        let showcase = ConcatShowcase {
            arrays: vec![vec!["a".into(), "b".into()], vec!["c".into()]],
        };
        let out = showcase.run().await.unwrap();
        assert_eq!(out.lines, vec![r#"["a","b","c"]"#]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_square_showcase_renders_rejection() {
        let showcase = SquareShowcase {
            inputs: vec![4.0, -1.0],
            delay: Duration::from_millis(1000),
        };
        let out = showcase.run().await.unwrap();
        assert_eq!(
            out.lines,
            vec!["4 -> 16", "-1 -> rejected: Negative number not allowed!"]
        );
    }

    #[tokio::test]
    async fn test_value_and_calendar_showcases() {
        let out = ValueShowcase {
            inputs: vec![Value::from("hello"), Value::from(10.0)],
        }
        .run()
        .await
        .unwrap();
        assert_eq!(out.lines, vec!["\"hello\" -> 5", "10 -> 20"]);

        let out = CalendarShowcase {
            days: vec![Day::Monday, Day::Sunday],
        }
        .run()
        .await
        .unwrap();
        assert_eq!(out.lines, vec!["Monday: Weekday", "Sunday: Weekend"]);
    }
}
