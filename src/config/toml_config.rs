use crate::core::square::SQUARE_DELAY;
use crate::core::{AnyVehicle, Car, Day, Product, RatedItem, Value, Vehicle};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Sample inputs for the showcase run. Every section is optional and falls back to built-in samples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub text: TextSection,
    pub rating: RatingSection,
    pub concat: ConcatSection,
    pub values: ValuesSection,
    pub products: ProductsSection,
    pub calendar: CalendarSection,
    pub vehicles: Vec<VehicleEntry>,
    pub square: SquareSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSection {
    pub inputs: Vec<String>,
    pub to_upper: Option<bool>,
}

impl Default for TextSection {
    fn default() -> Self {
        Self {
            inputs: vec!["Hello World".to_string()],
            to_upper: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSection {
    pub threshold: f64,
    pub items: Vec<RatedItem>,
}

impl Default for RatingSection {
    fn default() -> Self {
        Self {
            threshold: crate::core::collections::DEFAULT_MIN_RATING,
            items: vec![
                RatedItem::new("Book A", 4.5),
                RatedItem::new("Book B", 3.2),
                RatedItem::new("Book C", 3.9),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcatSection {
    pub arrays: Vec<Vec<serde_json::Value>>,
}

impl Default for ConcatSection {
    fn default() -> Self {
        Self {
            arrays: vec![
                vec![1.into(), 2.into()],
                vec![3.into(), 4.into()],
                vec![5.into()],
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesSection {
    pub inputs: Vec<Value>,
}

impl Default for ValuesSection {
    fn default() -> Self {
        Self {
            inputs: vec![Value::from("hello"), Value::from(10.0)],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsSection {
    pub items: Vec<Product>,
}

impl Default for ProductsSection {
    fn default() -> Self {
        Self {
            items: vec![
                Product::new("Pen", 0.0),
                Product::new("Notebook", 99.0),
                Product::new("Bag", 1.0),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSection {
    pub days: Vec<Day>,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            days: Day::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub make: String,
    pub year: i32,
    pub model: Option<String>,
}

impl VehicleEntry {
    pub fn to_vehicle(&self) -> AnyVehicle {
        match &self.model {
            Some(model) => Car::new(self.make.clone(), self.year, model.clone()).into(),
            None => Vehicle::new(self.make.clone(), self.year).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareSection {
    pub inputs: Vec<f64>,
    pub delay_ms: u64,
}

impl Default for SquareSection {
    fn default() -> Self {
        Self {
            inputs: vec![4.0, -1.0],
            delay_ms: SQUARE_DELAY.as_millis() as u64,
        }
    }
}

impl SquareSection {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl SampleConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SQUARE_INPUT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KitError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn vehicles(&self) -> Vec<AnyVehicle> {
        if self.vehicles.is_empty() {
            return vec![
                Vehicle::new("Ford", 1999).into(),
                Car::new("Toyota", 2020, "Corolla").into(),
            ];
        }
        self.vehicles.iter().map(VehicleEntry::to_vehicle).collect()
    }
}

impl Validate for SampleConfig {
    fn validate(&self) -> Result<()> {
        validate_range("rating.threshold", self.rating.threshold, 0.0, 5.0)?;
        for item in &self.rating.items {
            validate_non_empty_string("rating.items.title", &item.title)?;
            validate_finite("rating.items.rating", item.rating)?;
        }

        for product in &self.products.items {
            validate_non_empty_string("products.items.name", &product.name)?;
            validate_finite("products.items.price", product.price)?;
        }

        for vehicle in &self.vehicles {
            validate_non_empty_string("vehicles.make", &vehicle.make)?;
            if let Some(model) = &vehicle.model {
                validate_non_empty_string("vehicles.model", model)?;
            }
        }

        for input in &self.square.inputs {
            validate_finite("square.inputs", *input)?;
        }

        Ok(())
    }
}
