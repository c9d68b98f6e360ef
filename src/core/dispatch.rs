use crate::domain::model::Value;

/// Character count for text, twice the value for numbers.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(number) => number * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length() {
        assert_eq!(process_value(&Value::from("hello")), 5.0);
        assert_eq!(process_value(&Value::from("")), 0.0);
        assert_eq!(process_value(&Value::from("héllo")), 5.0);
    }

    #[test]
    fn test_number_doubled() {
        assert_eq!(process_value(&Value::from(10.0)), 20.0);
        assert_eq!(process_value(&Value::from(-2.5)), -5.0);
    }
}
