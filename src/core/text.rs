/// Uppercases `input` when `to_upper` is `Some(true)` or absent, lowercases it when `Some(false)`.
pub fn format_string(input: &str, to_upper: Option<bool>) -> String {
    if to_upper.unwrap_or(true) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}
