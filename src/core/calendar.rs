use crate::domain::model::{Day, DayType};

pub fn get_day_type(day: Day) -> DayType {
    match day {
        Day::Sunday => DayType::Weekend,
        _ => DayType::Weekday,
    }
}
