use crate::domain::model::{AnyVehicle, Car, Vehicle};

// 輸出保留原本的引號
pub fn vehicle_info(vehicle: &Vehicle) -> String {
    format!("\"Make: {}, Year: {}\"", vehicle.make(), vehicle.year())
}

pub fn car_info(car: &Car) -> String {
    vehicle_info(car.base())
}

pub fn car_model(car: &Car) -> String {
    format!("\"Model : {}\"", car.model())
}

/// Every formatted line the variant exposes, base line first.
pub fn describe(vehicle: &AnyVehicle) -> Vec<String> {
    match vehicle {
        AnyVehicle::Plain(vehicle) => vec![vehicle_info(vehicle)],
        AnyVehicle::Car(car) => vec![car_info(car), car_model(car)],
    }
}
