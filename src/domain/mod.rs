// Domain layer: biometric types, BMI, plan tables and ports.

pub mod bmi;
pub mod model;
pub mod plans;
pub mod ports;
