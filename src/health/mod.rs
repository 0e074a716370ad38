//! Body-mass metrics: BMI and suitable weight.

pub mod calculator;

pub use calculator::{bmi, calculate_metrics, suitable_weight, HealthMetrics, MetricsRequest};
