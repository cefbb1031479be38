pub mod dimensions;
pub mod profiles;
pub mod records;
pub mod risk;
pub mod thresholds;
