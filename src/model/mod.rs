pub mod buckets;
pub mod thresholds;
