// src/data_analysis/mod.rs

pub mod cohesion_curve;
pub mod sampling;

// src/data_analysis/mod.rs
