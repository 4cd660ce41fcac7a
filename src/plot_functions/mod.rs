// src/plot_functions/mod.rs

pub mod plot_cohesion_diagrams;

// src/plot_functions/mod.rs
