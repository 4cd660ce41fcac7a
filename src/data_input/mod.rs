// src/data_input/mod.rs

pub mod load_case;
pub mod presets;

// src/data_input/mod.rs
