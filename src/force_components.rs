// src/force_components.rs

//! Internal force components of a beam section and their display table.
//!
//! Extending the supported set means adding a variant here and a row to
//! each lookup below.

use std::fmt;
use std::str::FromStr;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLOR_BLUE, COLOR_CYAN, COLOR_OLIVE, COLOR_ORANGE, COLOR_PURPLE, COLOR_RED,
};
use crate::error::CohesionError;

pub const COMPONENT_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceComponent {
    /// Normal force
    N,
    /// Shear force along y
    Ty,
    /// Shear force along z
    Tz,
    /// Torque
    Mt,
    /// Bending moment about y
    Mfy,
    /// Bending moment about z
    Mfz,
}

/// All components in table order.
pub const ALL_COMPONENTS: [ForceComponent; COMPONENT_COUNT] = [
    ForceComponent::N,
    ForceComponent::Ty,
    ForceComponent::Tz,
    ForceComponent::Mt,
    ForceComponent::Mfy,
    ForceComponent::Mfz,
];

impl ForceComponent {
    /// Short identifier, as accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            ForceComponent::N => "N",
            ForceComponent::Ty => "Ty",
            ForceComponent::Tz => "Tz",
            ForceComponent::Mt => "Mt",
            ForceComponent::Mfy => "Mfy",
            ForceComponent::Mfz => "Mfz",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ForceComponent::N | ForceComponent::Ty | ForceComponent::Tz => "N",
            ForceComponent::Mt | ForceComponent::Mfy | ForceComponent::Mfz => "N.m",
        }
    }

    /// Subplot title, e.g. `Mfz(x) [N.m]`.
    pub fn label(self) -> String {
        format!("{}(x) [{}]", self.id(), self.unit())
    }

    pub fn color(self) -> RGBColor {
        match self {
            ForceComponent::N => COLOR_OLIVE,
            ForceComponent::Ty => COLOR_BLUE,
            ForceComponent::Tz => COLOR_CYAN,
            ForceComponent::Mt => COLOR_ORANGE,
            ForceComponent::Mfy => COLOR_PURPLE,
            ForceComponent::Mfz => COLOR_RED,
        }
    }
}

impl fmt::Display for ForceComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ForceComponent {
    type Err = CohesionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_COMPONENTS
            .iter()
            .copied()
            .find(|c| c.id() == s.trim())
            .ok_or_else(|| CohesionError::UnknownComponent(s.to_string()))
    }
}
