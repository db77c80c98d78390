use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VariantError;

// ============================================================================
// Variant Enums
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    #[default]
    Bold,
    Light,
    None,
}

impl Impact {
    pub const ALL: [Impact; 3] = [Impact::Bold, Impact::Light, Impact::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Bold => "bold",
            Impact::Light => "light",
            Impact::None => "none",
        }
    }
}

impl FromStr for Impact {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bold" => Ok(Impact::Bold),
            "light" => Ok(Impact::Light),
            "none" => Ok(Impact::None),
            _ => Err(VariantError::UnknownValue {
                field: "impact",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl FromStr for Size {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(VariantError::UnknownValue {
                field: "size",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    #[default]
    Rounded,
    Pill,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Rounded, Shape::Pill];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Rounded => "rounded",
            Shape::Pill => "pill",
        }
    }
}

impl FromStr for Shape {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(Shape::Square),
            "rounded" => Ok(Shape::Rounded),
            "pill" => Ok(Shape::Pill),
            _ => Err(VariantError::UnknownValue {
                field: "shape",
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Impact, Size, Shape);

// ============================================================================
// Variant Configuration
// ============================================================================

/// The full set of style-affecting props for a button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonVariants {
    pub impact: Impact,
    pub size: Size,
    pub shape: Shape,
}

impl ButtonVariants {
    pub fn new(impact: Impact, size: Size, shape: Shape) -> Self {
        Self {
            impact,
            size,
            shape,
        }
    }

    pub fn impact(self, impact: Impact) -> Self {
        Self { impact, ..self }
    }

    pub fn size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    pub fn shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }

    /// Every combination, impact-major.
    pub fn all() -> impl Iterator<Item = ButtonVariants> {
        Impact::ALL.into_iter().flat_map(|impact| {
            Size::ALL.into_iter().flat_map(move |size| {
                Shape::ALL
                    .into_iter()
                    .map(move |shape| ButtonVariants::new(impact, size, shape))
            })
        })
    }
}

impl fmt::Display for ButtonVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "impact={} size={} shape={}",
            self.impact, self.size, self.shape
        )
    }
}

impl ButtonVariants {
    pub const KEYS: [&'static str; 3] = ["impact", "size", "shape"];

    /// Reads `impact`, `size` and `shape` through `get`. Absent keys keep
    /// their default; a present but unknown value is an error. Other keys are
    /// never asked for.
    pub fn from_lookup<F>(get: F) -> Result<Self, VariantError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut variants = ButtonVariants::default();
        if let Some(impact) = get("impact") {
            variants.impact = impact.parse()?;
        }
        if let Some(size) = get("size") {
            variants.size = size.parse()?;
        }
        if let Some(shape) = get("shape") {
            variants.shape = shape.parse()?;
        }
        Ok(variants)
    }
}

/// Parses `key=value` pairs separated by whitespace or `&`, e.g.
/// `impact=light&size=small`. Keys that are absent keep their default and
/// unknown keys are rejected.
impl FromStr for ButtonVariants {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for pair in s
            .split(|c: char| c == '&' || c.is_whitespace())
            .filter(|pair| !pair.is_empty())
        {
            let (raw_key, value) = pair
                .split_once('=')
                .ok_or_else(|| VariantError::MalformedPair(pair.to_string()))?;
            let key = raw_key.to_lowercase();
            if !Self::KEYS.iter().any(|known| *known == key) {
                return Err(VariantError::UnknownKey(raw_key.to_string()));
            }
            pairs.push((key, value.to_string()));
        }

        // Last occurrence wins.
        Self::from_lookup(|key| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
