use crate::types::{ButtonVariants, Impact, Shape, Size};

/// Classes applied to every button regardless of variant: focus ring,
/// pressed offset and disabled state.
pub const BASE_CLASSES: &str = "font-semibold focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500 focus-visible:ring-offset-2 active:translate-y-px disabled:pointer-events-none disabled:opacity-50";

impl Impact {
    pub fn classes(&self) -> &'static str {
        match self {
            Impact::Bold => {
                "bg-indigo-500 text-white shadow-md hover:bg-indigo-600 disabled:shadow-none"
            }
            Impact::Light => "bg-indigo-100 text-indigo-700 hover:bg-indigo-200",
            Impact::None => "bg-transparent text-indigo-700 hover:bg-indigo-50",
        }
    }
}

impl Size {
    pub fn classes(&self) -> &'static str {
        match self {
            Size::Small => "px-3 py-1 text-sm",
            Size::Medium => "px-5 py-2 text-base",
            Size::Large => "px-7 py-2.5 text-lg",
        }
    }
}

impl Shape {
    pub fn classes(&self) -> &'static str {
        match self {
            Shape::Square => "rounded-none",
            Shape::Rounded => "rounded-md",
            Shape::Pill => "rounded-full",
        }
    }
}

impl ButtonVariants {
    /// Final class string: base, impact, size, shape.
    pub fn resolve(&self) -> String {
        cx([
            BASE_CLASSES,
            self.impact.classes(),
            self.size.classes(),
            self.shape.classes(),
        ])
    }
}

pub fn resolve(impact: Impact, size: Size, shape: Shape) -> String {
    ButtonVariants::new(impact, size, shape).resolve()
}

/// Joins class strings with single spaces. Empty parts and stray whitespace
/// are dropped; repeated classes are kept in order.
pub fn cx<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
