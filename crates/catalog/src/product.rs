//! Product record and supporting types.

use serde::{Deserialize, Serialize};

use lubemart_core::{Price, ProductId};

/// Product category.
///
/// A closed set: categories only change when the catalog itself is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Motorcycle,
    #[serde(rename = "Passenger Car")]
    PassengerCar,
    #[serde(rename = "Heavy Duty")]
    HeavyDuty,
    #[serde(rename = "Heavy Duty Diesel")]
    HeavyDutyDiesel,
    #[serde(rename = "Fully Synthetic")]
    FullySynthetic,
    Multigrade,
    Transmission,
    #[serde(rename = "Gear Oil")]
    GearOil,
    Hydraulic,
    Coolant,
    #[serde(rename = "2 Stroke")]
    TwoStroke,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 11] = [
        Self::PassengerCar,
        Self::Motorcycle,
        Self::HeavyDuty,
        Self::HeavyDutyDiesel,
        Self::FullySynthetic,
        Self::Multigrade,
        Self::Transmission,
        Self::GearOil,
        Self::Hydraulic,
        Self::Coolant,
        Self::TwoStroke,
    ];

    /// Human-readable label, also used for search matching.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Motorcycle => "Motorcycle",
            Self::PassengerCar => "Passenger Car",
            Self::HeavyDuty => "Heavy Duty",
            Self::HeavyDutyDiesel => "Heavy Duty Diesel",
            Self::FullySynthetic => "Fully Synthetic",
            Self::Multigrade => "Multigrade",
            Self::Transmission => "Transmission",
            Self::GearOil => "Gear Oil",
            Self::Hydraulic => "Hydraulic",
            Self::Coolant => "Coolant",
            Self::TwoStroke => "2 Stroke",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured detail sections shown on the product page.
///
/// Each section is an ordered list of lines; empty sections are omitted from
/// serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
}

/// An immutable catalog entry.
///
/// Defined at build time, never mutated or deleted at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product ID.
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Image path relative to the asset root.
    pub image: String,
    pub price: Price,
    pub description: String,
    /// Available pack sizes, in display order. Always non-empty.
    pub sizes: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub new_arrival: bool,
    #[serde(default)]
    pub best_seller: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProductDetails>,
}

impl Product {
    /// Whether the product is offered in the given pack size (exact label match).
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// A value/label pair for view-layer select controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Category filter options, including the "all" sentinel.
pub const CATEGORY_OPTIONS: [SelectOption; 12] = [
    SelectOption { value: "all", label: "All Categories" },
    SelectOption { value: "Passenger Car", label: "Passenger Car" },
    SelectOption { value: "Motorcycle", label: "Motorcycle" },
    SelectOption { value: "Heavy Duty", label: "Heavy Duty" },
    SelectOption { value: "Heavy Duty Diesel", label: "Heavy Duty Diesel" },
    SelectOption { value: "Fully Synthetic", label: "Fully Synthetic" },
    SelectOption { value: "Multigrade", label: "Multigrade" },
    SelectOption { value: "Transmission", label: "Transmission" },
    SelectOption { value: "Gear Oil", label: "Gear Oil" },
    SelectOption { value: "Hydraulic", label: "Hydraulic" },
    SelectOption { value: "Coolant", label: "Coolant" },
    SelectOption { value: "2 Stroke", label: "2 Stroke" },
];

/// Pack size filter options, including the "all" sentinel.
pub const SIZE_OPTIONS: [SelectOption; 16] = [
    SelectOption { value: "all", label: "All Sizes" },
    SelectOption { value: "500 ML", label: "500 ML" },
    SelectOption { value: "800 ML", label: "800 ML" },
    SelectOption { value: "900 ML", label: "900 ML" },
    SelectOption { value: "1L", label: "1L" },
    SelectOption { value: "2L", label: "2L" },
    SelectOption { value: "2.5L", label: "2.5L" },
    SelectOption { value: "3L", label: "3L" },
    SelectOption { value: "3.5L", label: "3.5L" },
    SelectOption { value: "4L", label: "4L" },
    SelectOption { value: "5L", label: "5L" },
    SelectOption { value: "7L", label: "7L" },
    SelectOption { value: "10L", label: "10L" },
    SelectOption { value: "20L", label: "20L" },
    SelectOption { value: "50L", label: "50L" },
    SelectOption { value: "210L", label: "210L" },
];

/// Sort options offered by the product listing page.
pub const SORT_OPTIONS: [SelectOption; 5] = [
    SelectOption { value: "featured", label: "Featured" },
    SelectOption { value: "price-low", label: "Price: Low to High" },
    SelectOption { value: "price-high", label: "Price: High to Low" },
    SelectOption { value: "name-asc", label: "Name: A to Z" },
    SelectOption { value: "name-desc", label: "Name: Z to A" },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_to_label() {
        let json = serde_json::to_string(&Category::PassengerCar).unwrap();
        assert_eq!(json, "\"Passenger Car\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::PassengerCar);
    }

    #[test]
    fn test_category_display_matches_option_values() {
        for category in Category::ALL {
            assert!(
                CATEGORY_OPTIONS.iter().any(|o| o.value == category.label()),
                "no filter option for {category}"
            );
        }
    }
}
