//! Pure query functions over the static catalog.
//!
//! Every function here is deterministic and side-effect-free; results borrow
//! from the catalog, so callers clone only when they need ownership (e.g. to
//! snapshot a product into the wishlist).

use lubemart_core::ProductId;

use crate::data::catalog;
use crate::product::{Category, Product};

/// Look up a product by ID.
///
/// A linear scan: the catalog is small and fixed, so there is nothing to
/// index.
#[must_use]
pub fn by_id(id: ProductId) -> Option<&'static Product> {
    catalog().iter().find(|p| p.id == id)
}

/// Up to `limit` other products in the same category as `id`, in catalog
/// order. The anchor product itself is never included. Returns an empty list
/// when `id` is not in the catalog.
#[must_use]
pub fn similar_to(id: ProductId, limit: usize) -> Vec<&'static Product> {
    let Some(product) = by_id(id) else {
        return Vec::new();
    };

    catalog()
        .iter()
        .filter(|p| p.category == product.category && p.id != id)
        .take(limit)
        .collect()
}

/// Up to `limit` featured products, in catalog order.
#[must_use]
pub fn featured(limit: usize) -> Vec<&'static Product> {
    catalog().iter().filter(|p| p.featured).take(limit).collect()
}

/// Up to `limit` new arrivals, in catalog order.
#[must_use]
pub fn new_arrivals(limit: usize) -> Vec<&'static Product> {
    catalog()
        .iter()
        .filter(|p| p.new_arrival)
        .take(limit)
        .collect()
}

/// Up to `limit` best sellers, in catalog order.
#[must_use]
pub fn best_sellers(limit: usize) -> Vec<&'static Product> {
    catalog()
        .iter()
        .filter(|p| p.best_seller)
        .take(limit)
        .collect()
}

/// Category filter with an explicit "no filtering" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "all" option: every product passes.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a select-control value ("all" or a category label).
    ///
    /// Unknown labels fall back to [`Self::All`], matching the permissive
    /// behavior of the filter controls.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return Self::All;
        }
        Category::ALL
            .into_iter()
            .find(|c| c.label() == value)
            .map_or(Self::All, Self::Only)
    }

    fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }
}

/// Pack size filter with an explicit "no filtering" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter<'a> {
    /// The "all" option: every product passes.
    #[default]
    All,
    Only(&'a str),
}

impl SizeFilter<'_> {
    fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(size) => product.has_size(size),
        }
    }
}

/// Products matching the given category filter, in catalog order.
#[must_use]
pub fn by_category(filter: CategoryFilter) -> Vec<&'static Product> {
    catalog().iter().filter(|p| filter.matches(p)).collect()
}

/// Products offered in the given pack size, in catalog order.
#[must_use]
pub fn by_size(filter: SizeFilter<'_>) -> Vec<&'static Product> {
    catalog().iter().filter(|p| filter.matches(p)).collect()
}

/// Case-insensitive substring search over name, description, and category
/// label.
///
/// An empty or whitespace-only query returns the full catalog unfiltered.
/// That is deliberate: the search page treats a cleared search box as "show
/// everything", not "show nothing".
#[must_use]
pub fn search(query: &str) -> Vec<&'static Product> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return catalog().iter().collect();
    }

    catalog()
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.category.label().to_lowercase().contains(&term)
        })
        .collect()
}

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceLowToHigh,
    PriceHighToLow,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parse a select-control value.
    ///
    /// Returns `None` for unrecognized keys (including "featured", which
    /// means "leave the catalog order alone").
    #[must_use]
    pub fn from_key(value: &str) -> Option<Self> {
        match value {
            "price-low" => Some(Self::PriceLowToHigh),
            "price-high" => Some(Self::PriceHighToLow),
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            _ => None,
        }
    }
}

/// Stable sort of a product list.
///
/// `None` leaves the input order unchanged. Equal keys preserve their
/// original relative order (`sort_by` is stable).
pub fn sort(products: &mut [&Product], key: Option<SortKey>) {
    let Some(key) = key else { return };

    match key {
        SortKey::PriceLowToHigh => {
            products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
        }
        SortKey::PriceHighToLow => {
            products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
        }
        SortKey::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => products.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_round_trips_every_product() {
        for product in catalog() {
            assert_eq!(by_id(product.id), Some(product));
        }
    }

    #[test]
    fn test_by_id_unknown_is_none() {
        assert!(by_id(ProductId::new(9999)).is_none());
    }

    #[test]
    fn test_similar_to_excludes_anchor_and_respects_limit() {
        let anchor = ProductId::new(1);
        let similar = similar_to(anchor, 4);

        assert!(similar.len() <= 4);
        assert!(similar.iter().all(|p| p.id != anchor));

        let anchor_category = by_id(anchor).unwrap().category;
        assert!(similar.iter().all(|p| p.category == anchor_category));
    }

    #[test]
    fn test_similar_to_unknown_id_is_empty() {
        assert!(similar_to(ProductId::new(9999), 4).is_empty());
    }

    #[test]
    fn test_search_blank_returns_full_catalog_in_order() {
        let all = search("");
        assert_eq!(all.len(), catalog().len());
        assert!(all.iter().zip(catalog()).all(|(a, b)| a.id == b.id));

        assert_eq!(search("   ").len(), catalog().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search("NaViGaToR");
        assert!(hits.iter().any(|p| p.name.contains("NAVIGATOR")));
    }

    #[test]
    fn test_search_matches_category_label() {
        let hits = search("gear oil");
        assert!(hits.iter().any(|p| p.category == Category::GearOil));
    }

    #[test]
    fn test_category_filter_all_is_identity() {
        assert_eq!(by_category(CategoryFilter::All).len(), catalog().len());
    }

    #[test]
    fn test_category_filter_only() {
        let motorcycles = by_category(CategoryFilter::Only(Category::Motorcycle));
        assert!(!motorcycles.is_empty());
        assert!(motorcycles.iter().all(|p| p.category == Category::Motorcycle));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Passenger Car"),
            CategoryFilter::Only(Category::PassengerCar)
        );
        assert_eq!(CategoryFilter::parse("nonsense"), CategoryFilter::All);
    }

    #[test]
    fn test_size_filter() {
        let all = by_size(SizeFilter::All);
        assert_eq!(all.len(), catalog().len());

        let small = by_size(SizeFilter::Only("900 ML"));
        assert!(!small.is_empty());
        assert!(small.iter().all(|p| p.has_size("900 ML")));
    }

    #[test]
    fn test_sort_price_low_is_non_decreasing_and_stable() {
        let mut products = search("");
        sort(&mut products, Some(SortKey::PriceLowToHigh));

        for pair in products.windows(2) {
            assert!(pair[0].price.amount <= pair[1].price.amount);
        }

        // Stability: equal prices keep catalog order.
        for pair in products.windows(2) {
            if pair[0].price == pair[1].price {
                assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn test_sort_name_desc() {
        let mut products = search("");
        sort(&mut products, Some(SortKey::NameDesc));
        for pair in products.windows(2) {
            assert!(pair[0].name >= pair[1].name);
        }
    }

    #[test]
    fn test_unrecognized_sort_key_leaves_order_unchanged() {
        let original = search("");
        let mut products = original.clone();
        sort(&mut products, SortKey::from_key("featured"));
        assert!(products.iter().zip(&original).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_flag_subsets_respect_limit() {
        assert!(featured(2).len() <= 2);
        assert!(new_arrivals(4).iter().all(|p| p.new_arrival));
        assert!(best_sellers(4).iter().all(|p| p.best_seller));
    }
}
