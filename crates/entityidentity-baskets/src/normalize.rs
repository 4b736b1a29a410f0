//! Basket-specific wrappers over the shared normalizer
//! (`baskets/basketnormalize.py`).

use entityidentity_core::normalize::{allow_sets, canonicalize_name, normalize_name, slugify_name};

pub fn normalize_basket_name(s: &str) -> String {
    normalize_name(s, false, allow_sets::baskets)
}

pub fn canonicalize_basket_name(s: &str) -> String {
    canonicalize_name(s, false, false, allow_sets::baskets_display)
}

pub fn slugify_basket_name(s: &str) -> String {
    slugify_name(s)
}

/// `"{normalized_name}|basket"` (`basketnormalize.py::generate_basket_id`).
pub fn generate_basket_id(name: &str) -> String {
    entityidentity_core::id::basket_id(&normalize_basket_name(name))
}
