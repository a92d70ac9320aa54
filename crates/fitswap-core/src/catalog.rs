use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FitSwapError, Result};

/// Unique, immutable product identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry. Price is in the smallest currency unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Variant/size description, e.g. "White/M".
    pub spec: String,
    pub price: u64,
    #[serde(skip)]
    selected: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        spec: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category: category.into(),
            spec: spec.into(),
            price,
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Ordered product collection. Display order is insertion order; every
/// lookup and mutation goes through the product id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and unnamed products.
    /// The prices of all products must sum without overflow, so every
    /// selection total fits in a `u64`.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        let mut total: u64 = 0;
        for product in &products {
            total = total.checked_add(product.price).ok_or_else(|| {
                FitSwapError::InvalidCatalog(format!(
                    "total price overflows at product {}",
                    product.id
                ))
            })?;
            if !seen.insert(product.id) {
                return Err(FitSwapError::DuplicateProductId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(FitSwapError::InvalidCatalog(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The five-item spring collection the marketing tool ships with.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Flip the selection flag of `id`. Returns the new flag.
    pub(crate) fn toggle(&mut self, id: ProductId) -> Result<bool> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(FitSwapError::UnknownProductId(id))?;
        product.selected = !product.selected;
        Ok(product.selected)
    }
}

pub(crate) fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(1, "Spring Spaghetti-Strap Dress", "Tops", "White/M", 1580),
        Product::new(2, "High-Waist Relaxed Jeans", "Bottoms", "Light Blue/S", 1280),
        Product::new(3, "Woven Tote Bag", "Bags", "Beige/One Size", 2480),
        Product::new(4, "Bow Hair Clip", "Accessories", "Pink/One Size", 580),
        Product::new(5, "Seashell Earrings", "Accessories", "Gold/One Size", 780),
    ]
}

/// Render an amount with grouped thousands, e.g. `NT$ 1,580`.
pub fn format_price(currency: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{currency} {grouped}")
}
