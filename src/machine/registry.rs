use crate::models::{FillRecord, Product, ProductId};

/// Products known to the machine, in first-seen order and keyed by exact name.
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    products: Vec<Product>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the product a fill record refers to, registering it on first sight.
    ///
    /// The first record for a name fixes price and macros; later records with the
    /// same name return the existing product untouched. The flag is `true` when
    /// the product was created by this call.
    pub fn resolve(&mut self, record: &FillRecord) -> (ProductId, bool) {
        if let Some(id) = self.find(&record.name) {
            return (id, false);
        }

        self.products.push(Product::new(
            record.name.clone(),
            record.price,
            record.protein,
            record.carbohydrate,
            record.fat,
        ));
        (ProductId(self.products.len() - 1), true)
    }

    /// Find a product by exact (case-sensitive) name.
    pub fn find(&self, name: &str) -> Option<ProductId> {
        self.products
            .iter()
            .position(|p| p.name == name)
            .map(ProductId)
    }

    /// Panics if `id` was not issued by this registry.
    pub fn get(&self, id: ProductId) -> &Product {
        &self.products[id.0]
    }

    pub fn get_mut(&mut self, id: ProductId) -> &mut Product {
        &mut self.products[id.0]
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
}
