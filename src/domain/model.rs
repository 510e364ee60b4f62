use serde::{Deserialize, Serialize};

/// A single drink record. Identity is carried by `id`, the string form of a
/// version-4 UUID; `title` is assumed unique within a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeDrink {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Read-only view over the full catalog, in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeInformation {
    pub coffee_drinks: Vec<CoffeeDrink>,
}
