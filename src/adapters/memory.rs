use crate::domain::model::{CoffeeDrink, CoffeeInformation};
use crate::domain::ports::CoffeeInformationRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Catalog held in memory, fixed at construction time.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    information: CoffeeInformation,
}

impl InMemoryCatalog {
    pub fn new(information: CoffeeInformation) -> Self {
        Self { information }
    }

    /// Built-in catalog so the binary works without a catalog file.
    pub fn sample() -> Self {
        Self::new(CoffeeInformation {
            coffee_drinks: vec![
                CoffeeDrink {
                    id: "5a3a54a4-0f14-4e35-9d23-1ebf59f7a00d".to_string(),
                    title: "Espresso".to_string(),
                    description: "A concentrated shot brewed under pressure".to_string(),
                    ingredients: vec!["espresso".to_string()],
                },
                CoffeeDrink {
                    id: "9f7267f2-b1f0-4bd6-8e11-4e63f4be79a5".to_string(),
                    title: "Cappuccino".to_string(),
                    description: "Espresso with steamed milk and a thick layer of foam"
                        .to_string(),
                    ingredients: vec![
                        "espresso".to_string(),
                        "steamed milk".to_string(),
                        "milk foam".to_string(),
                    ],
                },
                CoffeeDrink {
                    id: "0a9ac21f-59a3-4a61-9b2f-2c7e5be7d9c3".to_string(),
                    title: "Latte".to_string(),
                    description: "Espresso topped up with steamed milk".to_string(),
                    ingredients: vec!["espresso".to_string(), "steamed milk".to_string()],
                },
            ],
        })
    }
}

#[async_trait]
impl CoffeeInformationRepository for InMemoryCatalog {
    async fn get_coffee_information(&self) -> Result<CoffeeInformation> {
        Ok(self.information.clone())
    }
}
