use crate::core::{CoffeeDrink, CoffeeInformation, CoffeeInformationRepository, Result};
use crate::utils::error::CoffeeError;
use uuid::Uuid;

/// Read-only query facade over the drink catalog.
///
/// Holds no state between calls; every operation fetches a fresh catalog
/// snapshot from the injected repository.
pub struct CoffeeInformationService<R: CoffeeInformationRepository> {
    repository: R,
}

impl<R: CoffeeInformationRepository> CoffeeInformationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Full catalog, returned exactly as the repository provided it.
    pub async fn get_all_information(&self) -> Result<CoffeeInformation> {
        self.repository.get_coffee_information().await
    }

    /// Look up a single drink by its identifier.
    ///
    /// The candidate must already be a typed UUID; anything that is not
    /// version 4 is rejected before the catalog is consulted.
    pub async fn get_drink_by_id(&self, id: Uuid) -> Result<CoffeeDrink> {
        if id.get_version_num() != 4 {
            tracing::debug!("Rejected drink id with version {}", id.get_version_num());
            return Err(CoffeeError::InvalidUuid {
                value: id.to_string(),
            });
        }

        let information = self.repository.get_coffee_information().await?;
        find_drink(information, &id.to_string(), |drink| &drink.id)
    }

    /// Look up a single drink by title. Any string is an acceptable candidate.
    pub async fn get_drink_by_title(&self, title: &str) -> Result<CoffeeDrink> {
        let information = self.repository.get_coffee_information().await?;
        find_drink(information, title, |drink| &drink.title)
    }
}

/// Convert untyped outer-layer input into a lookup candidate. Strings that do
/// not parse as a UUID at all are reported the same way as wrong-version ones.
pub fn parse_drink_id(candidate: &str) -> Result<Uuid> {
    Uuid::parse_str(candidate).map_err(|_| CoffeeError::InvalidUuid {
        value: candidate.to_string(),
    })
}

// Case-insensitive linear scan in stored order. First match wins; duplicate
// ids or titles are not diagnosed.
fn find_drink<F>(information: CoffeeInformation, value: &str, key: F) -> Result<CoffeeDrink>
where
    F: Fn(&CoffeeDrink) -> &str,
{
    let needle = value.to_lowercase();
    information
        .coffee_drinks
        .into_iter()
        .find(|drink| key(drink).to_lowercase() == needle)
        .ok_or_else(|| CoffeeError::NotFound {
            value: value.to_string(),
        })
}
