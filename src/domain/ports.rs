use crate::domain::model::CoffeeInformation;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-side collaborator supplying the full drink catalog. Any backing
/// implementation (in-memory fixture, file, test double) is substitutable.
#[async_trait]
pub trait CoffeeInformationRepository: Send + Sync {
    async fn get_coffee_information(&self) -> Result<CoffeeInformation>;
}
