pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{FileCatalog, InMemoryCatalog};
#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::core::service::{parse_drink_id, CoffeeInformationService};
pub use crate::domain::model::{CoffeeDrink, CoffeeInformation};
pub use crate::domain::ports::CoffeeInformationRepository;
pub use crate::utils::error::{CoffeeError, Result};
