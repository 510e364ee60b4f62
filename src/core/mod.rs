pub mod service;

pub use crate::domain::model::{CoffeeDrink, CoffeeInformation};
pub use crate::domain::ports::CoffeeInformationRepository;
pub use crate::utils::error::Result;
