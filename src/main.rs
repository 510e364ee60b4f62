use clap::Parser;
use coffee_info::utils::{logger, validation::Validate};
use coffee_info::{
    parse_drink_id, CliConfig, CoffeeError, CoffeeInformationRepository,
    CoffeeInformationService, Command, FileCatalog, InMemoryCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting coffee-info CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(3);
    }

    let outcome = match &config.catalog {
        Some(path) => {
            let service = CoffeeInformationService::new(FileCatalog::new(path.clone()));
            run(service, &config.command).await
        }
        None => {
            tracing::debug!("No catalog file given, using the built-in sample catalog");
            let service = CoffeeInformationService::new(InMemoryCatalog::sample());
            run(service, &config.command).await
        }
    };

    if let Err(e) = outcome {
        tracing::error!("Lookup failed: {}", e);
        eprintln!("❌ {}", e);

        let exit_code = match e {
            CoffeeError::NotFound { .. } => 1,
            CoffeeError::InvalidUuid { .. } => 2,
            _ => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run<R>(
    service: CoffeeInformationService<R>,
    command: &Command,
) -> coffee_info::Result<()>
where
    R: CoffeeInformationRepository,
{
    match command {
        Command::List => {
            let information = service.get_all_information().await?;
            print_json(&information)
        }
        Command::DrinkById { id } => {
            let drink = service.get_drink_by_id(parse_drink_id(id)?).await?;
            print_json(&drink)
        }
        Command::DrinkByTitle { title } => {
            let drink = service.get_drink_by_title(title).await?;
            print_json(&drink)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> coffee_info::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
