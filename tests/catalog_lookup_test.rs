use coffee_info::{parse_drink_id, CoffeeError, CoffeeInformationService, FileCatalog, InMemoryCatalog};
use tempfile::TempDir;

const STUB_ID: &str = "11111111-1111-4111-8111-111111111111";

const JSON_CATALOG: &str = r#"{
    "coffee_drinks": [
        {
            "id": "11111111-1111-4111-8111-111111111111",
            "title": "Stub Coffee",
            "description": "this is a test",
            "ingredients": ["ingredient 1", "ingredient 2"]
        }
    ]
}"#;

const TOML_CATALOG: &str = r#"
[[coffee_drinks]]
id = "11111111-1111-4111-8111-111111111111"
title = "Stub Coffee"
description = "this is a test"
ingredients = ["ingredient 1", "ingredient 2"]
"#;

fn file_service(dir: &TempDir, name: &str, contents: &str) -> CoffeeInformationService<FileCatalog> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    CoffeeInformationService::new(FileCatalog::new(path))
}

#[tokio::test]
async fn test_end_to_end_lookups_over_json_catalog() {
    let dir = TempDir::new().unwrap();
    let service = file_service(&dir, "drinks.json", JSON_CATALOG);

    let information = service.get_all_information().await.unwrap();
    assert_eq!(information.coffee_drinks.len(), 1);

    let by_id = service
        .get_drink_by_id(parse_drink_id(STUB_ID).unwrap())
        .await
        .unwrap();
    assert_eq!(by_id.title, "Stub Coffee");

    let by_title = service.get_drink_by_title("stub coffee").await.unwrap();
    assert_eq!(by_title.id, STUB_ID);

    let missing = service.get_drink_by_title("a vague name").await;
    assert!(matches!(missing, Err(CoffeeError::NotFound { .. })));
}

#[tokio::test]
async fn test_json_and_toml_catalogs_agree() {
    let dir = TempDir::new().unwrap();
    let json_service = file_service(&dir, "drinks.json", JSON_CATALOG);
    let toml_service = file_service(&dir, "drinks.toml", TOML_CATALOG);

    let from_json = json_service.get_all_information().await.unwrap();
    let from_toml = toml_service.get_all_information().await.unwrap();
    assert_eq!(from_json, from_toml);

    let json_drink = json_service.get_drink_by_title("STUB COFFEE").await.unwrap();
    let toml_drink = toml_service.get_drink_by_title("STUB COFFEE").await.unwrap();
    assert_eq!(json_drink, toml_drink);
}

#[tokio::test]
async fn test_catalog_is_reread_on_every_call() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drinks.json");
    std::fs::write(&path, JSON_CATALOG).unwrap();
    let service = CoffeeInformationService::new(FileCatalog::new(path.clone()));

    let before = service.get_all_information().await.unwrap();
    assert_eq!(before.coffee_drinks.len(), 1);

    // Replace the catalog on disk; the next call must see the new snapshot.
    std::fs::write(&path, r#"{"coffee_drinks": []}"#).unwrap();

    let after = service.get_all_information().await.unwrap();
    assert!(after.coffee_drinks.is_empty());

    let missing = service
        .get_drink_by_id(parse_drink_id(STUB_ID).unwrap())
        .await;
    assert!(matches!(missing, Err(CoffeeError::NotFound { .. })));
}

#[tokio::test]
async fn test_sample_catalog_supports_every_query() {
    let service = CoffeeInformationService::new(InMemoryCatalog::sample());

    let information = service.get_all_information().await.unwrap();
    assert!(!information.coffee_drinks.is_empty());

    let first = information.coffee_drinks[0].clone();
    let by_id = service
        .get_drink_by_id(parse_drink_id(&first.id).unwrap())
        .await
        .unwrap();
    assert_eq!(by_id, first);

    let by_title = service
        .get_drink_by_title(&first.title.to_uppercase())
        .await
        .unwrap();
    assert_eq!(by_title, first);
}
