use coffee_storefront::{
    config::AppConfig,
    shop::Shop,
    storage::JsonFileRepository,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let dir = config
        .store_dir
        .ok_or_else(|| anyhow::anyhow!("STORE_DIR must be set to seed persisted state"))?;
    let repo = JsonFileRepository::new(&dir);

    let shop = Shop::sample();
    shop.checkpoint(&repo)?;

    println!(
        "Seeded {} products and an empty cart into {}",
        shop.catalog.len(),
        dir.display()
    );
    Ok(())
}
