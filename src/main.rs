use catalog_admin_lib::shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let config = AppConfig::from_env()?;

    catalog_admin_lib::run(config).await
}
