use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

pub async fn run(http: String) -> Result<()> {
    let config = AppConfig::default();
    api::serve(http, config).await
}
