//! Server command implementation

use anyhow::Result;
use saku_core::Settings;

use super::load_models;

pub async fn cmd_serve(
    settings: Settings,
    host: &str,
    port: u16,
    allowed_origins: Vec<String>,
) -> Result<()> {
    println!("🚀 Starting Saku web server...");
    println!("   Classifier: {}", settings.classifier_path.display());
    println!("   Regressor:  {}", settings.regressor_path.display());
    println!("   Listening:  http://{}:{}", host, port);
    if !allowed_origins.is_empty() {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    // Models must load before the server accepts requests
    let models = load_models(&settings)?;

    let config = saku_server::ServerConfig { allowed_origins };
    saku_server::serve_with_config(models, settings, host, port, config).await?;

    Ok(())
}
