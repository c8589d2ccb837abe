//! Models command implementation

use anyhow::Result;
use saku_core::Settings;

use super::load_models;

pub fn cmd_models(settings: &Settings) -> Result<()> {
    let models = load_models(settings)?;

    println!();
    println!("🧠 Models");
    println!("   ─────────────────────────────────────────────────────────────");

    for meta in models.info() {
        println!("   {} ({})", meta.role, meta.kind);
        if let Some(ref path) = meta.path {
            println!("      Path:     {}", path.display());
        }
        println!("      Features: {}", meta.n_features);
        if let Some(ref classes) = meta.classes {
            println!("      Labels:   {:?}", classes);
        }
        if let Some(ref digest) = meta.sha256 {
            println!("      SHA-256:  {}", digest);
        }
    }

    println!();
    println!("   ✅ Both models loaded and validated");
    println!();
    Ok(())
}
