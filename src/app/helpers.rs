//! Startup helpers

use std::sync::Arc;

use crate::features::chart_bar::SharedFontSystem;

/// Load the system font database for label measurement
///
/// `FontSystem::new()` scans every installed font, so it runs on a
/// blocking thread.
pub async fn init_font_system() -> anyhow::Result<SharedFontSystem> {
    let font_system = tokio::task::spawn_blocking(|| {
        tracing::info!("Initializing FontSystem for chart labels...");
        let start = std::time::Instant::now();
        let font_system = cosmic_text::FontSystem::new();
        tracing::info!("FontSystem initialized in {:?}", start.elapsed());
        font_system
    })
    .await
    .map_err(|e| anyhow::anyhow!("Font loading task failed: {}", e))?;

    Ok(Arc::new(parking_lot::Mutex::new(font_system)))
}
