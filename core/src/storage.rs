use crate::types::FilterConfig;
use std::error::Error;
use std::path::Path;

/// Leser inn filterkonfigurasjon fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfigurasjonen.
/// Lastede profiler valideres før de slippes videre.
pub fn load_config(path: &str) -> Result<FilterConfig, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: FilterConfig = serde_json::from_str(&contents)?;
        cfg.validate()?;
        println!(
            "📂 Filterkonfig lastet fra {} (terskel={})",
            path, cfg.vertical_accuracy_threshold
        );
        Ok(cfg)
    } else {
        println!(
            "⚠️ Fant ikke filterkonfig på {}, returnerer default",
            path
        );
        Ok(FilterConfig::default())
    }
}

/// Lagrer filterkonfigurasjon til disk som JSON (pretty-print).
pub fn save_config(cfg: &FilterConfig, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    println!(
        "✅ Filterkonfig lagret til {} (terskel={})",
        path, cfg.vertical_accuracy_threshold
    );
    Ok(())
}
