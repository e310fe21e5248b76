//! Loading comandas from JSON

use anyhow::{Context, Result};
use comanda_model::Comanda;
use std::io::Read;
use std::path::Path;

/// Parse a JSON array of comanda documents
///
/// A top-level object with a `comandas` array (the API's list envelope) is
/// accepted too.
pub fn parse_comandas(text: &str) -> Result<Vec<Comanda>> {
    let value: serde_json::Value = serde_json::from_str(text).context("input is not valid JSON")?;
    let list = match value {
        serde_json::Value::Object(mut envelope) => envelope
            .remove("comandas")
            .context("expected a JSON array or an object with a `comandas` array")?,
        other => other,
    };
    serde_json::from_value(list).context("expected a JSON array of comandas")
}

/// Read comandas from `path`, or stdin when it is `-`
pub fn load_comandas(path: &Path) -> Result<Vec<Comanda>> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("cannot read comandas from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("cannot read comandas from {}", path.display()))?
    };
    let comandas = parse_comandas(&text)?;
    tracing::info!(count = comandas.len(), "loaded comandas");
    Ok(comandas)
}
