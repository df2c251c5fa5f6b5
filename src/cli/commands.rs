use tracing::{debug, info};

use crate::collect::collector::collect_values;
use crate::host::document::{Document, NodeRef};
use crate::options::options_model::CollectOptions;

// ============================================================================
// collect subcommand
// ============================================================================

/// Collect values from a document and return the JSON to print.
pub fn cmd_collect(
    document_path: &str,
    container_ids: &[String],
    options_path: Option<&str>,
    pretty: bool,
    write_document: Option<&str>,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut document = Document::load(document_path)?;
    let options = options_path.map(load_options).transpose()?;

    let containers = resolve_containers(&document, container_ids)?;
    debug!(
        document = document_path,
        containers = containers.len(),
        "collecting"
    );

    let data = collect_values(&mut document, &containers, options.as_ref())?;
    info!(fields = data.len(), "collected");

    if let Some(path) = write_document {
        document.save(path)?;
        info!(path, "wrote document");
    }

    let json = if pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };
    Ok(json)
}

/// Load per-call collect options from a YAML file.
pub fn load_options(path: &str) -> Result<CollectOptions, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let options: CollectOptions = serde_yaml::from_str(&content)?;
    Ok(options)
}

// ============================================================================
// Helpers
// ============================================================================

/// Map container ids to handles; no ids means the whole document.
pub fn resolve_containers(
    document: &Document,
    ids: &[String],
) -> Result<Vec<NodeRef>, Box<dyn std::error::Error>> {
    if ids.is_empty() {
        return Ok(vec![document.root()]);
    }

    let mut containers = Vec::with_capacity(ids.len());
    for id in ids {
        containers.push(document.require_id(id)?);
    }
    Ok(containers)
}
