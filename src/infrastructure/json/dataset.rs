//! Funnel datasets stored as JSON.
//!
//! The file is an array of `{"name": ..., "metrics": {...}}` objects; array
//! order becomes display order.

use crate::domain::entities::funnel::Funnel;
use crate::domain::error::DomainError;
use crate::infrastructure::memory::funnel_repo::InMemoryFunnelRepo;
use std::path::Path;

pub fn parse_dataset(json: &str) -> Result<Vec<Funnel>, DomainError> {
    let funnels: Vec<Funnel> = serde_json::from_str(json)?;
    Ok(funnels)
}

pub fn load_dataset(path: &Path) -> Result<InMemoryFunnelRepo, DomainError> {
    tracing::debug!(path = %path.display(), "loading funnel dataset");
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Io(format!("{}: {e}", path.display())))?;
    let funnels = parse_dataset(&raw)?;
    InMemoryFunnelRepo::from_funnels(funnels)
}

pub fn to_json(funnels: &[Funnel]) -> Result<String, DomainError> {
    Ok(serde_json::to_string_pretty(funnels)?)
}
