use crate::domain::entities::funnel::{Funnel, FunnelMetrics};
use crate::domain::error::DomainError;

/// Read-only, ordered source of funnel measurements.
///
/// Order is the display order: comparison views and alert lists follow it.
pub trait FunnelRepository: Send + Sync {
    fn names(&self) -> Vec<String>;
    fn get(&self, name: &str) -> Result<FunnelMetrics, DomainError>;
    fn list(&self) -> Vec<Funnel>;
}
