// Outbound contract with the Fitness Data Service collaborator
use async_trait::async_trait;

/// The backend collaborator that owns OAuth and API polling.
///
/// `request_update` is fire-and-forget: there is no acknowledgement or retry
/// at this layer. A lost reply leaves the panel unchanged until the next
/// scheduled tick.
#[async_trait]
pub trait FitnessDataService: Send + Sync {
    async fn request_update(&self) -> anyhow::Result<()>;
}
