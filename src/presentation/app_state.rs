// Application state for HTTP handlers
use tokio::sync::{mpsc, watch};

use crate::domain::events::BackendEvent;
use crate::domain::render::PanelRender;

pub struct AppState {
    /// Inbound side of the panel's event loop.
    pub events: mpsc::Sender<BackendEvent>,
    /// Latest published render instructions.
    pub render: watch::Receiver<PanelRender>,
}
