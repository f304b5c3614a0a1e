use board_config::BoardConfig;
use board_store::{ActivityStore, BoardController};
use tracing::debug;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BoardConfig,
    pub board: BoardController,
}

impl AppContext {
    /// Build the board from configuration, seeding sample activities when enabled.
    pub fn init(config: BoardConfig) -> Self {
        let store = ActivityStore::from_config(&config);
        debug!(activities = store.len(), "board initialized");
        Self {
            board: BoardController::new(store),
            config,
        }
    }
}
