mod router;
mod state;

pub use router::create_router;
pub use state::{AppState, AppStateInner};
