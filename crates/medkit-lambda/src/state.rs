use medkit_pipeline::ToolFacade;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub facade: ToolFacade,
}
