use axum::{extract::State, response::Html};

use crate::{handlers::AppState, view};

/// Handle GET / - the input form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let config = state.config.load();
    Html(view::render_index(&config.report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use arc_swap::ArcSwap;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_index_renders_form() {
        let state = AppState::new(Arc::new(ArcSwap::from_pointee(Config::default())));
        let Html(body) = index(State(state.clone())).await;
        assert!(body.contains("<form method=\"post\" action=\"/report\">"));

        let response = index(State(state)).await.into_response();
        assert_eq!(response.status(), 200);
    }
}
