use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Body of a successful `/api/breed/{breed}/list` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubBreeds {
    pub message: Vec<String>,
    pub status: String,
}

/// Body dog.ceo returns for an unknown breed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub status: String,
    pub message: String,
    pub code: u16,
}

/// Breed table plus a counter of requests served.
#[derive(Clone, Debug, Default)]
pub struct MockState {
    breeds: Arc<HashMap<String, Vec<String>>>,
    hits: Arc<AtomicUsize>,
}

impl MockState {
    pub fn new(breeds: HashMap<String, Vec<String>>) -> Self {
        Self {
            breeds: Arc::new(breeds),
            hits: Arc::default(),
        }
    }

    /// A small slice of the real dog.ceo catalogue.
    pub fn with_default_breeds() -> Self {
        let table = [
            ("hound", &["afghan", "basset", "blood", "english"][..]),
            ("bulldog", &["boston", "english", "french"][..]),
            ("pug", &[][..]),
            ("beagle", &[][..]),
        ];
        Self::new(
            table
                .into_iter()
                .map(|(breed, subs)| {
                    (breed.to_string(), subs.iter().map(|s| s.to_string()).collect())
                })
                .collect(),
        )
    }

    /// Number of breed lookups served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn app() -> Router {
    app_with_state(MockState::with_default_breeds())
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/api/breed/{breed}/list", get(list_sub_breeds))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::with_default_breeds()).await
}

pub async fn run_with_state(
    listener: TcpListener,
    state: MockState,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn list_sub_breeds(
    State(state): State<MockState>,
    Path(breed): Path<String>,
) -> Result<Json<SubBreeds>, (StatusCode, Json<ApiError>)> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(%breed, "Serving sub-breed lookup");

    // The real service matches breed names case-sensitively.
    match state.breeds.get(&breed) {
        Some(subs) => Ok(Json(SubBreeds {
            message: subs.clone(),
            status: "success".to_string(),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError {
                status: "error".to_string(),
                message: "Breed not found (master breed does not exist)".to_string(),
                code: 404,
            }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_breeds_serialize_like_dog_ceo() {
        let body = SubBreeds {
            message: vec!["afghan".to_string()],
            status: "success".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"][0], "afghan");
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn api_error_serializes_like_dog_ceo() {
        let body = ApiError {
            status: "error".to_string(),
            message: "Breed not found (master breed does not exist)".to_string(),
            code: 404,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], 404);
    }

    #[test]
    fn default_breeds_include_empty_and_non_empty_entries() {
        let state = MockState::with_default_breeds();
        assert_eq!(state.breeds["hound"].len(), 4);
        assert!(state.breeds["pug"].is_empty());
        assert_eq!(state.hits(), 0);
    }

    #[test]
    fn clones_share_the_hit_counter() {
        let state = MockState::default();
        let clone = state.clone();
        clone.hits.fetch_add(1, Ordering::SeqCst);
        assert_eq!(state.hits(), 1);
    }
}
