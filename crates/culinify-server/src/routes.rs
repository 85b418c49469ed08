//! Gateway handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use culinify_core::CoreError;
use culinify_protocol::{
    GenerateRecipeRequest, GenerateRecipeResponse, SaveRecipeRequest, SaveRecipeResponse,
};
use std::sync::Arc;

/// Gateway A: validate, forward the prompt upstream, relay the recipe.
pub async fn generate_recipe_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<Json<GenerateRecipeResponse>, ApiError> {
    match state.service.generate_recipe(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(CoreError::BadRequest(message)) => Err(ApiError::bad_request(&message)),
        Err(err) => Err(ApiError::internal(&err)),
    }
}

/// Gateway B: validate, insert one record, acknowledge.
pub async fn save_recipe_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveRecipeRequest>,
) -> Result<Json<SaveRecipeResponse>, ApiError> {
    match state.service.save_recipe(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(CoreError::BadRequest(message)) => Err(ApiError::bad_request(&message)),
        Err(CoreError::Store(err)) => Err(ApiError::store(&err)),
        Err(err) => Err(ApiError::internal(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_recipe_handler, save_recipe_handler};
    use crate::error::INTERNAL_SERVER_ERROR;
    use crate::state::AppState;
    use axum::Json;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use culinify_core::{FALLBACK_RECIPE, RecipeService};
    use culinify_protocol::{GenerateRecipeRequest, SaveRecipeRequest};
    use culinify_test_utils::{
        FailingGenerator, FailingStore, RecordingStore, StubGenerator,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    async fn response_parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = serde_json::from_slice(&bytes).expect("json body");
        (status, value)
    }

    fn state_with(
        generator: Arc<dyn culinify_core::RecipeGenerator>,
        store: Arc<dyn culinify_store::RecipeStore>,
    ) -> Arc<AppState> {
        Arc::new(AppState::with_service(RecipeService::new(generator, store)))
    }

    #[tokio::test]
    async fn generate_missing_fields_yields_400_with_error_body() {
        let state = state_with(
            Arc::new(StubGenerator::new("unused")),
            Arc::new(RecordingStore::default()),
        );
        let response = generate_recipe_handler(
            State(state),
            Json(GenerateRecipeRequest {
                prompt: String::new(),
                user_id: "u1".to_string(),
            }),
        )
        .await
        .into_response();
        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing prompt or userId");
    }

    #[tokio::test]
    async fn generate_success_relays_recipe() {
        let state = state_with(
            Arc::new(StubGenerator::new("Chicken Rice Bowl...")),
            Arc::new(RecordingStore::default()),
        );
        let response = generate_recipe_handler(
            State(state),
            Json(GenerateRecipeRequest {
                prompt: "chicken and rice".to_string(),
                user_id: "u1".to_string(),
            }),
        )
        .await
        .into_response();
        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recipe"], "Chicken Rice Bowl...");
    }

    #[tokio::test]
    async fn generate_upstream_failure_yields_generic_500() {
        let state = state_with(
            Arc::new(FailingGenerator::new("Webhook error")),
            Arc::new(RecordingStore::default()),
        );
        let response = generate_recipe_handler(
            State(state),
            Json(GenerateRecipeRequest {
                prompt: "chicken and rice".to_string(),
                user_id: "u1".to_string(),
            }),
        )
        .await
        .into_response();
        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn generate_fallback_text_reaches_the_client() {
        let state = state_with(
            Arc::new(StubGenerator::new(FALLBACK_RECIPE)),
            Arc::new(RecordingStore::default()),
        );
        let response = generate_recipe_handler(
            State(state),
            Json(GenerateRecipeRequest {
                prompt: "mystery".to_string(),
                user_id: "u1".to_string(),
            }),
        )
        .await
        .into_response();
        let (_, body) = response_parts(response).await;
        assert_eq!(body["recipe"], FALLBACK_RECIPE);
    }

    #[tokio::test]
    async fn save_missing_fields_yields_400() {
        let store = Arc::new(RecordingStore::default());
        let state = state_with(Arc::new(StubGenerator::new("unused")), store.clone());
        let response = save_recipe_handler(
            State(state),
            Json(SaveRecipeRequest {
                user_id: String::new(),
                recipe: "Chicken Rice Bowl".to_string(),
            }),
        )
        .await
        .into_response();
        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing userId or recipe");
        assert_eq!(store.rows().len(), 0);
    }

    #[tokio::test]
    async fn save_success_acknowledges_and_inserts_once() {
        let store = Arc::new(RecordingStore::default());
        let state = state_with(Arc::new(StubGenerator::new("unused")), store.clone());
        let response = save_recipe_handler(
            State(state),
            Json(SaveRecipeRequest {
                user_id: "u1".to_string(),
                recipe: "Chicken Rice Bowl...".to_string(),
            }),
        )
        .await
        .into_response();
        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Recipe saved successfully");
        assert_eq!(
            store.rows(),
            vec![("u1".to_string(), "Chicken Rice Bowl...".to_string())]
        );
    }

    #[tokio::test]
    async fn save_store_failure_relays_store_message() {
        let state = state_with(
            Arc::new(StubGenerator::new("unused")),
            Arc::new(FailingStore::new("permission denied for table recipes")),
        );
        let response = save_recipe_handler(
            State(state),
            Json(SaveRecipeRequest {
                user_id: "u1".to_string(),
                recipe: "Chicken Rice Bowl".to_string(),
            }),
        )
        .await
        .into_response();
        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "permission denied for table recipes");
    }
}
