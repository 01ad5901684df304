use axum::Json;
use axum::extract::{Path, State};

use userdir_domain::UserId;

use crate::dto::UserResponse;
use crate::error::ApiResult;
use crate::state::AppState;


pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_directory_service
        .all_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_directory_service
        .user_by_id(UserId::from_i64(user_id))
        .await?;

    Ok(Json(UserResponse::from(user)))
}
