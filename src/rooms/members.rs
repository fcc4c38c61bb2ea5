use std::sync::Arc;

use axum::{debug_handler, extract::{Path, State}, Json};
use serde::Serialize;

use crate::{store::ChatState, AppResult};

#[derive(Serialize)]
pub(crate) struct MembersResponse {
    success: bool,
    members: Vec<String>,
    member_count: usize,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn get_members(
    Path(room_id): Path<String>,
    State(chat): State<Arc<ChatState>>,
) -> AppResult<Json<MembersResponse>> {
    let members = chat.members(&room_id).await?;
    let member_count = members.len();

    Ok(Json(MembersResponse {
        success: true,
        members,
        member_count,
    }))
}
