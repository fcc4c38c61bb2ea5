mod create;
mod join;
mod members;
mod msg;

use axum::{routing::{get, post}, Router};
use serde::Deserialize;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create_invite", post(create::create_invite))
        .route("/room/{room_id}/join", post(join::join_room))
        .route("/room/{room_id}/message", post(msg::send_message))
        .route("/room/{room_id}/messages", get(msg::get_messages))
        .route("/room/{room_id}/members", get(members::get_members))
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsernameBody {
    #[serde(default = "default_username")]
    pub(crate) username: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SendMessageBody {
    #[serde(default = "default_username")]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) message: String,
}

fn default_username() -> String {
    "Player".to_owned()
}
