use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppJson;
use crate::navigation::{navigate, AppContext, NavAction};

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    #[serde(default)]
    pub context: AppContext,
    pub action: NavAction,
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub context: AppContext,
    pub show_nav_bar: bool,
    pub chat_available: bool,
}

/// POST /api/v1/navigation
pub async fn handle_navigate(AppJson(req): AppJson<NavigateRequest>) -> Json<NavigateResponse> {
    let context = navigate(req.context, req.action);
    Json(NavigateResponse {
        show_nav_bar: context.page.has_nav_bar(),
        chat_available: context.chat_available(),
        context,
    })
}
