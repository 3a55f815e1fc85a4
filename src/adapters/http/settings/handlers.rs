//! HTTP handlers for site settings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::AppState;
use crate::application::handlers::settings::UpdateSettingsCommand;

use super::dto::{SettingsResponse, UpdateSettingsRequest};

/// GET /api/settings - Public storefront settings, seeded on first read.
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let settings = state.get_settings.handle().await?;
    Ok(Json(SettingsResponse::from(&settings)))
}

/// PUT /api/settings - Partial update of the singleton. Admin only.
pub async fn update_settings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, ApiError> {
    let command = UpdateSettingsCommand {
        site_name: request.site_name,
        hero_image_desktop: request.hero_image_desktop,
        hero_image_mobile: request.hero_image_mobile,
        hero_title: request.hero_title,
        hero_subtitle: request.hero_subtitle,
        categories: request.categories,
        footer_text: request.footer_text,
        contact_email: request.contact_email,
        contact_phone: request.contact_phone,
        social_links: request.social_links.map(Into::into),
        email_notifications: request.email_notifications.map(Into::into),
    };

    let settings = state.update_settings.handle(command).await?;
    Ok(Json(SettingsResponse::from(&settings)))
}
