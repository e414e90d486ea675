use crate::database::MongoDB;
use crate::models::{CreateSkillRequest, CreateSkillResponse, SkillResponse};
use crate::services::skill_service;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/v1/skills",
    tag = "Skills",
    request_body = CreateSkillRequest,
    responses(
        (status = 201, description = "Skill added", body = CreateSkillResponse),
        (status = 500, description = "Store error")
    )
)]
pub async fn create_skill(
    db: web::Data<MongoDB>,
    request: web::Json<CreateSkillRequest>,
) -> HttpResponse {
    log::info!("🛠️ POST /api/v1/skills");

    match skill_service::create_skill(&db, request.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(CreateSkillResponse {
            message: "Skill added successfully".to_string(),
            skill_id: id,
        }),
        Err(e) => {
            log::warn!("❌ Failed to add skill: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/skills",
    tag = "Skills",
    responses(
        (status = 200, description = "All skills", body = [SkillResponse]),
        (status = 500, description = "Store error")
    )
)]
pub async fn get_skills(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("🛠️ GET /api/v1/skills");

    match skill_service::list_skills(&db).await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => {
            log::warn!("❌ Failed to fetch skills: {}", e);
            e.error_response()
        }
    }
}
