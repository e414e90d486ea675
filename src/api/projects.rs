use crate::database::MongoDB;
use crate::models::{CreateProjectRequest, CreateProjectResponse, ProjectResponse};
use crate::services::project_service;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/v1/projects",
    tag = "Projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project added", body = CreateProjectResponse),
        (status = 500, description = "Store error")
    )
)]
pub async fn create_project(
    db: web::Data<MongoDB>,
    request: web::Json<CreateProjectRequest>,
) -> HttpResponse {
    log::info!("📁 POST /api/v1/projects");

    match project_service::create_project(&db, request.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(CreateProjectResponse {
            message: "Project added successfully".to_string(),
            projects_id: id,
        }),
        Err(e) => {
            log::warn!("❌ Failed to add project: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse]),
        (status = 500, description = "Store error")
    )
)]
pub async fn get_projects(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📁 GET /api/v1/projects");

    match project_service::list_projects(&db).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            log::warn!("❌ Failed to fetch projects: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    tag = "Projects",
    params(
        ("id" = String, Path, description = "Project id (hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn get_project(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📁 GET /api/v1/projects/{}", id);

    match project_service::get_project(&db, &id).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => {
            log::warn!("❌ Failed to fetch project {}: {}", id, e);
            e.error_response()
        }
    }
}
