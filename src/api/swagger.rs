use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Service API",
        version = "1.0.0",
        description = "User registration/login with JWT bearer tokens, plus project and skill collections backed by MongoDB."
    ),
    paths(
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::projects::create_project,
        crate::api::projects::get_projects,
        crate::api::projects::get_project,
        crate::api::skills::create_skill,
        crate::api::skills::get_skills,
        crate::api::health::server_status,
    ),
    components(
        schemas(
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::RegisterResponse,
            crate::services::auth_service::LoginResponse,
            crate::models::CreateProjectRequest,
            crate::models::CreateProjectResponse,
            crate::models::ProjectResponse,
            crate::models::CreateSkillRequest,
            crate::models::CreateSkillResponse,
            crate::models::SkillResponse,
            crate::api::health::ServerStatus,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login. Login returns a signed JWT; no session state is kept server-side."),
        (name = "Projects", description = "Portfolio project collection: create, list, fetch by id."),
        (name = "Skills", description = "Skill collection: create and list."),
        (name = "Status", description = "Unauthenticated liveness probe at the root path."),
    )
)]
pub struct ApiDoc;
