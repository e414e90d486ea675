pub mod auth_service;
pub mod project_service;
pub mod skill_service;
