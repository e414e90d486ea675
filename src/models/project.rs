use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Project document as stored in the `projects` collection.
/// Missing fields are stored absent, not as empty strings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_github: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live_site: Option<String>,
    pub client_github: Option<String>,
    pub server_github: Option<String>,
}

/// Wire representation: `_id` flattened to a hex string.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_github: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: project.title,
            description: project.description,
            image: project.image,
            live_site: project.live_site,
            client_github: project.client_github,
            server_github: project.server_github,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateProjectResponse {
    pub message: String,
    #[serde(rename = "projectsId")]
    pub projects_id: String,
}
