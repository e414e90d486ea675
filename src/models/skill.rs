use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Skill document as stored in the `skills` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Skill {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateSkillRequest {
    pub title: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SkillResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: skill.title,
            image: skill.image,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreateSkillResponse {
    pub message: String,
    #[serde(rename = "skillId")]
    pub skill_id: String,
}
