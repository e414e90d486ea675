use crate::{
    database::MongoDB,
    models::{CreateSkillRequest, Skill, SkillResponse},
    utils::error::ApiError,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

const COLLECTION: &str = "skills";

pub async fn create_skill(db: &MongoDB, request: CreateSkillRequest) -> Result<String, ApiError> {
    let collection = db.collection::<Skill>(COLLECTION);

    let result = collection
        .insert_one(Skill {
            id: None,
            title: request.title,
            image: request.image,
        })
        .await?;

    let id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| ApiError::Internal("Insert did not return an ObjectId".to_string()))?;

    Ok(id.to_hex())
}

pub async fn list_skills(db: &MongoDB) -> Result<Vec<SkillResponse>, ApiError> {
    let collection = db.collection::<Skill>(COLLECTION);

    let cursor = collection.find(doc! {}).await?;
    let skills: Vec<Skill> = cursor.try_collect().await?;

    Ok(skills.into_iter().map(SkillResponse::from).collect())
}
