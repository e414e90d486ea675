use crate::{
    database::MongoDB,
    models::{CreateProjectRequest, Project, ProjectResponse},
    utils::error::ApiError,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

const COLLECTION: &str = "projects";

fn parse_project_id(id: &str) -> Result<ObjectId, ApiError> {
    // A malformed id cannot match any document, so it reads as not-found
    // rather than a server error.
    ObjectId::parse_str(id).map_err(|_| ApiError::NotFound("Project".to_string()))
}

pub async fn create_project(db: &MongoDB, request: CreateProjectRequest) -> Result<String, ApiError> {
    let collection = db.collection::<Project>(COLLECTION);

    let result = collection
        .insert_one(Project {
            id: None,
            title: request.title,
            description: request.description,
            image: request.image,
            live_site: request.live_site,
            client_github: request.client_github,
            server_github: request.server_github,
        })
        .await?;

    let id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| ApiError::Internal("Insert did not return an ObjectId".to_string()))?;

    Ok(id.to_hex())
}

pub async fn list_projects(db: &MongoDB) -> Result<Vec<ProjectResponse>, ApiError> {
    let collection = db.collection::<Project>(COLLECTION);

    let cursor = collection.find(doc! {}).await?;
    let projects: Vec<Project> = cursor.try_collect().await?;

    Ok(projects.into_iter().map(ProjectResponse::from).collect())
}

pub async fn get_project(db: &MongoDB, id: &str) -> Result<ProjectResponse, ApiError> {
    let object_id = parse_project_id(id)?;
    let collection = db.collection::<Project>(COLLECTION);

    let project = collection
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| ApiError::NotFound("Project".to_string()))?;

    Ok(ProjectResponse::from(project))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex_id_parses() {
        let oid = ObjectId::new();
        assert_eq!(parse_project_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn test_malformed_id_maps_to_not_found() {
        for bad in ["nope", "", "zzzzzzzzzzzzzzzzzzzzzzzz", "656f"] {
            assert_eq!(
                parse_project_id(bad).unwrap_err(),
                ApiError::NotFound("Project".to_string())
            );
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_create_then_fetch_returns_identical_fields() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/portfolio_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let id = create_project(
            &db,
            CreateProjectRequest {
                title: Some("A".to_string()),
                description: Some("B".to_string()),
                image: Some("".to_string()),
                live_site: Some("".to_string()),
                client_github: Some("".to_string()),
                server_github: Some("".to_string()),
            },
        )
        .await
        .unwrap();

        let fetched = get_project(&db, &id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.title.as_deref(), Some("A"));
        assert_eq!(fetched.description.as_deref(), Some("B"));
        assert_eq!(fetched.live_site.as_deref(), Some(""));

        let listed = list_projects(&db).await.unwrap();
        assert!(listed.iter().any(|p| p.id == id));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_unknown_id_is_not_found() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/portfolio_test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let missing = ObjectId::new().to_hex();
        assert_eq!(
            get_project(&db, &missing).await.unwrap_err(),
            ApiError::NotFound("Project".to_string())
        );
    }
}
