use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Shared MongoDB handle, cloned into every actix worker. The driver's
/// `Client` is internally pooled and safe for concurrent use, so this is the
/// only piece of cross-request state in the process.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Database name from the URI path, falling back to "portfolio"
        let db_name = uri
            .split('/')
            .next_back()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("portfolio");

        let db = client.database(db_name);

        // Fail fast at startup if the server is unreachable
        db.list_collection_names().await?;

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Drains the connection pool. Called once, after the HTTP server has
    /// stopped accepting requests.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/portfolio".to_string());
        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }

    #[test]
    fn test_db_name_defaults_when_uri_has_no_path() {
        // Mirrors the parsing in `new` without needing a live server.
        let extract = |uri: &str| {
            uri.split('/')
                .next_back()
                .and_then(|s| s.split('?').next())
                .filter(|s: &&str| !s.is_empty())
                .unwrap_or("portfolio")
                .to_string()
        };

        assert_eq!(extract("mongodb://localhost:27017/myapp"), "myapp");
        assert_eq!(extract("mongodb://localhost:27017/myapp?retryWrites=true"), "myapp");
        assert_eq!(extract("mongodb://localhost:27017/"), "portfolio");
    }
}
