use jsonwebtoken::{DecodingKey, Validation};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::{sync::Arc, time::Duration};

pub type AppState = Arc<State>;

/// Long-lived, explicitly owned process state. The database pool is
/// acquired once at startup and handed to every handler by reference
/// through axum's state extraction.
pub struct State {
    pub db: DatabaseConnection,
    pub jwt_decoding_key: DecodingKey,
    pub jwt_validation: Validation,
}

impl State {
    pub async fn new(database_url: &str, jwt_secret: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(10)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self::with_connection(db, jwt_secret))
    }

    /// Build state around an existing connection. Used by `new` and by
    /// tests that bring their own database handle.
    pub fn with_connection(db: DatabaseConnection, jwt_secret: &str) -> Self {
        let jwt_decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
        let jwt_validation = Validation::new(jsonwebtoken::Algorithm::HS256);

        Self {
            db,
            jwt_decoding_key,
            jwt_validation,
        }
    }
}
