use crate::constants::{DEFAULT_DATABASE, LOG_TARGET_AUDIT, USERS_COLLECTION};
use crate::error::EstateError;
use crate::models::User;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use std::collections::HashMap;
use tracing::{debug, info};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user
    ///
    /// Returns the stored document id. A second user with the same email
    /// fails with `EstateError::DuplicateUser`.
    async fn insert_user(&self, user: &User) -> Result<String, EstateError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, EstateError>;
}

/// MongoDB-backed user store
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// Connects, pings the server, and makes sure `email` is uniquely indexed
    ///
    /// The database named in the URI is used, `test` when it names none.
    pub async fn connect(uri: &str) -> Result<Self, EstateError> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        database.run_command(doc! { "ping": 1 }).await?;
        info!(database = %database.name(), "MongoDB connected");

        let store = Self {
            collection: database.collection::<User>(USERS_COLLECTION),
        };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<(), EstateError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        debug!(collection = USERS_COLLECTION, "Ensured unique email index");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_user(&self, user: &User) -> Result<String, EstateError> {
        let result = self.collection.insert_one(user).await?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };

        info!(
            target: LOG_TARGET_AUDIT,
            user_id = %id,
            role = ?user.role,
            "Inserted user"
        );
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, EstateError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }
}

/// In-memory user store for testing
///
/// Enforces the same unique-email rule as the MongoDB index.
pub struct InMemoryUserStore {
    users: tokio::sync::Mutex<HashMap<String, (String, User)>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: tokio::sync::Mutex::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_user(&self, user: &User) -> Result<String, EstateError> {
        let mut users = self.users.lock().await;

        if users.contains_key(&user.email) {
            return Err(EstateError::DuplicateUser(format!(
                "E11000 duplicate key error: email {}",
                user.email
            )));
        }

        let id = uuid::Uuid::new_v4().simple().to_string();
        users.insert(user.email.clone(), (id.clone(), user.clone()));
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, EstateError> {
        let users = self.users.lock().await;
        Ok(users.get(email).map(|(_, user)| user.clone()))
    }
}
