/// BuildEstate Seeder - administrator provisioning
///
/// Hashes the initial administrator credential and inserts the admin user.
/// Running it twice against a database with the unique email index fails
/// the second time.
use buildestate_core::constants::{
    ADMIN_BCRYPT_COST, ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD, LOG_TARGET_AUDIT,
};
use buildestate_core::error::EstateError;
use buildestate_core::models::{User, UserRole};
use buildestate_core::services::{UserStore, hash_password};
use buildestate_core::utils::logging::redact_email;
use buildestate_core::utils::validation::{validate_email_address, validate_not_empty};
use tracing::{error, info};

/// Process status for a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// Process status for any failure during connect, hash or save
pub const EXIT_FAILURE: u8 = 1;

/// The administrator to provision
#[derive(Clone)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cost: u32,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            cost: ADMIN_BCRYPT_COST,
        }
    }
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("cost", &self.cost)
            .finish()
    }
}

impl AdminSeed {
    /// Validates the seed and hashes its password into a storable user
    pub async fn to_user(&self) -> Result<User, EstateError> {
        validate_not_empty("name", &self.name)?;
        validate_email_address(&self.email)?;

        let password = hash_password(&self.password, self.cost).await?;

        Ok(User {
            name: self.name.clone(),
            email: self.email.clone(),
            password,
            role: UserRole::Admin,
        })
    }
}

/// Hashes the seed credential and persists the admin user
///
/// Returns the stored id. Nothing is cleaned up on failure.
pub async fn create_admin<S>(store: &S, seed: &AdminSeed) -> Result<String, EstateError>
where
    S: UserStore + ?Sized,
{
    let user = seed.to_user().await?;
    let id = store.insert_user(&user).await?;

    info!(
        target: LOG_TARGET_AUDIT,
        user_id = %id,
        email = %redact_email(&user.email),
        "Admin user created successfully"
    );
    Ok(id)
}

/// Runs the seeding procedure and maps its outcome to a process status
pub async fn seed_admin<S>(store: &S, seed: &AdminSeed) -> u8
where
    S: UserStore + ?Sized,
{
    match create_admin(store, seed).await {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to create admin user");
            EXIT_FAILURE
        }
    }
}
