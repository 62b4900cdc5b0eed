/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// SMTP Relay
// ============================================================================
/// Host of the live SMTP relay
pub const SMTP_RELAY_HOST: &str = "smtp-relay.brevo.com";

/// Submission port of the live SMTP relay (STARTTLS)
pub const SMTP_RELAY_PORT: u16 = 587;

/// Message id returned by the dummy transport for every send
pub const DUMMY_MESSAGE_ID: &str = "dummy-message-id";

/// Message reported by a passing email health check
pub const EMAIL_HEALTHY_MESSAGE: &str = "Email service is operational";

// ============================================================================
// Environment Variables
// ============================================================================

/// SMTP username; absent or empty selects the dummy transport
pub const ENV_SMTP_USER: &str = "SMTP_USER";

/// SMTP password; absent or empty selects the dummy transport
pub const ENV_SMTP_PASS: &str = "SMTP_PASS";

/// Set to exactly "true" to force the dummy transport
pub const ENV_FORCE_DUMMY: &str = "FORCE_DUMMY";

/// MongoDB connection string used by the admin seeder
pub const ENV_MONGO_URI: &str = "MONGO_URI";

// ============================================================================
// Database
// ============================================================================

/// Collection holding application users
pub const USERS_COLLECTION: &str = "users";

/// Database used when the connection string names none
pub const DEFAULT_DATABASE: &str = "test";

/// MongoDB server error code for unique index violations
pub const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;

// ============================================================================
// Admin Seed
// ============================================================================

/// bcrypt work factor for seeded credentials
pub const ADMIN_BCRYPT_COST: u32 = 10;

/// Display name of the seeded administrator
pub const ADMIN_NAME: &str = "Admin";

/// Login email of the seeded administrator
pub const ADMIN_EMAIL: &str = "admin@buildestate.com";

/// Initial password of the seeded administrator
pub const ADMIN_PASSWORD: &str = "Admin@123";

// ============================================================================
// Logging
// ============================================================================

/// Log target for mail delivery events
pub const LOG_TARGET_MAIL: &str = "mail";

/// Log target for audit events
pub const LOG_TARGET_AUDIT: &str = "audit";

// ============================================================================
// Testing Constants
// ============================================================================
