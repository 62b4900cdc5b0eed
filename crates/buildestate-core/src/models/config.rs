/// Configuration models
use super::TransportMode;
use std::fmt;

/// Mail transport settings, read once at startup
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MailConfig {
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub force_dummy: bool,
}

impl MailConfig {
    /// Picks the transport variant for these settings
    ///
    /// Dummy when either credential is missing or dummy mode is forced.
    pub fn transport_mode(&self) -> TransportMode {
        match (&self.smtp_user, &self.smtp_pass) {
            (Some(_), Some(_)) if !self.force_dummy => TransportMode::Live,
            _ => TransportMode::Dummy,
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &self.smtp_pass.as_ref().map(|_| "***"))
            .field("force_dummy", &self.force_dummy)
            .finish()
    }
}

/// Admin seeder settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederConfig {
    pub mongo_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user: Option<&str>, pass: Option<&str>, force_dummy: bool) -> MailConfig {
        MailConfig {
            smtp_user: user.map(String::from),
            smtp_pass: pass.map(String::from),
            force_dummy,
        }
    }

    #[test]
    fn test_missing_credentials_select_dummy() {
        for (user, pass) in [
            (None, None),
            (Some("user"), None),
            (None, Some("secret")),
        ] {
            assert_eq!(
                config(user, pass, false).transport_mode(),
                TransportMode::Dummy
            );
            assert_eq!(config(user, pass, true).transport_mode(), TransportMode::Dummy);
        }
    }

    #[test]
    fn test_force_dummy_overrides_credentials() {
        assert_eq!(
            config(Some("user"), Some("secret"), true).transport_mode(),
            TransportMode::Dummy
        );
    }

    #[test]
    fn test_full_credentials_select_live() {
        assert_eq!(
            config(Some("user"), Some("secret"), false).transport_mode(),
            TransportMode::Live
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", config(Some("user"), Some("secret"), false));
        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));
    }
}
