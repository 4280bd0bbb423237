//! Region and credential resolution for the metrics client.
//!
//! Values come from up to three layers, most specific first: explicitly
//! given (command line), configured (plugin environment or settings file)
//! and the standard AWS environment variables. Whatever no layer provides is
//! left to the ambient provider chain of the SDK (shared profile files,
//! instance or container metadata).

use std::fmt;

/// Optional region and credential values from a single layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOverrides {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl ClientOverrides {
    /// Snapshot of the standard AWS environment variables.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self {
            region: var("AWS_REGION").or_else(|| var("AWS_DEFAULT_REGION")),
            access_key_id: var("AWS_ACCESS_KEY_ID"),
            secret_access_key: var("AWS_SECRET_ACCESS_KEY"),
        }
    }

    fn region(&self) -> Option<&str> {
        non_blank(&self.region)
    }

    /// Static credentials are only usable when both halves are present.
    fn credentials(&self) -> Option<CredentialSource> {
        match (non_blank(&self.access_key_id), non_blank(&self.secret_access_key)) {
            (Some(access_key_id), Some(secret_access_key)) => Some(CredentialSource::Static {
                access_key_id: access_key_id.to_string(),
                secret_access_key: secret_access_key.to_string(),
            }),
            _ => None,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Static {
        access_key_id: String,
        secret_access_key: String,
    },
    /// Resolved by the SDK provider chain
    Ambient,
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Static { access_key_id, .. } => f
                .debug_struct("Static")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
            CredentialSource::Ambient => write!(f, "Ambient"),
        }
    }
}

/// Settings the metrics client is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// `None` defers to the ambient region chain
    pub region: Option<String>,
    pub credentials: CredentialSource,
}

impl ClientSettings {
    /// Picks the region and the credentials independently from the first
    /// layer that provides them.
    pub fn resolve(
        explicit: &ClientOverrides,
        configured: &ClientOverrides,
        environment: &ClientOverrides,
    ) -> Self {
        let layers = [explicit, configured, environment];

        let region = layers
            .into_iter()
            .find_map(|layer| layer.region())
            .map(str::to_string);

        let credentials = layers
            .into_iter()
            .find_map(|layer| layer.credentials())
            .unwrap_or(CredentialSource::Ambient);

        Self {
            region,
            credentials,
        }
    }
}
