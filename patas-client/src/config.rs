use shared::geo::GeoPoint;

/// Client configuration for every hosted service the app talks to
///
/// # Environment variables
///
/// All settings can be overridden via environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PATAS_STORE_ENDPOINT | ws://localhost:8000 | Record store endpoint |
/// | PATAS_STORE_NAMESPACE | patas | Record store namespace |
/// | PATAS_STORE_DATABASE | ngo | Record store database |
/// | PATAS_STORE_USERNAME | (empty) | Record store user, skipped when empty |
/// | PATAS_STORE_PASSWORD | (empty) | Record store password |
/// | PATAS_AUTH_URL | http://localhost:9098 | Authentication service base URL |
/// | PATAS_STORAGE_BUCKET | patas-media | Object storage bucket |
/// | PATAS_STORAGE_ENDPOINT | (empty) | S3 endpoint override, AWS default when empty |
/// | PATAS_STORAGE_REGION | us-east-1 | Object storage region |
/// | PATAS_STORAGE_PUBLIC_URL | http://localhost:9000/patas-media | Public base URL for stored objects |
/// | PATAS_DEFAULT_LAT | -15.7942 | Map fallback center latitude (Brasília) |
/// | PATAS_DEFAULT_LON | -47.8822 | Map fallback center longitude |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// PATAS_STORE_ENDPOINT=wss://store.example.org PATAS_STORAGE_BUCKET=prod-media cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Record store endpoint (ws:// or wss://)
    pub store_endpoint: String,
    /// Record store namespace
    pub store_namespace: String,
    /// Record store database
    pub store_database: String,
    /// Record store username, empty for anonymous connections
    pub store_username: String,
    /// Record store password
    pub store_password: String,
    /// Authentication service base URL
    pub auth_url: String,
    /// Object storage bucket
    pub storage_bucket: String,
    /// S3-compatible endpoint override, empty for the AWS default
    pub storage_endpoint: String,
    /// Object storage region
    pub storage_region: String,
    /// Public base URL under which stored objects are served
    pub storage_public_url: String,
    /// Map center used when a record has no coordinate yet
    pub default_latitude: f64,
    /// Map center used when a record has no coordinate yet
    pub default_longitude: f64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            store_endpoint: std::env::var("PATAS_STORE_ENDPOINT")
                .unwrap_or_else(|_| "ws://localhost:8000".into()),
            store_namespace: std::env::var("PATAS_STORE_NAMESPACE")
                .unwrap_or_else(|_| "patas".into()),
            store_database: std::env::var("PATAS_STORE_DATABASE").unwrap_or_else(|_| "ngo".into()),
            store_username: std::env::var("PATAS_STORE_USERNAME").unwrap_or_default(),
            store_password: std::env::var("PATAS_STORE_PASSWORD").unwrap_or_default(),
            auth_url: std::env::var("PATAS_AUTH_URL")
                .unwrap_or_else(|_| "http://localhost:9098".into()),
            storage_bucket: std::env::var("PATAS_STORAGE_BUCKET")
                .unwrap_or_else(|_| "patas-media".into()),
            storage_endpoint: std::env::var("PATAS_STORAGE_ENDPOINT").unwrap_or_default(),
            storage_region: std::env::var("PATAS_STORAGE_REGION")
                .unwrap_or_else(|_| "us-east-1".into()),
            storage_public_url: std::env::var("PATAS_STORAGE_PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:9000/patas-media".into()),
            default_latitude: std::env::var("PATAS_DEFAULT_LAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(-15.7942),
            default_longitude: std::env::var("PATAS_DEFAULT_LON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(-47.8822),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Load a `.env` file if present, then read the environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Record store credentials, `None` when the username is empty
    pub fn store_credentials(&self) -> Option<(&str, &str)> {
        if self.store_username.is_empty() {
            None
        } else {
            Some((&self.store_username, &self.store_password))
        }
    }

    /// Map center shown before a record has a coordinate
    pub fn default_center(&self) -> GeoPoint {
        GeoPoint::new(self.default_latitude, self.default_longitude)
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
