use std::env;

use chrono::NaiveTime;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Tunables of the venue search engine
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius used when the caller is not searching inside a city
    pub radius_not_in_city_meters: f64,
    /// Radius used by the "nearest venues" listing (empty name query)
    pub nearest_radius_meters: f64,
    /// Clock times strictly after this count as the previous night
    pub day_cutoff: NaiveTime,
    /// Clock time a venue must be open at to show up in "tonight" results
    pub tonight_threshold: NaiveTime,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            search: SearchConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Venue Finder API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Geo-temporal venue search and ranking".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl SearchConfig {
    const DEFAULT_RADIUS_NOT_IN_CITY_METERS: f64 = 20_000.0;
    const DEFAULT_NEAREST_RADIUS_METERS: f64 = 5_000.0;
    const DEFAULT_DAY_CUTOFF: &'static str = "00:00";
    const DEFAULT_TONIGHT_THRESHOLD: &'static str = "23:00";

    pub fn from_env() -> Result<Self, String> {
        let radius_not_in_city_meters = parse_radius(
            "SEARCH_RADIUS_NOT_IN_CITY_METERS",
            &env::var("SEARCH_RADIUS_NOT_IN_CITY_METERS")
                .unwrap_or_else(|_| Self::DEFAULT_RADIUS_NOT_IN_CITY_METERS.to_string()),
        )?;

        let nearest_radius_meters = parse_radius(
            "SEARCH_NEAREST_RADIUS_METERS",
            &env::var("SEARCH_NEAREST_RADIUS_METERS")
                .unwrap_or_else(|_| Self::DEFAULT_NEAREST_RADIUS_METERS.to_string()),
        )?;

        let day_cutoff = parse_clock_time(
            "SEARCH_DAY_CUTOFF",
            &env::var("SEARCH_DAY_CUTOFF").unwrap_or_else(|_| Self::DEFAULT_DAY_CUTOFF.to_string()),
        )?;

        let tonight_threshold = parse_clock_time(
            "SEARCH_TONIGHT_THRESHOLD",
            &env::var("SEARCH_TONIGHT_THRESHOLD")
                .unwrap_or_else(|_| Self::DEFAULT_TONIGHT_THRESHOLD.to_string()),
        )?;

        Ok(Self {
            radius_not_in_city_meters,
            nearest_radius_meters,
            day_cutoff,
            tonight_threshold,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_not_in_city_meters: Self::DEFAULT_RADIUS_NOT_IN_CITY_METERS,
            nearest_radius_meters: Self::DEFAULT_NEAREST_RADIUS_METERS,
            day_cutoff: NaiveTime::MIN,
            tonight_threshold: NaiveTime::from_hms_opt(23, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Parse a radius in meters; must be finite and positive
fn parse_radius(key: &str, value: &str) -> Result<f64, String> {
    let meters = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{} must be a valid number", key))?;

    if !meters.is_finite() || meters <= 0.0 {
        return Err(format!("{} must be a finite positive number", key));
    }

    Ok(meters)
}

/// Parse an "HH:MM" clock time from an environment value
fn parse_clock_time(key: &str, value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| format!("{} must be a clock time in HH:MM format", key))
}
