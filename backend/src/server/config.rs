//! Service settings loaded via OrthoConfig.
//!
//! Each binary reads CLI flags, environment variables and an optional config
//! file; every field has a default so an empty environment loads. Addresses
//! and URLs are kept as raw strings and parsed by the accessors so a bad value
//! surfaces as a [`SettingsError`] at startup.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_PRODUCTS_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_USERS_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_USERS_SERVICE_URL: &str = "http://localhost:8081/api/users/";
const DEFAULT_USERS_SERVICE_TIMEOUT_MS: u64 = 5_000;

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid users service URL `{value}`: {source}")]
    InvalidUsersServiceUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("users service URL `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("users service timeout must be greater than zero")]
    ZeroTimeout,
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr, SettingsError> {
    value
        .parse()
        .map_err(|source| SettingsError::InvalidBindAddr {
            value: value.to_owned(),
            source,
        })
}

fn default_products_bind_addr() -> String {
    DEFAULT_PRODUCTS_BIND_ADDR.to_owned()
}

fn default_users_bind_addr() -> String {
    DEFAULT_USERS_BIND_ADDR.to_owned()
}

fn default_users_service_url() -> String {
    DEFAULT_USERS_SERVICE_URL.to_owned()
}

/// Settings for the products service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCTS_SERVICE")]
pub struct ProductsServiceSettings {
    /// Socket address to listen on.
    #[ortho_config(default = default_products_bind_addr())]
    pub bind_addr: String,
    /// Base URL of the users collection, e.g. `http://users:8081/api/users/`.
    #[ortho_config(default = default_users_service_url())]
    pub users_service_url: String,
    /// Per-request timeout for users service lookups, in milliseconds.
    #[ortho_config(default = DEFAULT_USERS_SERVICE_TIMEOUT_MS)]
    pub users_service_timeout_ms: u64,
}

impl ProductsServiceSettings {
    /// Return the listen address, `0.0.0.0:8080` unless overridden.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_bind_addr(&self.bind_addr)
    }

    /// Return the users service base URL.
    pub fn users_service_url(&self) -> Result<Url, SettingsError> {
        let raw = self.users_service_url.as_str();
        let url = Url::parse(raw).map_err(|source| SettingsError::InvalidUsersServiceUrl {
            value: raw.to_owned(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::UnsupportedScheme(raw.to_owned())),
        }
    }

    /// Return the users service request timeout.
    pub fn users_service_timeout(&self) -> Result<Duration, SettingsError> {
        match self.users_service_timeout_ms {
            0 => Err(SettingsError::ZeroTimeout),
            millis => Ok(Duration::from_millis(millis)),
        }
    }
}

/// Settings for the users service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_SERVICE")]
pub struct UsersServiceSettings {
    /// Socket address to listen on.
    #[ortho_config(default = default_users_bind_addr())]
    pub bind_addr: String,
}

impl UsersServiceSettings {
    /// Return the listen address, `0.0.0.0:8081` unless overridden.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_bind_addr(&self.bind_addr)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const PRODUCTS_VARS: [&str; 3] = [
        "PRODUCTS_SERVICE_BIND_ADDR",
        "PRODUCTS_SERVICE_USERS_SERVICE_URL",
        "PRODUCTS_SERVICE_USERS_SERVICE_TIMEOUT_MS",
    ];

    fn products_settings() -> ProductsServiceSettings {
        ProductsServiceSettings::load_from_iter([OsString::from("products-service")])
            .expect("config should load")
    }

    #[rstest]
    fn products_defaults_are_used_when_missing() {
        let _guard = lock_env(PRODUCTS_VARS.map(|name| (name, None::<String>)));

        let settings = products_settings();

        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert_eq!(
            settings.users_service_url().expect("default URL").as_str(),
            DEFAULT_USERS_SERVICE_URL
        );
        assert_eq!(
            settings.users_service_timeout().expect("default timeout"),
            Duration::from_secs(5)
        );
    }

    #[rstest]
    fn products_environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PRODUCTS_SERVICE_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "PRODUCTS_SERVICE_USERS_SERVICE_URL",
                Some("http://users.internal:8081/api/users".to_owned()),
            ),
            (
                "PRODUCTS_SERVICE_USERS_SERVICE_TIMEOUT_MS",
                Some("250".to_owned()),
            ),
        ]);

        let settings = products_settings();

        assert_eq!(
            settings.bind_addr().expect("address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal address")
        );
        assert_eq!(
            settings.users_service_url().expect("URL").host_str(),
            Some("users.internal")
        );
        assert_eq!(
            settings.users_service_timeout().expect("timeout"),
            Duration::from_millis(250)
        );
    }

    #[rstest]
    #[case::bad_addr("PRODUCTS_SERVICE_BIND_ADDR", "not-an-address")]
    #[case::bad_url("PRODUCTS_SERVICE_USERS_SERVICE_URL", "::nope")]
    #[case::bad_scheme("PRODUCTS_SERVICE_USERS_SERVICE_URL", "ftp://users/api/users")]
    #[case::zero_timeout("PRODUCTS_SERVICE_USERS_SERVICE_TIMEOUT_MS", "0")]
    fn invalid_values_are_startup_errors(#[case] name: &str, #[case] value: &str) {
        let _guard = lock_env(
            PRODUCTS_VARS.map(|var| (var, (var == name).then(|| value.to_owned()))),
        );

        let settings = products_settings();
        let outcome = (
            settings.bind_addr().err(),
            settings.users_service_url().err(),
            settings.users_service_timeout().err(),
        );

        match name {
            "PRODUCTS_SERVICE_BIND_ADDR" => assert!(matches!(
                outcome.0,
                Some(SettingsError::InvalidBindAddr { .. })
            )),
            "PRODUCTS_SERVICE_USERS_SERVICE_URL" => assert!(matches!(
                outcome.1,
                Some(
                    SettingsError::InvalidUsersServiceUrl { .. }
                        | SettingsError::UnsupportedScheme(_)
                )
            )),
            _ => assert!(matches!(outcome.2, Some(SettingsError::ZeroTimeout))),
        }
    }

    #[rstest]
    fn users_bind_addr_defaults_and_overrides() {
        {
            let _guard = lock_env([("USERS_SERVICE_BIND_ADDR", None::<String>)]);
            let settings =
                UsersServiceSettings::load_from_iter([OsString::from("users-service")])
                    .expect("config should load");
            assert_eq!(
                settings.bind_addr().expect("default address").port(),
                8081
            );
        }

        let _guard = lock_env([("USERS_SERVICE_BIND_ADDR", Some("127.0.0.1:0".to_owned()))]);
        let settings = UsersServiceSettings::load_from_iter([OsString::from("users-service")])
            .expect("config should load");
        assert_eq!(settings.bind_addr().expect("address").port(), 0);
    }
}
