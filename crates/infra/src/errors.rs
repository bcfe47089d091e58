//! Conversions from external infrastructure errors into domain errors.

use hubcard_domain::HubcardError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub HubcardError);

impl From<InfraError> for HubcardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<HubcardError> for InfraError {
    fn from(value: HubcardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoHubcardError {
    fn into_hubcard(self) -> HubcardError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → HubcardError */
/* -------------------------------------------------------------------------- */

impl IntoHubcardError for SqlError {
    fn into_hubcard(self) -> HubcardError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => HubcardError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        HubcardError::Database("database is locked".into())
                    }
                    ErrorCode::ConstraintViolation => {
                        HubcardError::Database(format!("constraint violation: {message}"))
                    }
                    _ => HubcardError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => HubcardError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                HubcardError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                HubcardError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => HubcardError::Database("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidPath(path) => {
                HubcardError::Database(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => HubcardError::Database("invalid SQL query".into()),
            other => HubcardError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_hubcard())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → HubcardError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(HubcardError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → HubcardError */
/* -------------------------------------------------------------------------- */

impl IntoHubcardError for HttpError {
    fn into_hubcard(self) -> HubcardError {
        if self.is_timeout() {
            return HubcardError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return HubcardError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return HubcardError::Network(format!("failed to decode HTTP response: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => HubcardError::NotFound(message),
                403 | 429 => HubcardError::RateLimited(message),
                _ => HubcardError::Network(message),
            };
        }

        HubcardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_hubcard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → HubcardError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(HubcardError::Network(format!("malformed JSON payload: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::Client;
    use rusqlite::ffi::{Error as FfiError, ErrorCode};
    use rusqlite::Error as SqlError;
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        let mapped: HubcardError = InfraError::from(err).into();
        match mapped {
            HubcardError::Database(msg) => {
                assert!(msg.contains("busy") || msg.contains("locked"));
            }
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[test]
    fn sqlite_no_rows_maps_to_not_found() {
        let mapped: HubcardError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(mapped, HubcardError::NotFound(_)));
    }

    #[test]
    fn json_error_maps_to_network_error() {
        let err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let mapped: HubcardError = InfraError::from(err).into();
        match mapped {
            HubcardError::Network(msg) => assert!(msg.contains("malformed JSON")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[test]
    fn http_status_404_maps_to_not_found() {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(404))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

            let mapped: HubcardError = InfraError::from(error).into();
            match mapped {
                HubcardError::NotFound(msg) => assert!(msg.contains("404")),
                other => panic!("expected not found, got {:?}", other),
            }
        });
    }

    #[test]
    fn http_status_403_maps_to_rate_limited() {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(403))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

            let mapped: HubcardError = InfraError::from(error).into();
            match mapped {
                HubcardError::RateLimited(msg) => assert!(msg.contains("403")),
                other => panic!("expected rate limited, got {:?}", other),
            }
        });
    }
}
