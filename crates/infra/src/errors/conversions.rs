//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use workbridge_domain::WorkbridgeError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WorkbridgeError);

impl From<InfraError> for WorkbridgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WorkbridgeError> for InfraError {
    fn from(value: WorkbridgeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoWorkbridgeError {
    fn into_workbridge(self) -> WorkbridgeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → WorkbridgeError */
/* -------------------------------------------------------------------------- */

impl IntoWorkbridgeError for HttpError {
    fn into_workbridge(self) -> WorkbridgeError {
        if self.is_timeout() {
            return WorkbridgeError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return WorkbridgeError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => WorkbridgeError::Auth(message),
                404 => WorkbridgeError::NotFound(message),
                400..=499 => WorkbridgeError::InvalidInput(message),
                _ => WorkbridgeError::Network(message),
            };
        }

        WorkbridgeError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_workbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → WorkbridgeError */
/* -------------------------------------------------------------------------- */

impl IntoWorkbridgeError for KeyringError {
    fn into_workbridge(self) -> WorkbridgeError {
        use KeyringError::{Ambiguous, BadEncoding, NoEntry, NoStorageAccess, PlatformFailure};

        let description = self.to_string();

        match self {
            NoEntry => WorkbridgeError::NotFound("keychain entry not found".into()),
            BadEncoding(_) => {
                WorkbridgeError::Auth("credential in keychain is not valid UTF-8".into())
            }
            Ambiguous(entries) => WorkbridgeError::Auth(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => WorkbridgeError::Auth(format!("keychain platform error: {err}")),
            NoStorageAccess(err) => {
                WorkbridgeError::Auth(format!("unable to access secure storage: {err}"))
            }
            _ => WorkbridgeError::Auth(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_workbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn keyring_no_entry_maps_to_not_found() {
        let err = KeyringError::NoEntry;
        let mapped: WorkbridgeError = InfraError::from(err).into();
        match mapped {
            WorkbridgeError::NotFound(msg) => assert!(msg.contains("keychain")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn http_status_401_maps_to_auth_error() {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

            let mapped: WorkbridgeError = InfraError::from(error).into();
            match mapped {
                WorkbridgeError::Auth(msg) => assert!(msg.contains("401")),
                other => panic!("expected auth error, got {:?}", other),
            }
        });
    }

    #[test]
    fn connection_refused_maps_to_network_error() {
        Runtime::new().unwrap().block_on(async {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener); // release the port so the request fails to connect

            let client = Client::builder().no_proxy().build().unwrap();
            let error = client.get(format!("http://{}", addr)).send().await.unwrap_err();

            let mapped: WorkbridgeError = InfraError::from(error).into();
            assert!(matches!(mapped, WorkbridgeError::Network(_)));
        });
    }
}
