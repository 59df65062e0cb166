//! # Constants
//!
//! Default values for configuration and fixed user-facing strings.

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default HTTP bind address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Secret fetched when the page keyword is entered
pub const DEFAULT_SECRET_NAME: &str = "my-secret";

/// Page input that triggers a secret lookup (compared trimmed, case-insensitive)
pub const DEFAULT_SECRET_KEYWORD: &str = "secret";

/// Maximum accepted input length, in characters
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "keyvault_secret_frontend=info,tower_http=info";

/// DNS suffix for public-cloud vaults
pub const KEY_VAULT_DNS_SUFFIX: &str = ".vault.azure.net";

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Page banner for blank input
pub const MSG_EMPTY_INPUT: &str = "Please enter a message";

/// Label used in every API error body
pub const MSG_RETRIEVE_FAILED: &str = "Failed to retrieve secret";

/// Prefix of the page banner when a lookup fails
pub const MSG_PROCESS_FAILED: &str = "Failed to process request";
