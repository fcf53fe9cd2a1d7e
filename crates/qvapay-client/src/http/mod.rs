/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod debug;
pub mod error;
pub mod request;

pub mod app;
pub mod auth;
pub mod coins;
pub mod merchants;
pub mod p2p;
pub mod payment_link;
pub mod store;
pub mod transactions;
pub mod user;

pub use error::{ErrorKind, QvaPayError, Result, TWO_FACTOR_REQUIRED, classify};

pub use client::{ClientConfig, DEFAULT_BASE_URL, QvaPayClient};
pub use debug::{DebugSink, ErrorRecord, RequestRecord, ResponseRecord, TracingSink};
pub use request::{ApiRequest, QueryParams, RequestBody};

pub use app::AppApi;
pub use auth::Auth;
pub use coins::Coins;
pub use merchants::Merchants;
pub use p2p::P2P;
pub use payment_link::PaymentLinks;
pub use store::Store;
pub use transactions::Transactions;
pub use user::User;
