/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public QvaPay client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the QvaPay REST API.
//!
//! ```no_run
//! use qvapay_client::{LoginParams, QvaPayClient};
//!
//! # async fn run() -> qvapay_client::Result<()> {
//! let client = QvaPayClient::new()?;
//! client
//!     .auth()
//!     .login(&LoginParams::new("user@example.com", "secret"))
//!     .await?;
//! let me = client.user().me().await?;
//! println!("{} has {}", me.username, me.balance);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AppApi,
    Auth,
    ClientConfig,
    Coins,
    DebugSink,
    ErrorKind,
    Merchants,
    P2P,
    PaymentLinks,
    QvaPayClient,
    QvaPayError,
    Result,
    Store,
    Transactions,
    User,
};

// Re-export all types
pub use types::*;
