//! Snapshot-source adapter: everything that talks to the remote vaults API
//! lives here, behind the [`VaultSource`] trait. The rest of the workspace
//! only ever sees a flat, validated `Vec<Vault>` or an explicit transport
//! error; shape divergence in upstream responses is absorbed at this
//! boundary.

pub mod envelope;
pub mod error;
pub mod http;
pub mod traits;

pub use error::SourceError;
pub use http::KrystalClient;
pub use traits::{VaultQuery, VaultSource};
