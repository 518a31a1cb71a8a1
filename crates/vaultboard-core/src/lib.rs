//! Pure derived-metrics pipeline over a fetched vault snapshot.
//!
//! Every function in this crate is synchronous, deterministic and
//! infallible: data-quality problems (missing numerics, unknown enum
//! values, absent owners) are absorbed by defaults at the type boundary
//! rather than surfaced as errors. Time-dependent windowing takes `now`
//! as an explicit parameter so nothing here reads the wall clock.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod leaderboard;
pub mod paginate;
pub mod sort;

pub use aggregate::{aggregate_by_owner, sort_builders};
pub use export::{challenge_csv, export_filename, shorten_address};
pub use filter::filter_vaults;
pub use leaderboard::{
    challenge_vaults, rank_builders, rank_vaults, sort_migrations, top_vaults_by,
    vaults_in_window, vaults_of_kind,
};
pub use paginate::{clamp_page, paginate, total_pages};
pub use sort::sort_vaults;

#[cfg(test)]
pub(crate) mod testutil {
    use vaultboard_types::{Owner, RiskScore, Token, Vault};

    /// Minimal vault for pipeline tests; extend per-field as needed.
    pub fn vault(owner: &str, tvl: f64, apr: f64, fee: f64, risk: RiskScore) -> Vault {
        Vault {
            owner: Owner {
                address: owner.to_owned(),
                ..Default::default()
            },
            owner_address: owner.to_owned(),
            name: format!("{owner}-vault"),
            tvl,
            apr,
            fee_generated: fee,
            risk_score: risk,
            ..Default::default()
        }
    }

    pub fn with_token(mut vault: Vault, symbol: &str) -> Vault {
        vault.principal_token = Some(Token {
            symbol: symbol.to_owned(),
            ..Default::default()
        });
        vault
    }
}
