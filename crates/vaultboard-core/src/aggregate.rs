use std::collections::HashMap;

use vaultboard_types::{BuilderMetrics, BuilderSortField, Vault};

use crate::sort::num_or_zero;

/// Group a snapshot by owner address and reduce each group into a
/// [`BuilderMetrics`] rollup.
///
/// Single pass, output in first-encountered order. Owner social metadata is
/// first-seen-wins: the record that creates the group supplies it. Vaults
/// with no owner address at all group under the empty-string key rather
/// than being dropped, so totals still reconcile with the snapshot.
pub fn aggregate_by_owner(vaults: &[Vault]) -> Vec<BuilderMetrics> {
    let mut groups: Vec<BuilderMetrics> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    // APR sums per group, folded into the mean after the pass completes.
    let mut apr_sums: Vec<f64> = Vec::new();

    for vault in vaults {
        let address = vault.builder_address();
        let slot = *index.entry(address.to_owned()).or_insert_with(|| {
            groups.push(BuilderMetrics {
                owner: address.to_owned(),
                owner_info: vault.owner.clone(),
                ..Default::default()
            });
            apr_sums.push(0.0);
            groups.len() - 1
        });

        let metrics = &mut groups[slot];
        metrics.total_vaults += 1;
        metrics.total_tvl += num_or_zero(vault.tvl);
        metrics.total_fee_generated += num_or_zero(vault.fee_generated);
        metrics.total_users += num_or_zero(vault.total_user);
        metrics.risk_profile.record(vault.risk_score);
        metrics.range_strategy.record(vault.range_strategy_type);
        metrics
            .tvl_strategy_type
            .record(vault.tvl_strategy_type, vault.allow_deposit);
        if vault.allow_deposit {
            metrics.deposit_allowed_count += 1;
        }
        if let Some(symbol) = vault.principal_symbol()
            && !symbol.is_empty()
            && !metrics
                .principal_tokens
                .iter()
                .any(|known| known.as_str() == symbol)
        {
            metrics.principal_tokens.push(symbol.to_owned());
        }
        apr_sums[slot] += num_or_zero(vault.apr);
    }

    // Batch mean: sum of the group's APRs over its vault count. Computed
    // after the pass so the result is independent of input order.
    for (metrics, apr_sum) in groups.iter_mut().zip(apr_sums) {
        if metrics.total_vaults > 0 {
            metrics.average_apr = apr_sum / f64::from(metrics.total_vaults);
        }
    }

    groups
}

/// Order builder rollups for the catalog view. Descending only; the view
/// exposes no ascending toggle.
pub fn sort_builders(builders: &[BuilderMetrics], field: BuilderSortField) -> Vec<BuilderMetrics> {
    let mut ordered = builders.to_vec();
    ordered.sort_by(|a, b| {
        let key = |m: &BuilderMetrics| {
            num_or_zero(match field {
                BuilderSortField::Tvl => m.total_tvl,
                BuilderSortField::Apr => m.average_apr,
                BuilderSortField::Fees => m.total_fee_generated,
                BuilderSortField::Users => m.total_users,
            })
        };
        key(b).total_cmp(&key(a))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{vault, with_token};
    use vaultboard_types::{Owner, RiskScore, TvlStrategyType};

    #[test]
    fn end_to_end_scenario() {
        let vaults = vec![
            vault("A", 5_000.0, 0.1, 10.0, RiskScore::Low),
            vault("A", 20_000.0, 0.3, 40.0, RiskScore::High),
            vault("B", 150_000.0, 0.5, 100.0, RiskScore::Medium),
        ];

        let builders = aggregate_by_owner(&vaults);
        assert_eq!(builders.len(), 2);

        let a = &builders[0];
        assert_eq!(a.owner, "A");
        assert_eq!(a.total_vaults, 2);
        assert_eq!(a.total_tvl, 25_000.0);
        assert!((a.average_apr - 0.2).abs() < 1e-12);
        assert_eq!(a.total_fee_generated, 50.0);
        assert_eq!(a.risk_profile.low, 1);
        assert_eq!(a.risk_profile.high, 1);

        let b = &builders[1];
        assert_eq!(b.total_vaults, 1);
        assert_eq!(b.average_apr, 0.5);
        // MEDIUM relabels to MODERATE in the output distribution.
        assert_eq!(b.risk_profile.moderate, 1);

        let by_tvl = sort_builders(&builders, BuilderSortField::Tvl);
        assert_eq!(by_tvl[0].owner, "B");
        assert_eq!(by_tvl[1].owner, "A");
    }

    #[test]
    fn average_apr_is_unweighted_by_tvl() {
        // A dust vault and a whale vault contribute equally to the mean.
        let vaults = vec![
            vault("A", 1.0, 0.10, 0.0, RiskScore::Low),
            vault("A", 1_000_000.0, 0.20, 0.0, RiskScore::Low),
            vault("A", 50.0, 0.30, 0.0, RiskScore::Low),
        ];
        let builders = aggregate_by_owner(&vaults);
        assert!((builders[0].average_apr - 0.20).abs() < 1e-12);
    }

    #[test]
    fn average_apr_is_order_independent() {
        let mut vaults = vec![
            vault("A", 0.0, 0.07, 0.0, RiskScore::Low),
            vault("A", 0.0, 0.21, 0.0, RiskScore::Low),
            vault("A", 0.0, 0.35, 0.0, RiskScore::Low),
        ];
        let forward = aggregate_by_owner(&vaults);
        vaults.reverse();
        let backward = aggregate_by_owner(&vaults);
        assert_eq!(forward[0].average_apr, backward[0].average_apr);
    }

    #[test]
    fn whitelisted_pools_special_case() {
        let mut depositable = vault("A", 0.0, 0.0, 0.0, RiskScore::Low);
        depositable.allow_deposit = true;
        depositable.tvl_strategy_type = TvlStrategyType::Unset;

        let builders = aggregate_by_owner(&[depositable]);
        assert_eq!(builders[0].tvl_strategy_type.whitelisted_pools, 1);
        assert_eq!(builders[0].tvl_strategy_type.unset, 0);
    }

    #[test]
    fn principal_tokens_dedup_in_first_appearance_order() {
        let vaults = vec![
            with_token(vault("A", 0.0, 0.0, 0.0, RiskScore::Low), "WETH"),
            with_token(vault("A", 0.0, 0.0, 0.0, RiskScore::Low), "USDC"),
            with_token(vault("A", 0.0, 0.0, 0.0, RiskScore::Low), "WETH"),
        ];
        let builders = aggregate_by_owner(&vaults);
        assert_eq!(builders[0].principal_tokens, vec!["WETH", "USDC"]);
    }

    #[test]
    fn owner_metadata_is_first_seen() {
        let mut first = vault("A", 0.0, 0.0, 0.0, RiskScore::Low);
        first.owner = Owner {
            address: "A".to_owned(),
            twitter_username: Some("original".to_owned()),
            ..Default::default()
        };
        let mut second = vault("A", 0.0, 0.0, 0.0, RiskScore::Low);
        second.owner = Owner {
            address: "A".to_owned(),
            twitter_username: Some("imposter".to_owned()),
            ..Default::default()
        };

        let builders = aggregate_by_owner(&[first, second]);
        assert_eq!(
            builders[0].owner_info.twitter_username.as_deref(),
            Some("original")
        );
    }

    #[test]
    fn missing_owner_groups_under_empty_key() {
        let orphan = Vault::default();
        let builders = aggregate_by_owner(&[orphan.clone(), orphan]);
        assert_eq!(builders.len(), 1);
        assert_eq!(builders[0].owner, "");
        assert_eq!(builders[0].total_vaults, 2);
    }

    #[test]
    fn output_keeps_first_encountered_order() {
        let vaults = vec![
            vault("zed", 0.0, 0.0, 0.0, RiskScore::Low),
            vault("amy", 0.0, 0.0, 0.0, RiskScore::Low),
            vault("zed", 0.0, 0.0, 0.0, RiskScore::Low),
        ];
        let builders = aggregate_by_owner(&vaults);
        let owners: Vec<_> = builders.iter().map(|b| b.owner.clone()).collect();
        assert_eq!(owners, vec!["zed", "amy"]);
    }

    #[test]
    fn fractional_user_counts_are_preserved() {
        let mut v = vault("A", 0.0, 0.0, 0.0, RiskScore::Low);
        v.total_user = 1.5;
        let builders = aggregate_by_owner(&[v.clone(), v]);
        assert_eq!(builders[0].total_users, 3.0);
    }
}
