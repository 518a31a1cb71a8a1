use std::cmp::Ordering;

use vaultboard_types::{SortDirection, SortSpec, Vault, VaultSortField};

/// Return a new ordering of the input under the given spec; the input is
/// left untouched and equal-keyed entries keep their relative input order
/// (stable sort).
pub fn sort_vaults(vaults: &[Vault], spec: SortSpec) -> Vec<Vault> {
    let mut ordered = vaults.to_vec();
    ordered.sort_by(|a, b| compare(a, b, spec));
    ordered
}

fn compare(a: &Vault, b: &Vault, spec: SortSpec) -> Ordering {
    let (key_a, key_b) = (sort_key(a, spec.field), sort_key(b, spec.field));
    match spec.direction {
        SortDirection::Asc => key_a.total_cmp(&key_b),
        SortDirection::Desc => key_b.total_cmp(&key_a),
    }
}

/// Numeric key for a field. Non-finite values normalize to 0 so a NaN from
/// upstream sorts as the lowest magnitude instead of corrupting the order.
/// RISK maps through the fixed severity ordinal; alphabetic ordering of the
/// labels would put ELEVATED above HIGH.
fn sort_key(vault: &Vault, field: VaultSortField) -> f64 {
    let raw = match field {
        VaultSortField::Apr => vault.apr,
        VaultSortField::Tvl => vault.tvl,
        VaultSortField::Pnl => vault.pnl,
        VaultSortField::Fees => vault.fee_generated,
        VaultSortField::Users => vault.total_user,
        VaultSortField::DailyYield => vault.earning24h,
        VaultSortField::Risk => f64::from(vault.risk_score.ordinal()),
    };
    num_or_zero(raw)
}

pub(crate) fn num_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::vault;
    use vaultboard_types::RiskScore;

    fn risky_sample() -> Vec<Vault> {
        vec![
            vault("a", 1.0, 0.1, 0.0, RiskScore::High),
            vault("b", 2.0, 0.2, 0.0, RiskScore::Low),
            vault("c", 3.0, 0.3, 0.0, RiskScore::Elevated),
            vault("d", 4.0, 0.4, 0.0, RiskScore::Medium),
        ]
    }

    #[test]
    fn risk_ascending_follows_severity() {
        let ordered = sort_vaults(
            &risky_sample(),
            SortSpec {
                field: VaultSortField::Risk,
                direction: SortDirection::Asc,
            },
        );
        let risks: Vec<_> = ordered.iter().map(|v| v.risk_score).collect();
        assert_eq!(
            risks,
            vec![
                RiskScore::Low,
                RiskScore::Medium,
                RiskScore::Elevated,
                RiskScore::High
            ]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let spec = SortSpec::descending(VaultSortField::Tvl);
        let once = sort_vaults(&risky_sample(), spec);
        let twice = sort_vaults(&once, spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn nan_values_sort_as_zero() {
        let mut vaults = risky_sample();
        vaults[0].tvl = f64::NAN;
        let ordered = sort_vaults(&vaults, SortSpec::descending(VaultSortField::Tvl));
        // The NaN vault sinks to the bottom of a descending sort.
        assert_eq!(ordered.last().unwrap().owner.address, "a");
    }

    #[test]
    fn ties_keep_input_order() {
        let mut vaults = risky_sample();
        for v in &mut vaults {
            v.tvl = 50.0;
        }
        let ordered = sort_vaults(&vaults, SortSpec::descending(VaultSortField::Tvl));
        let owners: Vec<_> = ordered.iter().map(|v| v.owner.address.clone()).collect();
        assert_eq!(owners, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn direction_flips_the_order() {
        let desc = sort_vaults(&risky_sample(), SortSpec::descending(VaultSortField::Apr));
        let asc = sort_vaults(
            &risky_sample(),
            SortSpec {
                field: VaultSortField::Apr,
                direction: SortDirection::Asc,
            },
        );
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
    }
}
