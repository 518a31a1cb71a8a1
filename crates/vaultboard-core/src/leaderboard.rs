use std::collections::HashMap;

use vaultboard_types::{
    BuilderRankField, BuilderStanding, ChallengeMetric, ChallengeWindow, MigratedVault,
    MigrationSortField, RankedEntry, SortDirection, SortSpec, TimeWindow, Vault, VaultKind,
};

use crate::sort::{num_or_zero, sort_vaults};

/// Default board depth for the challenge "top N" views.
pub const TOP_N: usize = 10;

/// Keep the vaults whose age falls inside the given cohort.
pub fn vaults_in_window(vaults: &[Vault], window: TimeWindow) -> Vec<Vault> {
    vaults
        .iter()
        .filter(|vault| window.admits(vault.age_in_second))
        .cloned()
        .collect()
}

/// Split the snapshot by population: auto-farm vaults carry an explicit
/// `isAutoFarmVault = true`; everything else counts as shared.
pub fn vaults_of_kind(vaults: &[Vault], kind: VaultKind) -> Vec<Vault> {
    vaults
        .iter()
        .filter(|vault| match kind {
            VaultKind::Autofarm => vault.is_autofarm(),
            VaultKind::Shared => !vault.is_autofarm(),
        })
        .cloned()
        .collect()
}

/// Competition cohort: vaults created inside the campaign's calendar period
/// (seen from `now`) that are open for deposits.
pub fn challenge_vaults(vaults: &[Vault], window: &ChallengeWindow, now: i64) -> Vec<Vault> {
    let cohort: Vec<Vault> = vaults
        .iter()
        .filter(|vault| window.admits(vault.age_in_second, now) && vault.allow_deposit)
        .cloned()
        .collect();
    tracing::debug!(
        cohort_size = cohort.len(),
        total = vaults.len(),
        "challenge cohort selected"
    );
    cohort
}

fn challenge_key(vault: &Vault, metric: ChallengeMetric) -> f64 {
    num_or_zero(match metric {
        ChallengeMetric::Fees => vault.fee_generated,
        ChallengeMetric::Tvl => vault.tvl,
        ChallengeMetric::Users => vault.total_user,
    })
}

/// Whether `candidate` displaces `held` as an owner's best record under the
/// given metric. The fees board compares fees alone (first record wins
/// ties); the users and tvl boards break primary-metric ties on fees.
fn displaces(candidate: &Vault, held: &Vault, metric: ChallengeMetric) -> bool {
    let (new_key, old_key) = (challenge_key(candidate, metric), challenge_key(held, metric));
    match metric {
        ChallengeMetric::Fees => new_key > old_key,
        ChallengeMetric::Tvl | ChallengeMetric::Users => {
            new_key > old_key
                || (new_key == old_key
                    && num_or_zero(candidate.fee_generated) > num_or_zero(held.fee_generated))
        }
    }
}

/// Top-N board over a challenge cohort: at most one vault per owner (its
/// best under the metric), ordered descending with a fees secondary, ranked
/// 1-based by position.
pub fn top_vaults_by(
    vaults: &[Vault],
    metric: ChallengeMetric,
    limit: usize,
) -> Vec<RankedEntry<Vault>> {
    let mut best: Vec<Vault> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for vault in vaults {
        match index.get(vault.builder_address()) {
            Some(&slot) => {
                if displaces(vault, &best[slot], metric) {
                    best[slot] = vault.clone();
                }
            }
            None => {
                index.insert(vault.builder_address().to_owned(), best.len());
                best.push(vault.clone());
            }
        }
    }

    best.sort_by(|a, b| {
        challenge_key(b, metric)
            .total_cmp(&challenge_key(a, metric))
            .then_with(|| {
                num_or_zero(b.fee_generated).total_cmp(&num_or_zero(a.fee_generated))
            })
    });
    best.truncate(limit);
    RankedEntry::sequence(best)
}

/// Builder-level leaderboard: roll every vault in the (already windowed)
/// set up per owner, order by the requested field and rank.
pub fn rank_builders(
    vaults: &[Vault],
    field: BuilderRankField,
    direction: SortDirection,
) -> Vec<RankedEntry<BuilderStanding>> {
    let mut standings: Vec<BuilderStanding> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for vault in vaults {
        let slot = *index
            .entry(vault.builder_address().to_owned())
            .or_insert_with(|| {
                standings.push(BuilderStanding::seeded_from(vault));
                standings.len() - 1
            });
        standings[slot].absorb(vault);
    }

    let key = |standing: &BuilderStanding| {
        num_or_zero(match field {
            BuilderRankField::Fees => standing.fees_earned,
            BuilderRankField::Users => standing.total_users,
            BuilderRankField::Vaults => f64::from(standing.vault_count),
            BuilderRankField::DailyYield => standing.daily_yield,
            BuilderRankField::DailyYieldPct => standing.daily_yield_pct(),
        })
    };
    standings.sort_by(|a, b| match direction {
        SortDirection::Asc => key(a).total_cmp(&key(b)),
        SortDirection::Desc => key(b).total_cmp(&key(a)),
    });

    RankedEntry::sequence(standings)
}

/// Rank an (unwindowed or windowed) vault set under a plain sort spec.
pub fn rank_vaults(vaults: &[Vault], spec: SortSpec) -> Vec<RankedEntry<Vault>> {
    RankedEntry::sequence(sort_vaults(vaults, spec))
}

/// Migration-rebate leaderboard: rebate amount numerically, owner by
/// twitter-handle-or-address string comparison.
pub fn sort_migrations(
    migrations: &[MigratedVault],
    field: MigrationSortField,
    direction: SortDirection,
) -> Vec<RankedEntry<MigratedVault>> {
    let mut ordered = migrations.to_vec();
    ordered.sort_by(|a, b| {
        let ordering = match field {
            MigrationSortField::FeeRebate => {
                num_or_zero(a.fee_amount_usd).total_cmp(&num_or_zero(b.fee_amount_usd))
            }
            MigrationSortField::Owner => a.owner_handle().cmp(b.owner_handle()),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    RankedEntry::sequence(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::vault;
    use vaultboard_types::{Owner, RiskScore};

    fn depositable(owner: &str, fee: f64, tvl: f64, users: f64, age: i64) -> Vault {
        let mut v = vault(owner, tvl, 0.0, fee, RiskScore::Low);
        v.allow_deposit = true;
        v.total_user = users;
        v.age_in_second = age;
        v
    }

    #[test]
    fn challenge_membership_requires_deposit_flag() {
        let window = ChallengeWindow {
            start_ts: 1_000,
            end_ts: 2_000,
        };
        let now = 3_000;
        let inside = depositable("a", 0.0, 0.0, 0.0, 1_500);
        let mut closed = inside.clone();
        closed.allow_deposit = false;
        let too_old = depositable("b", 0.0, 0.0, 0.0, 2_500);

        let cohort = challenge_vaults(&[inside, closed, too_old], &window, now);
        assert_eq!(cohort.len(), 1);
        assert_eq!(cohort[0].owner.address, "a");
    }

    #[test]
    fn per_owner_dedup_keeps_best_by_users_with_fee_tiebreak() {
        let vaults = vec![
            depositable("A", 100.0, 0.0, 50.0, 0),
            depositable("A", 90.0, 0.0, 80.0, 0),
            depositable("B", 10.0, 0.0, 60.0, 0),
        ];
        let board = top_vaults_by(&vaults, ChallengeMetric::Users, TOP_N);
        assert_eq!(board.len(), 2);
        // The 80-user vault wins for A despite lower fees.
        assert_eq!(board[0].entry.total_user, 80.0);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].entry.owner.address, "B");
    }

    #[test]
    fn equal_user_counts_fall_back_to_fees() {
        let vaults = vec![
            depositable("A", 5.0, 0.0, 40.0, 0),
            depositable("A", 25.0, 0.0, 40.0, 0),
        ];
        let board = top_vaults_by(&vaults, ChallengeMetric::Users, TOP_N);
        assert_eq!(board[0].entry.fee_generated, 25.0);
    }

    #[test]
    fn fees_board_keeps_first_record_on_ties() {
        let mut first = depositable("A", 30.0, 1.0, 0.0, 0);
        first.name = "first".to_owned();
        let mut second = depositable("A", 30.0, 2.0, 0.0, 0);
        second.name = "second".to_owned();

        let board = top_vaults_by(&[first, second], ChallengeMetric::Fees, TOP_N);
        assert_eq!(board[0].entry.name, "first");
    }

    #[test]
    fn board_is_truncated_and_ranked() {
        let vaults: Vec<Vault> = (0..15)
            .map(|i| depositable(&format!("owner{i}"), f64::from(i), 0.0, 0.0, 0))
            .collect();
        let board = top_vaults_by(&vaults, ChallengeMetric::Fees, TOP_N);
        assert_eq!(board.len(), TOP_N);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[9].rank, 10);
        assert_eq!(board[0].entry.fee_generated, 14.0);
    }

    #[test]
    fn builder_ranking_rolls_up_per_owner() {
        let mut one = depositable("A", 10.0, 1_000.0, 3.0, 0);
        one.earning24h = 5.0;
        let mut two = depositable("A", 20.0, 3_000.0, 4.0, 0);
        two.earning24h = 15.0;
        let three = depositable("B", 25.0, 500.0, 9.0, 0);

        let ranked = rank_builders(&[one, two, three], BuilderRankField::Fees, SortDirection::Desc);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].entry.address, "A");
        assert_eq!(ranked[0].entry.fees_earned, 30.0);
        assert_eq!(ranked[0].entry.vault_count, 2);
        assert_eq!(ranked[0].entry.daily_yield, 20.0);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn daily_yield_pct_divides_by_tvl() {
        let mut small = depositable("A", 0.0, 100.0, 0.0, 0);
        small.earning24h = 10.0; // 10%
        let mut big = depositable("B", 0.0, 10_000.0, 0.0, 0);
        big.earning24h = 500.0; // 5%

        let by_pct = rank_builders(
            &[big.clone(), small.clone()],
            BuilderRankField::DailyYieldPct,
            SortDirection::Desc,
        );
        assert_eq!(by_pct[0].entry.address, "A");

        let by_abs = rank_builders(
            &[big, small],
            BuilderRankField::DailyYield,
            SortDirection::Desc,
        );
        assert_eq!(by_abs[0].entry.address, "B");
    }

    #[test]
    fn migrations_sort_by_rebate_then_rank() {
        let record = |owner: &str, fee: f64| MigratedVault {
            owner_address: owner.to_owned(),
            fee_amount_usd: fee,
            ..Default::default()
        };
        let ranked = sort_migrations(
            &[record("a", 5.0), record("b", 50.0), record("c", 20.0)],
            MigrationSortField::FeeRebate,
            SortDirection::Desc,
        );
        assert_eq!(ranked[0].entry.owner_address, "b");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].entry.owner_address, "a");
    }

    #[test]
    fn migrations_owner_sort_prefers_twitter_handle() {
        let with_handle = MigratedVault {
            owner_address: "0xzz".to_owned(),
            owner: Some(Owner {
                address: "0xzz".to_owned(),
                twitter_username: Some("aardvark".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let bare = MigratedVault {
            owner_address: "0xaa".to_owned(),
            ..Default::default()
        };
        let ranked = sort_migrations(
            &[bare, with_handle],
            MigrationSortField::Owner,
            SortDirection::Asc,
        );
        // "0xaa" < "aardvark" in byte order.
        assert_eq!(ranked[0].entry.owner_address, "0xaa");
        assert_eq!(ranked[1].entry.owner_handle(), "aardvark");
    }

    #[test]
    fn weekly_window_buckets_by_age() {
        let this_week = depositable("a", 0.0, 0.0, 0.0, 604_800);
        let last_week = depositable("b", 0.0, 0.0, 0.0, 604_801);
        let ancient = depositable("c", 0.0, 0.0, 0.0, 10_000_000);
        let all = vec![this_week, last_week, ancient];

        assert_eq!(vaults_in_window(&all, TimeWindow::ThisWeek).len(), 1);
        assert_eq!(vaults_in_window(&all, TimeWindow::LastWeek).len(), 1);
        assert_eq!(vaults_in_window(&all, TimeWindow::AllTime).len(), 3);
    }

    #[test]
    fn kind_split_treats_unflagged_as_shared() {
        let mut farm = vault("a", 0.0, 0.0, 0.0, RiskScore::Low);
        farm.is_auto_farm_vault = Some(true);
        let mut explicit_shared = vault("b", 0.0, 0.0, 0.0, RiskScore::Low);
        explicit_shared.is_auto_farm_vault = Some(false);
        let unflagged = vault("c", 0.0, 0.0, 0.0, RiskScore::Low);

        let all = vec![farm, explicit_shared, unflagged];
        assert_eq!(vaults_of_kind(&all, VaultKind::Autofarm).len(), 1);
        assert_eq!(vaults_of_kind(&all, VaultKind::Shared).len(), 2);
    }
}
