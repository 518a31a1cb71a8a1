use vaultboard_types::{FilterCriteria, Vault};

/// Narrow a snapshot to the vaults matching every non-null criterion.
///
/// Criteria compose by logical AND; there is no OR across fields. Missing
/// nested fields (e.g. a vault without a principal token) simply fail to
/// match; they never error.
pub fn filter_vaults(vaults: &[Vault], criteria: &FilterCriteria) -> Vec<Vault> {
    vaults
        .iter()
        .filter(|vault| matches(vault, criteria))
        .cloned()
        .collect()
}

fn matches(vault: &Vault, criteria: &FilterCriteria) -> bool {
    if let Some(chain_id) = criteria.chain_id
        && vault.chain_id != chain_id
    {
        return false;
    }

    if let Some(symbol) = criteria.principal_token.as_deref()
        && vault.principal_symbol() != Some(symbol)
    {
        return false;
    }

    if let Some(risk) = criteria.risk_level
        && vault.risk_score != risk
    {
        return false;
    }

    if let Some(min_apr) = criteria.min_apr
        && vault.apr < min_apr
    {
        return false;
    }

    if let Some(max_apr) = criteria.max_apr
        && vault.apr > max_apr
    {
        return false;
    }

    if let Some(bucket) = criteria.tvl_range
        && !bucket.contains(vault.tvl)
    {
        return false;
    }

    if let Some(strategy) = criteria.range_strategy
        && vault.range_strategy_type != strategy
    {
        return false;
    }

    // Asymmetric on purpose: only an explicit `true` constrains. `Some(false)`
    // behaves like no constraint, same as the deposit toggle being off.
    if criteria.allow_deposit == Some(true) && !vault.allow_deposit {
        return false;
    }

    if let Some(search) = criteria.search.as_deref()
        && !search.is_empty()
        && !matches_search(vault, search)
    {
        return false;
    }

    true
}

/// Case-insensitive substring match over vault name, principal token symbol
/// and pool project names (OR among the three).
fn matches_search(vault: &Vault, search: &str) -> bool {
    let needle = search.to_lowercase();

    vault.name.to_lowercase().contains(&needle)
        || vault
            .principal_symbol()
            .is_some_and(|symbol| symbol.to_lowercase().contains(&needle))
        || vault
            .pools
            .iter()
            .any(|pool| pool.project.to_lowercase().contains(&needle))
}
