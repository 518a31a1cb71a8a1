use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sortable columns of the per-vault views.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum VaultSortField {
    #[default]
    Apr,
    Tvl,
    Pnl,
    Fees,
    Users,
    DailyYield,
    Risk,
}

/// `{field, direction}` pair. Ephemeral: recreated on every sort-toggle
/// interaction, never stored by the engines.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub field: VaultSortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn descending(field: VaultSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Toggle rule: selecting the already-active field flips the direction;
    /// selecting a new field resets to descending.
    pub fn toggled(self, field: VaultSortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::descending(field)
        }
    }
}

/// Sort columns of the builder catalog view. Descending only; this view has
/// no ascending toggle.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BuilderSortField {
    #[default]
    Tvl,
    Apr,
    Fees,
    Users,
}

/// Ranking metrics of the builder leaderboard.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum BuilderRankField {
    #[default]
    Fees,
    Users,
    Vaults,
    DailyYield,
    /// Daily yield as a share of the builder's TVL, for comparability across
    /// very different TVL sizes.
    DailyYieldPct,
}

/// Sort columns of the migration-rebate leaderboard.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum MigrationSortField {
    #[default]
    FeeRebate,
    Owner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_field_flips_direction() {
        let spec = SortSpec::descending(VaultSortField::Tvl);
        let flipped = spec.toggled(VaultSortField::Tvl);
        assert_eq!(flipped.direction, SortDirection::Asc);
        assert_eq!(flipped.toggled(VaultSortField::Tvl).direction, SortDirection::Desc);
    }

    #[test]
    fn toggling_new_field_resets_to_descending() {
        let spec = SortSpec {
            field: VaultSortField::Tvl,
            direction: SortDirection::Asc,
        };
        let next = spec.toggled(VaultSortField::Fees);
        assert_eq!(next.field, VaultSortField::Fees);
        assert_eq!(next.direction, SortDirection::Desc);
    }
}
