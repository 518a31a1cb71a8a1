use chrono::{DateTime, SecondsFormat, Utc};
use vaultboard_types::{RankedEntry, Vault};

const CSV_HEADERS: [&str; 11] = [
    "Rank",
    "Vault Name",
    "Vault Address",
    "Owner",
    "Owner Address",
    "Chain",
    "Fees Generated",
    "TVL",
    "APR",
    "Total Users",
    "Created",
];

/// Render a ranked challenge board as CSV, one row per entry in rank order.
///
/// Numeric fields export as raw numbers except APR, which renders as a
/// percentage string. User counts are rounded here, at display time. `now`
/// anchors the created-at column (creation = now - age).
pub fn challenge_csv(entries: &[RankedEntry<Vault>], now: DateTime<Utc>) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for ranked in entries {
        let vault = &ranked.entry;
        let row = [
            ranked.rank.to_string(),
            escape(&vault.name),
            escape(&vault.vault_address),
            escape(&owner_label(vault)),
            escape(&vault.owner.address),
            escape(&vault.chain_name),
            trim_float(vault.fee_generated),
            trim_float(vault.tvl),
            format!("{:.2}%", vault.apr * 100.0),
            format!("{}", vault.total_user.round() as i64),
            escape(&created_at_label(vault.age_in_second, now)),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Attachment filename: prefix plus an export-time timestamp with `:` and
/// `.` flattened so it is filesystem-safe, e.g.
/// `farm-earn-challenge-top-fees-2025-05-16T09-00-00.csv`.
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    let stamp: String = now
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .chars()
        .take(19)
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    format!("{prefix}-{stamp}.csv")
}

/// Owner column: the twitter handle when the owner carries one, otherwise
/// the shortened address.
fn owner_label(vault: &Vault) -> String {
    let handle = vault.owner.handle();
    if handle == vault.owner.address {
        shorten_address(handle)
    } else {
        handle.to_owned()
    }
}

/// `0x1234abcd...ef56` style display form of an address.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_owned();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Creation moment rendered as e.g. `May 9, 13:32 UTC`.
fn created_at_label(age_in_second: i64, now: DateTime<Utc>) -> String {
    let created = now - chrono::Duration::seconds(age_in_second);
    created.format("%b %-d, %H:%M UTC").to_string()
}

/// Raw numeric export: integral values drop the trailing `.0`.
fn trim_float(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Minimal CSV quoting: fields containing the separator, quotes or
/// newlines are wrapped and inner quotes doubled.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::vault;
    use chrono::TimeZone;
    use vaultboard_types::RiskScore;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 16, 9, 0, 0).unwrap()
    }

    fn ranked_sample() -> Vec<RankedEntry<Vault>> {
        let mut a = vault("0xabcdef0123456789", 5_000.0, 0.1234, 10.0, RiskScore::Low);
        a.name = "Alpha".to_owned();
        a.total_user = 10.4;
        let mut b = vault("0xfeedbeefcafe0123", 20_000.5, 0.3, 40.0, RiskScore::High);
        b.name = "Beta, with comma".to_owned();
        b.total_user = 2.6;
        let c = vault("0x0123456789abcdef", 1.0, 0.0, 0.0, RiskScore::Low);
        RankedEntry::sequence(vec![a, b, c])
    }

    #[test]
    fn three_entries_export_as_four_lines() {
        let csv = challenge_csv(&ranked_sample(), fixed_now());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Rank,Vault Name,"));
    }

    #[test]
    fn apr_is_the_only_formatted_number() {
        let csv = challenge_csv(&ranked_sample(), fixed_now());
        let first_row = csv.lines().nth(1).unwrap();
        assert!(first_row.contains("12.34%"));
        // Raw fees/TVL, no currency formatting.
        assert!(first_row.contains(",10,"));
        assert!(first_row.contains(",5000,"));
    }

    #[test]
    fn user_counts_round_at_export_time() {
        let csv = challenge_csv(&ranked_sample(), fixed_now());
        let rows: Vec<&str> = csv.lines().collect();
        // 10.4 -> 10, 2.6 -> 3.
        assert!(rows[1].contains(",10,"));
        assert!(rows[2].contains(",3,"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let csv = challenge_csv(&ranked_sample(), fixed_now());
        assert!(csv.contains("\"Beta, with comma\""));
    }

    #[test]
    fn export_is_deterministic_for_fixed_now() {
        let entries = ranked_sample();
        assert_eq!(
            challenge_csv(&entries, fixed_now()),
            challenge_csv(&entries, fixed_now())
        );
    }

    #[test]
    fn filename_flattens_the_timestamp() {
        assert_eq!(
            export_filename("farm-earn-challenge-all", fixed_now()),
            "farm-earn-challenge-all-2025-05-16T09-00-00.csv"
        );
    }

    #[test]
    fn shorten_address_keeps_ends() {
        assert_eq!(
            shorten_address("0x1234567890abcdef1234"),
            "0x1234...1234"
        );
        assert_eq!(shorten_address("0xshort"), "0xshort");
    }

    #[test]
    fn owner_column_prefers_twitter_handle() {
        let mut named = vault("0xabcdef0123456789", 0.0, 0.0, 0.0, RiskScore::Low);
        named.owner.twitter_username = Some("builder_one".to_owned());
        let anonymous = vault("0xfeedbeefcafe0123", 0.0, 0.0, 0.0, RiskScore::Low);

        let csv = challenge_csv(&RankedEntry::sequence(vec![named, anonymous]), fixed_now());
        let rows: Vec<&str> = csv.lines().collect();
        assert!(rows[1].contains(",builder_one,"));
        assert!(rows[2].contains(",0xfeed...0123,"));
    }

    #[test]
    fn created_label_is_anchored_to_now() {
        // 7 days before May 16 09:00 is May 9 09:00.
        let label = created_at_label(604_800, fixed_now());
        assert_eq!(label, "May 9, 09:00 UTC");
    }
}
