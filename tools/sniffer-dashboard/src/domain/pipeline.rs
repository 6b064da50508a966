//! Presentation pipeline: category filter, then text search, then sort.
//!
//! Every stage is pure and leaves its input untouched.

use std::cmp::Ordering;

use shared_types::NetworkRecord;

/// Category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterBy {
    #[default]
    All,
    Secure,
    Open,
    /// Any label containing `WPA2`, enterprise variants included.
    Wpa2,
    /// Any label containing `WPA3`, enterprise variants included.
    Wpa3,
}

impl FilterBy {
    pub const ALL: [FilterBy; 5] = [
        FilterBy::All,
        FilterBy::Secure,
        FilterBy::Open,
        FilterBy::Wpa2,
        FilterBy::Wpa3,
    ];

    pub fn matches(self, network: &NetworkRecord) -> bool {
        match self {
            FilterBy::All => true,
            FilterBy::Secure => network.is_secured(),
            FilterBy::Open => !network.is_secured(),
            FilterBy::Wpa2 => network.encryption.contains("WPA2"),
            FilterBy::Wpa3 => network.encryption.contains("WPA3"),
        }
    }

    /// Short name used in summaries.
    pub fn name(self) -> &'static str {
        match self {
            FilterBy::All => "all",
            FilterBy::Secure => "secure",
            FilterBy::Open => "open",
            FilterBy::Wpa2 => "wpa2",
            FilterBy::Wpa3 => "wpa3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterBy::All => "All Networks",
            FilterBy::Secure => "Secure Only",
            FilterBy::Open => "Open Networks",
            FilterBy::Wpa2 => "WPA2 Only",
            FilterBy::Wpa3 => "WPA3 Only",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Rssi,
    Ssid,
    Channel,
    Encryption,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Rssi, SortBy::Ssid, SortBy::Channel, SortBy::Encryption];

    /// Base comparator, used as-is for ascending order.
    ///
    /// Signal is strongest-first in its base form; the other keys are natural
    /// ascending order.
    pub fn compare(self, a: &NetworkRecord, b: &NetworkRecord) -> Ordering {
        match self {
            SortBy::Rssi => b.rssi.cmp(&a.rssi),
            SortBy::Ssid => locale_compare(&a.ssid, &b.ssid),
            SortBy::Channel => a.channel.cmp(&b.channel),
            SortBy::Encryption => locale_compare(&a.encryption, &b.encryption),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortBy::Rssi => "rssi",
            SortBy::Ssid => "ssid",
            SortBy::Channel => "channel",
            SortBy::Encryption => "encryption",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Rssi => "Signal Strength",
            SortBy::Ssid => "Network Name",
            SortBy::Channel => "Channel",
            SortBy::Encryption => "Encryption",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Collation for display names: case-insensitive first, punctuation before
/// digits before letters, then lowercase before uppercase on otherwise equal
/// strings.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
}

fn primary_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

pub fn filter_networks(networks: &[NetworkRecord], filter: FilterBy) -> Vec<NetworkRecord> {
    networks
        .iter()
        .filter(|network| filter.matches(network))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on name, identifier or encryption label.
/// An empty query matches everything.
pub fn search_networks(networks: &[NetworkRecord], query: &str) -> Vec<NetworkRecord> {
    let needle = query.to_lowercase();
    networks
        .iter()
        .filter(|network| {
            network.ssid.to_lowercase().contains(&needle)
                || network.mac.to_lowercase().contains(&needle)
                || network.encryption.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort; descending inverts the base comparator for every key.
pub fn sort_networks(networks: &[NetworkRecord], by: SortBy, order: SortOrder) -> Vec<NetworkRecord> {
    let mut sorted = networks.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = by.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Everything that shapes the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: FilterBy,
    pub search: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ViewQuery {
    /// Filter, then search, then sort.
    pub fn apply(&self, networks: &[NetworkRecord]) -> Vec<NetworkRecord> {
        let filtered = filter_networks(networks, self.filter);
        let searched = search_networks(&filtered, &self.search);
        sort_networks(&searched, self.sort_by, self.sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn record(ssid: &str, mac: &str, rssi: i32, channel: u32, encryption: &str) -> NetworkRecord {
        NetworkRecord {
            ssid: ssid.to_string(),
            mac: mac.to_string(),
            rssi,
            channel,
            frequency: 2437,
            encryption: encryption.to_string(),
            vendor: "Cisco".to_string(),
            last_seen: Utc::now(),
            signal_quality: None,
            security_details: None,
        }
    }

    fn sample() -> Vec<NetworkRecord> {
        vec![
            record("HomeNetwork_5G", "AA:BB:XX:XX:EE:FF", -45, 36, "WPA3"),
            record("CoffeeShop_WiFi", "11:22:XX:XX:55:66", -72, 6, "WPA2"),
            record("Office_Network", "77:88:XX:XX:BB:CC", -38, 149, "WPA2-Enterprise"),
            record("Guest_Network", "99:AA:XX:XX:DD:EE", -68, 1, "Open"),
            record("Enterprise_Secure", "FF:00:XX:XX:33:44", -42, 157, "WPA3-Enterprise"),
        ]
    }

    fn ssids(networks: &[NetworkRecord]) -> Vec<&str> {
        networks.iter().map(|n| n.ssid.as_str()).collect()
    }

    #[test]
    fn test_filter_categories() {
        let networks = sample();
        assert_eq!(filter_networks(&networks, FilterBy::All).len(), 5);
        assert_eq!(filter_networks(&networks, FilterBy::Secure).len(), 4);
        assert_eq!(
            ssids(&filter_networks(&networks, FilterBy::Open)),
            vec!["Guest_Network"]
        );
        assert_eq!(
            ssids(&filter_networks(&networks, FilterBy::Wpa2)),
            vec!["CoffeeShop_WiFi", "Office_Network"]
        );
        assert_eq!(
            ssids(&filter_networks(&networks, FilterBy::Wpa3)),
            vec!["HomeNetwork_5G", "Enterprise_Secure"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let networks = sample();
        assert_eq!(
            ssids(&search_networks(&networks, "wifi")),
            vec!["CoffeeShop_WiFi"]
        );
        assert_eq!(
            ssids(&search_networks(&networks, "ff:00")),
            vec!["Enterprise_Secure"]
        );
        assert_eq!(search_networks(&networks, "enterprise").len(), 2);
        assert_eq!(search_networks(&networks, "").len(), networks.len());
        assert!(search_networks(&networks, "zzz").is_empty());
    }

    #[test]
    fn test_rssi_ascending_is_strongest_first() {
        let sorted = sort_networks(&sample(), SortBy::Rssi, SortOrder::Asc);
        let rssi: Vec<i32> = sorted.iter().map(|n| n.rssi).collect();
        assert_eq!(rssi, vec![-38, -42, -45, -68, -72]);
    }

    #[test]
    fn test_rssi_descending_inverts_base() {
        let sorted = sort_networks(&sample(), SortBy::Rssi, SortOrder::Desc);
        let rssi: Vec<i32> = sorted.iter().map(|n| n.rssi).collect();
        assert_eq!(rssi, vec![-72, -68, -45, -42, -38]);
    }

    #[test]
    fn test_channel_and_name_sort() {
        let by_channel = sort_networks(&sample(), SortBy::Channel, SortOrder::Asc);
        let channels: Vec<u32> = by_channel.iter().map(|n| n.channel).collect();
        assert_eq!(channels, vec![1, 6, 36, 149, 157]);

        let by_name = sort_networks(&sample(), SortBy::Ssid, SortOrder::Asc);
        assert_eq!(
            ssids(&by_name),
            vec![
                "CoffeeShop_WiFi",
                "Enterprise_Secure",
                "Guest_Network",
                "HomeNetwork_5G",
                "Office_Network"
            ]
        );
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Open", "WPA2"), Ordering::Less);
        assert_eq!(locale_compare("WPA2", "WPA2-Enterprise"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
        assert_eq!(locale_compare("Net_1", "Net1"), Ordering::Less);
    }

    #[test]
    fn test_view_query_composes_in_order() {
        let query = ViewQuery {
            filter: FilterBy::Secure,
            search: "network".to_string(),
            sort_by: SortBy::Ssid,
            sort_order: SortOrder::Desc,
        };
        assert_eq!(
            ssids(&query.apply(&sample())),
            vec!["Office_Network", "HomeNetwork_5G"]
        );
    }

    #[test]
    fn test_view_query_default() {
        let query = ViewQuery::default();
        assert_eq!(query.filter, FilterBy::All);
        assert!(query.search.is_empty());
        assert_eq!(query.sort_by, SortBy::Rssi);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(FilterBy::Wpa3.next(), FilterBy::All);
        assert_eq!(SortBy::Encryption.next(), SortBy::Rssi);
        assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
    }

    const ENCRYPTION_LABELS: [&str; 5] = ["Open", "WPA2", "WPA3", "WPA2-Enterprise", "WPA3-Enterprise"];

    fn arb_network() -> impl Strategy<Value = NetworkRecord> {
        (
            "[A-Za-z0-9_]{1,12}",
            -95i32..-30,
            1u32..200,
            prop::sample::select(ENCRYPTION_LABELS.to_vec()),
        )
            .prop_map(|(ssid, rssi, channel, encryption)| {
                record(&ssid, "AA:BB:XX:XX:EE:FF", rssi, channel, encryption)
            })
    }

    proptest! {
        #[test]
        fn filter_is_idempotent(networks in prop::collection::vec(arb_network(), 0..20)) {
            for filter in FilterBy::ALL {
                let once = filter_networks(&networks, filter);
                let twice = filter_networks(&once, filter);
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn descending_is_reversed_ascending(
            rssis in prop::collection::hash_set(-95i32..-30, 5),
            labels in prop::sample::subsequence(ENCRYPTION_LABELS.to_vec(), 0..=5).prop_shuffle(),
        ) {
            // Every key is distinct per record, so no sort sees a tie
            let networks: Vec<NetworkRecord> = labels
                .into_iter()
                .zip(rssis)
                .enumerate()
                .map(|(i, (encryption, rssi))| {
                    record(&format!("net{i:02}"), "AA:BB:XX:XX:EE:FF", rssi, i as u32 + 1, encryption)
                })
                .collect();

            for by in SortBy::ALL {
                let mut ascending = sort_networks(&networks, by, SortOrder::Asc);
                ascending.reverse();
                prop_assert_eq!(ascending, sort_networks(&networks, by, SortOrder::Desc));
            }
        }
    }
}
