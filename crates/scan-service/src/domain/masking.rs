//! Hardware identifier redaction.
//!
//! The third and fourth octets are replaced with `XX`; the rest is kept so a
//! network stays recognizable without exposing its full identifier.

use shared_types::{NetworkRecord, MASK_TOKEN};

const OCTET_COUNT: usize = 6;

/// Redact octets 3 and 4 of a colon-separated identifier.
///
/// Anything that is not exactly six colon-separated parts is fully masked.
pub fn mask_mac(mac: &str) -> String {
    let octets: Vec<&str> = mac.split(':').collect();
    if octets.len() != OCTET_COUNT {
        return vec![MASK_TOKEN; OCTET_COUNT].join(":");
    }

    octets
        .iter()
        .enumerate()
        .map(|(i, octet)| if i == 2 || i == 3 { MASK_TOKEN } else { octet })
        .collect::<Vec<_>>()
        .join(":")
}

/// Apply [`mask_mac`] to a record leaving the service.
pub fn mask_record(mut record: NetworkRecord) -> NetworkRecord {
    record.mac = mask_mac(&record.mac);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mask_catalog_identifier() {
        assert_eq!(mask_mac("AA:BB:CC:DD:EE:FF"), "AA:BB:XX:XX:EE:FF");
        assert_eq!(mask_mac("11:22:33:44:55:66"), "11:22:XX:XX:55:66");
    }

    #[test]
    fn test_mask_is_idempotent() {
        let once = mask_mac("FF:00:11:22:33:44");
        assert_eq!(mask_mac(&once), once);
    }

    #[test]
    fn test_malformed_identifier_fully_masked() {
        assert_eq!(mask_mac(""), "XX:XX:XX:XX:XX:XX");
        assert_eq!(mask_mac("AA:BB:CC"), "XX:XX:XX:XX:XX:XX");
        assert_eq!(mask_mac("AA:BB:CC:DD:EE:FF:00"), "XX:XX:XX:XX:XX:XX");
    }

    proptest! {
        #[test]
        fn masked_keeps_outer_octets(octets in prop::array::uniform6("[0-9A-F]{2}")) {
            let mac = octets.join(":");
            let masked = mask_mac(&mac);
            let parts: Vec<&str> = masked.split(':').collect();
            prop_assert_eq!(parts.len(), 6);
            prop_assert_eq!(parts[2], "XX");
            prop_assert_eq!(parts[3], "XX");
            prop_assert_eq!(parts[0], octets[0].as_str());
            prop_assert_eq!(parts[1], octets[1].as_str());
            prop_assert_eq!(parts[4], octets[4].as_str());
            prop_assert_eq!(parts[5], octets[5].as_str());
        }
    }
}
