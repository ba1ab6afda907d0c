/// Attribute names the Fono API is known to return, in ascending order.
///
/// Collected by querying the most common brands and taking the union of the
/// keys that came back. The service may return names outside this list; those
/// are kept in [`AttributeMap`](crate::AttributeMap) but only show up in
/// tabular views when asked for explicitly.
pub const DEFAULT_ATTRIBUTES: [&str; 69] = [
    "Brand",
    "DeviceName",
    "_2g_bands",
    "_3_5mm_jack_",
    "_3g_bands",
    "_4g_bands",
    "alert_types",
    "announced",
    "audio_quality",
    "battery_c",
    "bluetooth",
    "body_c",
    "browser",
    "build",
    "call_records",
    "camera",
    "camera_c",
    "card_slot",
    "chipset",
    "colors",
    "cpu",
    "dimensions",
    "display",
    "display_c",
    "edge",
    "features",
    "features_c",
    "games",
    "gprs",
    "gps",
    "gpu",
    "infrared_port",
    "internal",
    "java",
    "keyboard",
    "loudspeaker",
    "loudspeaker_",
    "memory_c",
    "messaging",
    "multitouch",
    "music_play",
    "network_c",
    "nfc",
    "os",
    "performance",
    "phonebook",
    "price",
    "primary_",
    "protection",
    "radio",
    "resolution",
    "sar",
    "sar_eu",
    "sar_us",
    "secondary",
    "sensors",
    "sim",
    "size",
    "sound_c",
    "speed",
    "stand_by",
    "status",
    "talk_time",
    "technology",
    "type",
    "usb",
    "video",
    "weight",
    "wlan",
];

/// Owned copy of [`DEFAULT_ATTRIBUTES`], for views that need `Vec<String>` columns.
pub fn default_columns() -> Vec<String> {
    DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attributes_sorted_and_unique() {
        for pair in DEFAULT_ATTRIBUTES.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_default_columns_matches_constant() {
        let columns = default_columns();
        assert_eq!(columns.len(), 69);
        assert_eq!(columns[0], "Brand");
        assert_eq!(columns[68], "wlan");
    }
}
