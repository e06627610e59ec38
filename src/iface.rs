// Network interface name classification
//
// Pure string logic over OS interface names; the sampler uses these to
// filter virtual adapters out of a snapshot and to pick the human label
// for `NetworkInterface::display_name`.

/// Prefixes that name a physical adapter when followed by a digit:
/// classic Linux names plus the predictable-naming scheme.
const PHYSICAL_PREFIXES: [&str; 7] = ["eth", "wlan", "wlp", "enp", "ens", "eno", "enx"];

fn prefix_then_digit(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// Whether an interface name looks like a physical adapter. Bridges, tunnels,
/// containers' veth pairs and loopback all report false; unrecognized names
/// are filtered out rather than shown.
pub fn is_physical_interface(name: &str) -> bool {
    let name = name.to_lowercase();

    // macOS: en0, en1, ... but not bridge/virtual/utun variants
    if prefix_then_digit(&name, "en") {
        return !(name.contains("bridge") || name.contains("virtual") || name.contains("utun"));
    }

    if PHYSICAL_PREFIXES.iter().any(|p| prefix_then_digit(&name, p)) {
        return true;
    }

    matches!(name.as_str(), "wi-fi" | "wifi" | "ethernet")
}

/// Human label for an interface name. On macOS `en0` is conventionally the
/// Wi-Fi adapter and `en1`..`en5` are wired; unknown names pass through
/// unchanged.
pub fn display_name(name: &str) -> String {
    let lower = name.to_lowercase();

    if lower == "en0" || lower.contains("wi-fi") || lower.contains("wifi") || lower.contains("wlan")
    {
        "Wi-Fi".to_string()
    } else if ["en1", "en2", "en3", "en4", "en5"]
        .iter()
        .any(|p| lower.starts_with(p))
        || lower.contains("eth")
    {
        "Ethernet".to_string()
    } else if lower.contains("thunderbolt") {
        "Thunderbolt".to_string()
    } else {
        name.to_string()
    }
}
