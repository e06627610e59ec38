// Interface name classification tests

use sysmon_types::iface::{display_name, is_physical_interface};

#[test]
fn test_physical_interfaces_accepted() {
    for name in ["en0", "en1", "eth0", "wlan0", "enp3s0", "ens5", "eno1", "wlp2s0"] {
        assert!(is_physical_interface(name), "{name} should be physical");
    }
}

#[test]
fn test_named_interfaces_accepted() {
    assert!(is_physical_interface("Wi-Fi"));
    assert!(is_physical_interface("wifi"));
    assert!(is_physical_interface("Ethernet"));
}

#[test]
fn test_virtual_interfaces_rejected() {
    for name in ["lo", "docker0", "veth1a2b", "utun0", "bridge100", "awdl0", "tun0"] {
        assert!(!is_physical_interface(name), "{name} should be filtered");
    }
}

#[test]
fn test_prefix_without_digit_rejected() {
    // Prefix matches need a digit right after, so "enx" alone or "ethx"
    // do not pass.
    assert!(!is_physical_interface("enx"));
    assert!(!is_physical_interface("ethx"));
}

#[test]
fn test_classification_is_case_insensitive() {
    assert!(is_physical_interface("ETH0"));
    assert!(is_physical_interface("En0"));
}

#[test]
fn test_display_name_wifi() {
    assert_eq!(display_name("en0"), "Wi-Fi");
    assert_eq!(display_name("wlan0"), "Wi-Fi");
    assert_eq!(display_name("Wi-Fi"), "Wi-Fi");
}

#[test]
fn test_display_name_ethernet() {
    assert_eq!(display_name("en1"), "Ethernet");
    assert_eq!(display_name("eth0"), "Ethernet");
}

#[test]
fn test_display_name_passthrough() {
    assert_eq!(display_name("wlp2s0"), "wlp2s0");
    assert_eq!(display_name("ppp0"), "ppp0");
}
