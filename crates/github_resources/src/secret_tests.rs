//! Tests for Actions secret resource types.

use super::*;
use serde_json::to_string;

/// Test that debug output never contains the secret value.
#[test]
fn test_debug_output_is_redacted() {
    let secret = ActionsSecretSpec::new("lair", "RELEASE_AUTOMATION_TOKEN", "ghs_topsecret".into());

    let printed = format!("{:?}", secret);

    assert!(printed.contains("RELEASE_AUTOMATION_TOKEN"));
    assert!(!printed.contains("ghs_topsecret"));
}

/// Test that the engine-facing serialized form carries the value.
#[test]
fn test_serialization_exposes_value_for_engine() {
    let secret = ActionsSecretSpec::new("lair", "RELEASE_AUTOMATION_TOKEN", "ghs_topsecret".into());

    let json = to_string(&secret).expect("Failed to serialize");

    assert!(json.contains("\"repository\":\"lair\""));
    assert!(json.contains("\"secret_name\":\"RELEASE_AUTOMATION_TOKEN\""));
    assert!(json.contains("\"plaintext_value\":\"ghs_topsecret\""));
}
