//! Property-based tests for configuration building.
//!
//! Test coverage:
//! - Base URL normalization never leaves a trailing slash.
//! - Preview extensions are matched case-insensitively regardless of how they were configured.
//! - Positive chunk sizes always build; zero never does.

use proptest::prelude::*;

use opsdash_config::ConfigLoader;

fn base_url_strategy() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![Just("http"), Just("https")];
    let host = prop_oneof![Just("localhost"), Just("gateway.internal"), Just("10.0.0.5")];
    let port = 1024u16..=65000u16;
    let slash = prop_oneof![Just(""), Just("/")];
    (scheme, host, port, slash).prop_map(|(s, h, p, sl)| format!("{s}://{h}:{p}{sl}"))
}

proptest! {
    #[test]
    fn prop_base_url_normalized_without_trailing_slash(url in base_url_strategy()) {
        let config = ConfigLoader::new().with_base_url(url.clone()).build().unwrap();
        prop_assert!(!config.connection.base_url.ends_with('/'));
        prop_assert_eq!(config.connection.base_url, url.trim_end_matches('/'));
    }

    #[test]
    fn prop_configured_extension_matches_any_case(
        ext in "[a-z]{2,4}",
        stem in "[a-z0-9_]{1,12}",
        upper in any::<bool>(),
    ) {
        let configured = if upper { format!(".{}", ext.to_uppercase()) } else { ext.clone() };
        let config = ConfigLoader::new()
            .with_preview_extensions(vec![configured])
            .build()
            .unwrap();
        let key = format!("folder/{stem}.{}", ext.to_uppercase());
        prop_assert!(config.browse.is_previewable(&key));
    }

    #[test]
    fn prop_rows_per_chunk_positive_builds(rows in 1u64..10_000_000) {
        let config = ConfigLoader::new().with_rows_per_chunk(rows).build().unwrap();
        prop_assert_eq!(config.batch.default_rows_per_chunk, rows);
    }
}

#[test]
fn test_zero_rows_per_chunk_fails() {
    assert!(ConfigLoader::new().with_rows_per_chunk(0).build().is_err());
}
