//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, TreeNode};
use super::validator::ConfigValidator;
use crate::logging::LogLevel;
use proptest::prelude::*;

fn log_level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Quiet),
        Just(LogLevel::Normal),
        Just(LogLevel::Verbose),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("https?://[a-z]{1,10}\\.example"),
        prop::option::of(log_level_strategy()),
        prop::option::of(prop::collection::btree_map("[a-z]{1,8}", "[a-z ]{0,8}", 0..4)),
    )
        .prop_map(|(application_url, log_mode, views)| Config {
            application_url,
            log_mode,
            views,
            ..Config::default()
        })
}

fn tree_strategy() -> impl Strategy<Value = TreeNode> {
    let leaf = "[a-z]{0,8}".prop_map(|value| TreeNode {
        value: Some(value),
        ..TreeNode::default()
    });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (any::<bool>(), prop::collection::btree_map("[a-z][a-z0-9._-]{0,8}", inner, 0..4)).prop_map(
            |(site, children)| TreeNode {
                site,
                value: None,
                children,
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Merging a config into itself changes nothing.
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Set fields of the higher-precedence source always win.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        if high.application_url.is_some() {
            prop_assert_eq!(&merged.application_url, &high.application_url);
        } else {
            prop_assert_eq!(&merged.application_url, &low.application_url);
        }
        if high.log_mode.is_some() {
            prop_assert_eq!(merged.log_mode, high.log_mode);
        }
        for (name, value) in high.views.iter().flatten() {
            prop_assert_eq!(merged.views.as_ref().and_then(|v| v.get(name)), Some(value));
        }
    }

    // Generated trees are valid and survive a YAML round trip.
    #[test]
    fn tree_yaml_round_trip(tree in tree_strategy()) {
        let config = Config { tree: Some(tree), ..Config::default() };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
