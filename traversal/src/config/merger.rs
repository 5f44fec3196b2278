//! Configuration merging and precedence handling.
//!
//! Scalar fields are replaced by higher-precedence sources. The `views` and
//! `resources` maps accumulate, a higher-precedence entry replacing one of
//! the same name. The tree is replaced as a whole.

use std::collections::BTreeMap;

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use traversal::config::{Config, ConfigMerger};
///
/// let low = Config { application_url: Some("http://low".to_string()), ..Default::default() };
/// let high = Config { application_url: Some("http://high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.application_url.as_deref(), Some("http://high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.application_url.is_some() {
            target.application_url.clone_from(&source.application_url);
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }

        // Trees are never merged node by node.
        if source.tree.is_some() {
            target.tree.clone_from(&source.tree);
        }

        Self::merge_map(&mut target.views, source.views.as_ref());
        Self::merge_map(&mut target.resources, source.resources.as_ref());
    }

    fn merge_map(
        target: &mut Option<BTreeMap<String, String>>,
        source: Option<&BTreeMap<String, String>>,
    ) {
        if let Some(source) = source {
            target
                .get_or_insert_with(BTreeMap::new)
                .extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}
