//! Overlay merge: overlay values win, every key survives

use crate::types::PropertySet;

/// Keys affected by a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Base keys whose value the overlay changed, in base order
    pub overridden: Vec<String>,
    /// Overlay-only keys appended after the base keys, in overlay order
    pub added: Vec<String>,
}

impl MergeReport {
    pub fn is_noop(&self) -> bool {
        self.overridden.is_empty() && self.added.is_empty()
    }
}

/// Stateless merger of property sets
///
/// # Example
///
/// ```
/// use layerconf_core::{OverlayMerger, PropertySet};
///
/// let base: PropertySet = vec![("a", "1"), ("c", "3")].into_iter().collect();
/// let overlay: PropertySet = vec![("a", "2"), ("b", "4")].into_iter().collect();
///
/// let merged = OverlayMerger::merge(&base, &overlay);
/// let entries: Vec<_> = merged.iter().collect();
/// assert_eq!(entries, vec![("a", "2"), ("c", "3"), ("b", "4")]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayMerger;

impl OverlayMerger {
    /// Base keys in base order (overlay value where the overlay has one),
    /// then overlay-only keys in overlay order
    pub fn merge(base: &PropertySet, overlay: &PropertySet) -> PropertySet {
        Self::merge_with_report(base, overlay).0
    }

    /// Same as `merge`, also reporting which keys were overridden or added
    pub fn merge_with_report(base: &PropertySet, overlay: &PropertySet) -> (PropertySet, MergeReport) {
        let mut merged = PropertySet::new();
        let mut report = MergeReport::default();

        for (key, value) in base.iter() {
            match overlay.get(key) {
                Some(over) => {
                    if over != value {
                        report.overridden.push(key.to_string());
                    }
                    merged.insert(key, over);
                }
                None => {
                    merged.insert(key, value);
                }
            }
        }

        for (key, value) in overlay.iter().filter(|(k, _)| !base.contains_key(k)) {
            report.added.push(key.to_string());
            merged.insert(key, value);
        }

        (merged, report)
    }

    /// Fold several layers left to right; later layers win
    pub fn merge_all<'a, I>(layers: I) -> PropertySet
    where
        I: IntoIterator<Item = &'a PropertySet>,
    {
        layers
            .into_iter()
            .fold(PropertySet::new(), |acc, layer| Self::merge(&acc, layer))
    }
}
