// Rendering surface trait - addressable display elements and control groups
use std::collections::BTreeMap;

/// Control group holding the grid/list view toggles.
pub const VIEW_TOGGLES: &str = "view-toggle";
/// Control group holding the timeline period buttons.
pub const CHART_PERIODS: &str = "chart-btn";
/// Control group holding the sidebar navigation items.
pub const NAV_ITEMS: &str = "nav-item";

pub trait RenderSurface: Send + Sync {
    /// Whether an element with this key exists.
    fn has_element(&self, key: &str) -> bool;

    /// Current text of an element, `None` when it does not exist.
    fn get_text(&self, key: &str) -> Option<String>;

    /// Replace an element's text. Returns `false` when the element does not exist.
    fn set_text(&self, key: &str, text: &str) -> bool;

    /// Make `key` the sole active member of `group`.
    /// Returns `false` (and changes nothing) when the group or member is unknown.
    fn activate(&self, group: &str, key: &str) -> bool;

    /// Active member of `group`, if any.
    fn active(&self, group: &str) -> Option<String>;

    /// All element texts by key.
    fn texts(&self) -> BTreeMap<String, String>;
}
