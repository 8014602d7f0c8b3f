//! Data roles for item models.
//!
//! Roles define what type of data is being requested or set on a model item.
//! Each cell can have multiple pieces of data associated with it, distinguished
//! by their role.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Standard roles for accessing different aspects of item data.
///
/// When querying data from a model via `ItemModel::data()`, the role specifies
/// what information is being requested. Each cell can have data for multiple
/// roles.
///
/// # Standard Roles
///
/// - **Display**: The primary text to show (e.g., item label)
/// - **Edit**: Value for editing (may differ from display text)
/// - **ToolTip**: Text shown when hovering over the item
/// - **CheckState**: Checkbox state (unchecked, checked, partial)
/// - **User(n)**: Application-specific annotations
///
/// # Example
///
/// ```
/// use horizon_grid::model::ItemRole;
///
/// assert_eq!(ItemRole::Edit.value(), Some(2));
/// assert_eq!(ItemRole::from_value(258), Some(ItemRole::User(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ItemRole {
    /// Primary text to display. Usually a `String`.
    Display = 0,

    /// Icon or decoration to show.
    Decoration = 1,

    /// Value for editing (may be richer than display text). Type depends on item.
    Edit = 2,

    /// Tooltip text shown on hover.
    ToolTip = 3,

    /// Text shown in status bar when item is selected.
    StatusTip = 4,

    /// Extended "What's This?" help text.
    WhatsThis = 5,

    /// Custom font for this item.
    Font = 6,

    /// Text alignment for this item.
    TextAlignment = 7,

    /// Background color for the item.
    BackgroundColor = 8,

    /// Foreground (text) color for the item.
    ForegroundColor = 9,

    /// Check state for checkable items. Should hold `CheckState`.
    CheckState = 10,

    /// Size hint for the item. Should hold `Size`.
    SizeHint = 11,

    /// Accessible name for the item.
    AccessibleText = 12,

    /// Accessible description for screen readers.
    AccessibleDescription = 13,

    /// First role available for application-specific data.
    /// Use `ItemRole::User(n)` for custom roles where n >= 0.
    User(u32) = 256,
}

impl ItemRole {
    /// Returns `true` if this is a user-defined role.
    #[inline]
    pub fn is_user_role(&self) -> bool {
        matches!(self, ItemRole::User(_))
    }

    /// Largest user offset whose numeric value fits in a `u32`.
    pub const MAX_USER: u32 = u32::MAX - 256;

    /// Returns the numeric value of this role.
    ///
    /// Standard roles have fixed values 0-255.
    /// User roles have values >= 256; `None` for offsets above [`Self::MAX_USER`].
    pub fn value(&self) -> Option<u32> {
        let value = match self {
            ItemRole::Display => 0,
            ItemRole::Decoration => 1,
            ItemRole::Edit => 2,
            ItemRole::ToolTip => 3,
            ItemRole::StatusTip => 4,
            ItemRole::WhatsThis => 5,
            ItemRole::Font => 6,
            ItemRole::TextAlignment => 7,
            ItemRole::BackgroundColor => 8,
            ItemRole::ForegroundColor => 9,
            ItemRole::CheckState => 10,
            ItemRole::SizeHint => 11,
            ItemRole::AccessibleText => 12,
            ItemRole::AccessibleDescription => 13,
            ItemRole::User(n) => return 256u32.checked_add(*n),
        };
        Some(value)
    }

    /// Creates an ItemRole from a numeric value.
    ///
    /// Returns `None` for reserved but undefined role values (14-255). Every
    /// value from 256 up maps to a user role.
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(ItemRole::Display),
            1 => Some(ItemRole::Decoration),
            2 => Some(ItemRole::Edit),
            3 => Some(ItemRole::ToolTip),
            4 => Some(ItemRole::StatusTip),
            5 => Some(ItemRole::WhatsThis),
            6 => Some(ItemRole::Font),
            7 => Some(ItemRole::TextAlignment),
            8 => Some(ItemRole::BackgroundColor),
            9 => Some(ItemRole::ForegroundColor),
            10 => Some(ItemRole::CheckState),
            11 => Some(ItemRole::SizeHint),
            12 => Some(ItemRole::AccessibleText),
            13 => Some(ItemRole::AccessibleDescription),
            14..=255 => None, // Reserved for future standard roles
            n => Some(ItemRole::User(n - 256)),
        }
    }
}

/// Check state for checkable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// Item is unchecked.
    #[default]
    Unchecked,
    /// Item is partially checked (for tri-state checkboxes).
    PartiallyChecked,
    /// Item is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if the item is checked (fully or partially).
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Toggles between Unchecked and Checked.
    /// PartiallyChecked becomes Unchecked.
    pub fn toggle(&self) -> CheckState {
        match self {
            CheckState::Unchecked => CheckState::Checked,
            CheckState::PartiallyChecked | CheckState::Checked => CheckState::Unchecked,
        }
    }
}

/// Tagged container for a single role value of a cell.
///
/// `ItemData` is a closed set of variants. Anything that does not fit the
/// built-in variants travels as [`ItemData::Custom`], an opaque shared
/// payload that is recovered with [`downcast`](ItemData::downcast).
///
/// `ItemData::None` is the "absent" value: reads of unset roles and
/// out-of-range cells return it, and writing it clears a role.
///
/// # Example
///
/// ```
/// use horizon_grid::model::ItemData;
///
/// let data = ItemData::from("Hello");
/// assert_eq!(data.as_string(), Some("Hello"));
///
/// let data = ItemData::new(42u32);
/// assert_eq!(data.downcast::<u32>(), Some(&42));
/// ```
#[derive(Clone, Default)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data (for Display, ToolTip, etc.).
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
    /// Check state data.
    CheckState(CheckState),
    /// Size data (width, height).
    Size(f32, f32),
    /// Opaque payload, shared on clone.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl ItemData {
    /// Creates new custom data from any type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        ItemData::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an owned string.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemData::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ItemData::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ItemData::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the data as check state.
    pub fn as_check_state(&self) -> Option<CheckState> {
        match self {
            ItemData::CheckState(s) => Some(*s),
            _ => None,
        }
    }

    /// Attempts to get the data as a size tuple.
    pub fn as_size(&self) -> Option<(f32, f32)> {
        match self {
            ItemData::Size(w, h) => Some((*w, *h)),
            _ => None,
        }
    }

    /// Attempts to downcast custom data to the specified type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            ItemData::Custom(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemData::None => write!(f, "None"),
            ItemData::String(s) => f.debug_tuple("String").field(s).finish(),
            ItemData::Int(n) => f.debug_tuple("Int").field(n).finish(),
            ItemData::Float(n) => f.debug_tuple("Float").field(n).finish(),
            ItemData::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ItemData::CheckState(s) => f.debug_tuple("CheckState").field(s).finish(),
            ItemData::Size(w, h) => f.debug_tuple("Size").field(w).field(h).finish(),
            ItemData::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Custom payloads compare by identity; everything else by value.
impl PartialEq for ItemData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ItemData::None, ItemData::None) => true,
            (ItemData::String(a), ItemData::String(b)) => a == b,
            (ItemData::Int(a), ItemData::Int(b)) => a == b,
            (ItemData::Float(a), ItemData::Float(b)) => a == b,
            (ItemData::Bool(a), ItemData::Bool(b)) => a == b,
            (ItemData::CheckState(a), ItemData::CheckState(b)) => a == b,
            (ItemData::Size(aw, ah), ItemData::Size(bw, bh)) => aw == bw && ah == bh,
            (ItemData::Custom(a), ItemData::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<i32> for ItemData {
    fn from(n: i32) -> Self {
        ItemData::Int(n as i64)
    }
}

impl From<f64> for ItemData {
    fn from(n: f64) -> Self {
        ItemData::Float(n)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

impl From<CheckState> for ItemData {
    fn from(s: CheckState) -> Self {
        ItemData::CheckState(s)
    }
}

impl From<Option<String>> for ItemData {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => ItemData::String(s),
            None => ItemData::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_role_values() {
        assert_eq!(ItemRole::Display.value(), Some(0));
        assert_eq!(ItemRole::Edit.value(), Some(2));
        assert_eq!(ItemRole::User(0).value(), Some(256));
        assert_eq!(ItemRole::User(10).value(), Some(266));
    }

    #[test]
    fn test_user_role_value_at_numeric_limit() {
        assert_eq!(ItemRole::User(ItemRole::MAX_USER).value(), Some(u32::MAX));
        assert_eq!(ItemRole::User(ItemRole::MAX_USER + 1).value(), None);
        assert_eq!(ItemRole::User(u32::MAX).value(), None);
        assert_eq!(
            ItemRole::from_value(u32::MAX),
            Some(ItemRole::User(ItemRole::MAX_USER))
        );
    }

    #[test]
    fn test_item_role_from_value() {
        assert_eq!(ItemRole::from_value(0), Some(ItemRole::Display));
        assert_eq!(ItemRole::from_value(10), Some(ItemRole::CheckState));
        assert_eq!(ItemRole::from_value(256), Some(ItemRole::User(0)));
        assert_eq!(ItemRole::from_value(100), None); // Reserved
    }

    #[test]
    fn test_check_state_toggle() {
        assert_eq!(CheckState::Unchecked.toggle(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggle(), CheckState::Unchecked);
        assert_eq!(CheckState::PartiallyChecked.toggle(), CheckState::Unchecked);
    }

    #[test]
    fn test_item_data_string() {
        let data = ItemData::from("hello");
        assert_eq!(data.as_string(), Some("hello"));
        assert!(data.as_int().is_none());
    }

    #[test]
    fn test_custom_payload_survives_clone() {
        #[derive(Debug, PartialEq)]
        struct Annotation(u32);

        let data = ItemData::new(Annotation(42));
        let copy = data.clone();
        assert_eq!(copy.downcast::<Annotation>(), Some(&Annotation(42)));
        assert!(copy.downcast::<u32>().is_none());
        assert_eq!(data, copy);
        assert_ne!(data, ItemData::new(Annotation(42)));
    }
}
