//! Tag Model

use std::fmt;

/// Identifier carried by a tag that has not been persisted yet.
pub const UNASSIGNED_ID: i32 = -1;

/// Color shown for a tag whose color is empty.
pub const DEFAULT_DISPLAY_COLOR: &str = "#49a3d8";

/// Label shown for a tag whose name is empty.
pub const DEFAULT_DISPLAY_LABEL: &str = "Tag";

/// Tag entity (标签：名称 + 颜色)
///
/// The three fields are independent. Any integer and any string are
/// accepted; `color` is usually a color name or hex code but its format is
/// never checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    id: i32,
    name: String,
    color: String,
}

impl Default for Tag {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: String::new(),
            color: String::new(),
        }
    }
}

impl Tag {
    /// Empty tag with an unassigned id
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag known only by its id; name and color stay empty
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Tag that has not been persisted yet, so the id stays at [`UNASSIGNED_ID`]
    pub fn with_name_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn from_parts(id: i32, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    // ==================== Display helpers ====================

    /// Whether the id differs from the [`UNASSIGNED_ID`] sentinel
    pub fn is_assigned(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Name for rendering, falling back to [`DEFAULT_DISPLAY_LABEL`] when empty
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_DISPLAY_LABEL
        } else {
            &self.name
        }
    }

    /// Color for rendering, falling back to [`DEFAULT_DISPLAY_COLOR`] when empty
    pub fn display_color(&self) -> &str {
        if self.color.is_empty() {
            DEFAULT_DISPLAY_COLOR
        } else {
            &self.color
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_assigned() {
            write!(f, "#{} {} ({})", self.id, self.name, self.color)
        } else {
            write!(f, "#- {} ({})", self.name, self.color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unassigned_and_empty() {
        let tag = Tag::new();
        assert_eq!(tag.id(), UNASSIGNED_ID);
        assert_eq!(tag.id(), -1);
        assert_eq!(tag.name(), "");
        assert_eq!(tag.color(), "");
        assert_eq!(tag, Tag::default());
    }

    #[test]
    fn test_with_id_leaves_text_empty() {
        let tag = Tag::with_id(42);
        assert_eq!(tag.id(), 42);
        assert_eq!(tag.name(), "");
        assert_eq!(tag.color(), "");
    }

    #[test]
    fn test_with_name_color_keeps_sentinel() {
        let tag = Tag::with_name_color("urgent", "red");
        assert_eq!(tag.id(), UNASSIGNED_ID);
        assert_eq!(tag.name(), "urgent");
        assert_eq!(tag.color(), "red");
        assert!(!tag.is_assigned());
    }

    #[test]
    fn test_from_parts() {
        let tag = Tag::from_parts(7, "urgent", "red");
        assert_eq!(tag.id(), 7);
        assert_eq!(tag.name(), "urgent");
        assert_eq!(tag.color(), "red");
    }

    #[test]
    fn test_set_color_leaves_other_fields() {
        let mut tag = Tag::from_parts(7, "urgent", "red");
        tag.set_color("blue");
        assert_eq!(tag.color(), "blue");
        assert_eq!(tag.id(), 7);
        assert_eq!(tag.name(), "urgent");
    }

    #[test]
    fn test_setters_accept_anything() {
        let mut tag = Tag::from_parts(3, "a", "b");
        tag.set_id(i32::MIN);
        tag.set_name("");
        tag.set_color("not a color at all");
        assert_eq!(tag.id(), i32::MIN);
        assert_eq!(tag.name(), "");
        assert_eq!(tag.color(), "not a color at all");

        tag.set_id(UNASSIGNED_ID);
        assert!(!tag.is_assigned());
    }

    #[test]
    fn test_display_fallbacks() {
        let tag = Tag::with_id(1);
        assert_eq!(tag.display_name(), DEFAULT_DISPLAY_LABEL);
        assert_eq!(tag.display_color(), DEFAULT_DISPLAY_COLOR);
        // stored fields stay empty
        assert_eq!(tag.name(), "");
        assert_eq!(tag.color(), "");

        let tag = Tag::with_name_color("bug", "#ff0000");
        assert_eq!(tag.display_name(), "bug");
        assert_eq!(tag.display_color(), "#ff0000");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Tag::from_parts(7, "urgent", "red").to_string(), "#7 urgent (red)");
        assert_eq!(Tag::with_name_color("draft", "").to_string(), "#- draft ()");
    }
}
