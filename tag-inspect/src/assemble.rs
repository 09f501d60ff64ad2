//! Build a [`Tag`] from configuration using the matching constructor

use tag_model::Tag;
use tracing::debug;

use crate::config::Config;

/// Pick the constructor implied by which attributes are present
///
/// - nothing: `Tag::new`
/// - id only: `Tag::with_id`
/// - name and/or color, no id: `Tag::with_name_color`
/// - id plus name and/or color: `Tag::from_parts`
///
/// A missing name or color becomes the empty string.
pub fn build_tag(config: &Config) -> Tag {
    let name = config.tag_name.as_deref();
    let color = config.tag_color.as_deref();
    let has_text = name.is_some() || color.is_some();

    match (config.tag_id, has_text) {
        (None, false) => {
            debug!("No tag attributes configured, using empty tag");
            Tag::new()
        }
        (Some(id), false) => {
            debug!(id, "Building tag from id only");
            Tag::with_id(id)
        }
        (None, true) => {
            debug!("Building unassigned tag from name and color");
            Tag::with_name_color(name.unwrap_or_default(), color.unwrap_or_default())
        }
        (Some(id), true) => {
            debug!(id, "Building tag from id, name and color");
            Tag::from_parts(id, name.unwrap_or_default(), color.unwrap_or_default())
        }
    }
}
