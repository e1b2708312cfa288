//! Typography policy: which font a content role is set in.

use super::options::Typography;
use crate::model::{ContentRole, RunStyle};

/// Resolve the character style for a role.
///
/// Code tokens use the monospaced family; every other role uses the serif
/// family. Size and weight are shared.
pub fn style_for(role: ContentRole, typography: &Typography) -> RunStyle {
    let family = match role {
        ContentRole::CodeToken => &typography.mono_family,
        ContentRole::Heading | ContentRole::Body | ContentRole::BulletMarker => {
            &typography.serif_family
        }
    };

    RunStyle {
        font_family: family.clone(),
        point_size: typography.point_size,
        bold: typography.bold,
    }
}
