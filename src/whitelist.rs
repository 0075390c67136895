// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{AttributeId, ElementId};

/// Attributes allowed on every supported element.
pub const COMMON_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::Id,
    AttributeId::Fill,
    AttributeId::FillOpacity,
    AttributeId::Stroke,
    AttributeId::StrokeWidth,
    AttributeId::StrokeOpacity,
    AttributeId::Opacity,
    AttributeId::StrokeLinecap,
    AttributeId::StrokeLinejoin,
    AttributeId::StrokeDasharray,
    AttributeId::StrokeDashoffset,
    AttributeId::X,
    AttributeId::Y,
    AttributeId::Rotate,
    AttributeId::Scale,
    AttributeId::Origin,
    AttributeId::OriginX,
    AttributeId::OriginY,
    AttributeId::Transform,
    AttributeId::ClipPath,
    AttributeId::FillRule,
];

const SVG_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::ViewBox,
    AttributeId::Width,
    AttributeId::Height,
];

const G_ATTRIBUTES: &[AttributeId] = &[AttributeId::Id];

const CIRCLE_ATTRIBUTES: &[AttributeId] = &[AttributeId::Cx, AttributeId::Cy, AttributeId::R];

const PATH_ATTRIBUTES: &[AttributeId] = &[AttributeId::D];

const RECT_ATTRIBUTES: &[AttributeId] = &[AttributeId::Width, AttributeId::Height];

const LINE_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::X1,
    AttributeId::Y1,
    AttributeId::X2,
    AttributeId::Y2,
];

const LINEAR_GRADIENT_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::X1,
    AttributeId::Y1,
    AttributeId::X2,
    AttributeId::Y2,
    AttributeId::Id,
    AttributeId::GradientUnits,
    AttributeId::Fx,
    AttributeId::Fy,
];

const RADIAL_GRADIENT_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::Cx,
    AttributeId::Cy,
    AttributeId::R,
    AttributeId::Id,
    AttributeId::GradientUnits,
    AttributeId::Fx,
    AttributeId::Fy,
];

const STOP_ATTRIBUTES: &[AttributeId] = &[AttributeId::Offset, AttributeId::StopColor];

const ELLIPSE_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::Cx,
    AttributeId::Cy,
    AttributeId::Rx,
    AttributeId::Ry,
];

const TEXT_ATTRIBUTES: &[AttributeId] = &[
    AttributeId::FontFamily,
    AttributeId::FontSize,
    AttributeId::FontWeight,
    AttributeId::TextAnchor,
];

const POINTS_ATTRIBUTES: &[AttributeId] = &[AttributeId::Points];

const USE_ATTRIBUTES: &[AttributeId] = &[AttributeId::Href];

impl ElementId {
    /// Returns attributes allowed on this element in addition to
    /// [`COMMON_ATTRIBUTES`].
    pub fn attributes(&self) -> &'static [AttributeId] {
        match self {
            ElementId::Svg => SVG_ATTRIBUTES,
            ElementId::G => G_ATTRIBUTES,
            ElementId::Circle => CIRCLE_ATTRIBUTES,
            ElementId::Path => PATH_ATTRIBUTES,
            ElementId::Rect => RECT_ATTRIBUTES,
            ElementId::Defs => &[],
            ElementId::Use => USE_ATTRIBUTES,
            ElementId::Line => LINE_ATTRIBUTES,
            ElementId::LinearGradient => LINEAR_GRADIENT_ATTRIBUTES,
            ElementId::RadialGradient => RADIAL_GRADIENT_ATTRIBUTES,
            ElementId::Stop => STOP_ATTRIBUTES,
            ElementId::Ellipse => ELLIPSE_ATTRIBUTES,
            ElementId::Polygon | ElementId::Polyline => POINTS_ATTRIBUTES,
            ElementId::Text | ElementId::Tspan => TEXT_ATTRIBUTES,
        }
    }

    /// Checks that an attribute is allowed on this element.
    #[inline]
    pub fn allows(&self, aid: AttributeId) -> bool {
        COMMON_ATTRIBUTES.contains(&aid) || self.attributes().contains(&aid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_attributes_are_allowed_everywhere() {
        for eid in [ElementId::Svg, ElementId::Defs, ElementId::Stop, ElementId::Use] {
            assert!(eid.allows(AttributeId::Transform));
            assert!(eid.allows(AttributeId::FillRule));
        }
    }

    #[test]
    fn element_specific_attributes() {
        assert!(ElementId::Circle.allows(AttributeId::R));
        assert!(!ElementId::Rect.allows(AttributeId::R));
        assert!(ElementId::Tspan.allows(AttributeId::FontSize));
        assert!(!ElementId::G.allows(AttributeId::FontSize));
        assert!(ElementId::Polyline.allows(AttributeId::Points));
        assert!(!ElementId::Path.allows(AttributeId::Href));
    }
}
