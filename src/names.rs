// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all supported SVG elements.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[allow(missing_docs)]
pub enum ElementId {
    Circle,
    Defs,
    Ellipse,
    G,
    Line,
    LinearGradient,
    Path,
    Polygon,
    Polyline,
    RadialGradient,
    Rect,
    Stop,
    Svg,
    Text,
    Tspan,
    Use,
}

impl ElementId {
    /// Parses an element name.
    ///
    /// Names are case-sensitive.
    pub fn from_str(text: &str) -> Option<ElementId> {
        match text {
            "circle" => Some(ElementId::Circle),
            "defs" => Some(ElementId::Defs),
            "ellipse" => Some(ElementId::Ellipse),
            "g" => Some(ElementId::G),
            "line" => Some(ElementId::Line),
            "linearGradient" => Some(ElementId::LinearGradient),
            "path" => Some(ElementId::Path),
            "polygon" => Some(ElementId::Polygon),
            "polyline" => Some(ElementId::Polyline),
            "radialGradient" => Some(ElementId::RadialGradient),
            "rect" => Some(ElementId::Rect),
            "stop" => Some(ElementId::Stop),
            "svg" => Some(ElementId::Svg),
            "text" => Some(ElementId::Text),
            "tspan" => Some(ElementId::Tspan),
            "use" => Some(ElementId::Use),
            _ => None,
        }
    }

    /// Returns the element name.
    pub fn to_str(&self) -> &'static str {
        match self {
            ElementId::Circle => "circle",
            ElementId::Defs => "defs",
            ElementId::Ellipse => "ellipse",
            ElementId::G => "g",
            ElementId::Line => "line",
            ElementId::LinearGradient => "linearGradient",
            ElementId::Path => "path",
            ElementId::Polygon => "polygon",
            ElementId::Polyline => "polyline",
            ElementId::RadialGradient => "radialGradient",
            ElementId::Rect => "rect",
            ElementId::Stop => "stop",
            ElementId::Svg => "svg",
            ElementId::Text => "text",
            ElementId::Tspan => "tspan",
            ElementId::Use => "use",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// List of all attributes that can appear in a compiled node.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[allow(missing_docs)]
pub enum AttributeId {
    ClipPath,
    Cx,
    Cy,
    D,
    Fill,
    FillOpacity,
    FillRule,
    FontFamily,
    FontSize,
    FontWeight,
    Fx,
    Fy,
    GradientUnits,
    Height,
    Href,
    Id,
    Offset,
    Opacity,
    Origin,
    OriginX,
    OriginY,
    Points,
    R,
    Rotate,
    Rx,
    Ry,
    Scale,
    StopColor,
    Stroke,
    StrokeDasharray,
    StrokeDashoffset,
    StrokeLinecap,
    StrokeLinejoin,
    StrokeOpacity,
    StrokeWidth,
    TextAnchor,
    Transform,
    ViewBox,
    Width,
    X,
    X1,
    X2,
    Y,
    Y1,
    Y2,
}

impl AttributeId {
    /// Parses a normalized (camel-case) attribute name.
    pub fn from_str(text: &str) -> Option<AttributeId> {
        match text {
            "clipPath" => Some(AttributeId::ClipPath),
            "cx" => Some(AttributeId::Cx),
            "cy" => Some(AttributeId::Cy),
            "d" => Some(AttributeId::D),
            "fill" => Some(AttributeId::Fill),
            "fillOpacity" => Some(AttributeId::FillOpacity),
            "fillRule" => Some(AttributeId::FillRule),
            "fontFamily" => Some(AttributeId::FontFamily),
            "fontSize" => Some(AttributeId::FontSize),
            "fontWeight" => Some(AttributeId::FontWeight),
            "fx" => Some(AttributeId::Fx),
            "fy" => Some(AttributeId::Fy),
            "gradientUnits" => Some(AttributeId::GradientUnits),
            "height" => Some(AttributeId::Height),
            "href" => Some(AttributeId::Href),
            "id" => Some(AttributeId::Id),
            "offset" => Some(AttributeId::Offset),
            "opacity" => Some(AttributeId::Opacity),
            "origin" => Some(AttributeId::Origin),
            "originX" => Some(AttributeId::OriginX),
            "originY" => Some(AttributeId::OriginY),
            "points" => Some(AttributeId::Points),
            "r" => Some(AttributeId::R),
            "rotate" => Some(AttributeId::Rotate),
            "rx" => Some(AttributeId::Rx),
            "ry" => Some(AttributeId::Ry),
            "scale" => Some(AttributeId::Scale),
            "stopColor" => Some(AttributeId::StopColor),
            "stroke" => Some(AttributeId::Stroke),
            "strokeDasharray" => Some(AttributeId::StrokeDasharray),
            "strokeDashoffset" => Some(AttributeId::StrokeDashoffset),
            "strokeLinecap" => Some(AttributeId::StrokeLinecap),
            "strokeLinejoin" => Some(AttributeId::StrokeLinejoin),
            "strokeOpacity" => Some(AttributeId::StrokeOpacity),
            "strokeWidth" => Some(AttributeId::StrokeWidth),
            "textAnchor" => Some(AttributeId::TextAnchor),
            "transform" => Some(AttributeId::Transform),
            "viewBox" => Some(AttributeId::ViewBox),
            "width" => Some(AttributeId::Width),
            "x" => Some(AttributeId::X),
            "x1" => Some(AttributeId::X1),
            "x2" => Some(AttributeId::X2),
            "y" => Some(AttributeId::Y),
            "y1" => Some(AttributeId::Y1),
            "y2" => Some(AttributeId::Y2),
            _ => None,
        }
    }

    /// Maps a CSS property name, as used inside a `style` attribute,
    /// to an attribute.
    pub fn from_property(text: &str) -> Option<AttributeId> {
        match text {
            "clip-path" => Some(AttributeId::ClipPath),
            "fill" => Some(AttributeId::Fill),
            "fill-opacity" => Some(AttributeId::FillOpacity),
            "fill-rule" => Some(AttributeId::FillRule),
            "font-family" => Some(AttributeId::FontFamily),
            "font-size" => Some(AttributeId::FontSize),
            "font-weight" => Some(AttributeId::FontWeight),
            "opacity" => Some(AttributeId::Opacity),
            "stop-color" => Some(AttributeId::StopColor),
            "stroke" => Some(AttributeId::Stroke),
            "stroke-dasharray" => Some(AttributeId::StrokeDasharray),
            "stroke-dashoffset" => Some(AttributeId::StrokeDashoffset),
            "stroke-linecap" => Some(AttributeId::StrokeLinecap),
            "stroke-linejoin" => Some(AttributeId::StrokeLinejoin),
            "stroke-opacity" => Some(AttributeId::StrokeOpacity),
            "stroke-width" => Some(AttributeId::StrokeWidth),
            "text-anchor" => Some(AttributeId::TextAnchor),
            "transform" => Some(AttributeId::Transform),
            _ => None,
        }
    }

    /// Returns the normalized (camel-case) attribute name.
    pub fn to_str(&self) -> &'static str {
        match self {
            AttributeId::ClipPath => "clipPath",
            AttributeId::Cx => "cx",
            AttributeId::Cy => "cy",
            AttributeId::D => "d",
            AttributeId::Fill => "fill",
            AttributeId::FillOpacity => "fillOpacity",
            AttributeId::FillRule => "fillRule",
            AttributeId::FontFamily => "fontFamily",
            AttributeId::FontSize => "fontSize",
            AttributeId::FontWeight => "fontWeight",
            AttributeId::Fx => "fx",
            AttributeId::Fy => "fy",
            AttributeId::GradientUnits => "gradientUnits",
            AttributeId::Height => "height",
            AttributeId::Href => "href",
            AttributeId::Id => "id",
            AttributeId::Offset => "offset",
            AttributeId::Opacity => "opacity",
            AttributeId::Origin => "origin",
            AttributeId::OriginX => "originX",
            AttributeId::OriginY => "originY",
            AttributeId::Points => "points",
            AttributeId::R => "r",
            AttributeId::Rotate => "rotate",
            AttributeId::Rx => "rx",
            AttributeId::Ry => "ry",
            AttributeId::Scale => "scale",
            AttributeId::StopColor => "stopColor",
            AttributeId::Stroke => "stroke",
            AttributeId::StrokeDasharray => "strokeDasharray",
            AttributeId::StrokeDashoffset => "strokeDashoffset",
            AttributeId::StrokeLinecap => "strokeLinecap",
            AttributeId::StrokeLinejoin => "strokeLinejoin",
            AttributeId::StrokeOpacity => "strokeOpacity",
            AttributeId::StrokeWidth => "strokeWidth",
            AttributeId::TextAnchor => "textAnchor",
            AttributeId::Transform => "transform",
            AttributeId::ViewBox => "viewBox",
            AttributeId::Width => "width",
            AttributeId::X => "x",
            AttributeId::X1 => "x1",
            AttributeId::X2 => "x2",
            AttributeId::Y => "y",
            AttributeId::Y1 => "y1",
            AttributeId::Y2 => "y2",
        }
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
