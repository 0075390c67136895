// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Attribute names and values normalization.
//!
//! All functions here are pure and never fail. When a transformation
//! is not applicable, the input is returned as is.

use std::borrow::Cow;
use std::str::FromStr;

use crate::{AttributeId, ElementId};

/// Converts an XML attribute name into a camel-case one.
///
/// `stroke-width` becomes `strokeWidth` and `xlink:href` becomes `xlinkHref`.
/// Already normalized names are returned unchanged.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    if !name.contains(is_separator) {
        return Cow::Borrowed(name);
    }

    let mut normalized = String::with_capacity(name.len());
    for (idx, part) in name.split(is_separator).enumerate() {
        if idx == 0 {
            normalized.push_str(part);
            continue;
        }

        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            normalized.extend(c.to_uppercase());
            normalized.push_str(chars.as_str());
        }
    }

    Cow::Owned(normalized)
}

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '-' | ':' | '_')
}

/// Removes the `px` unit from a plain number.
///
/// `10px` becomes `10`, while `10mm`, `50%` and `10` are left as is.
pub fn strip_units(value: &str) -> &str {
    if let Some(number) = value.trim().strip_suffix("px") {
        let number = number.trim_end();
        if svgtypes::Number::from_str(number).is_ok() {
            return number;
        }
    }

    value
}

/// Splits a `style` attribute value into attributes.
///
/// Declarations are returned in the authored order, so a later declaration
/// of the same property must win. Unknown properties are skipped.
pub fn split_style(value: &str) -> Vec<(AttributeId, &str)> {
    let mut list = Vec::new();
    for declaration in simplecss::DeclarationTokenizer::from(value) {
        match AttributeId::from_property(declaration.name) {
            Some(aid) => list.push((aid, declaration.value.trim())),
            None => {
                log::trace!("Unsupported style property '{}'.", declaration.name);
            }
        }
    }

    list
}

/// Checks that a normalized attribute name is allowed on the specified element.
///
/// Returns the attribute ID when it is.
pub fn enabled(name: &str, tag_name: ElementId) -> Option<AttributeId> {
    let aid = AttributeId::from_str(name)?;
    if tag_name.allows(aid) {
        Some(aid)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_name {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(normalize_name($text), $result);
            }
        )
    }

    test_name!(name_1, "fill", "fill");
    test_name!(name_2, "stroke-width", "strokeWidth");
    test_name!(name_3, "stroke-dasharray", "strokeDasharray");
    test_name!(name_4, "xlink:href", "xlinkHref");
    test_name!(name_5, "viewBox", "viewBox");
    test_name!(name_6, "gradientUnits", "gradientUnits");
    test_name!(name_7, "stop-color", "stopColor");
    test_name!(name_8, "xml:space", "xmlSpace");

    #[test]
    fn name_is_idempotent() {
        for name in ["clip-path", "fill-rule", "font-family", "x1"] {
            let once = normalize_name(name).into_owned();
            assert_eq!(normalize_name(&once), once);
        }
    }

    macro_rules! test_units {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(strip_units($text), $result);
            }
        )
    }

    test_units!(units_1, "10px", "10");
    test_units!(units_2, "10.5px", "10.5");
    test_units!(units_3, "-1e2px", "-1e2");
    test_units!(units_4, " 20px ", "20");
    test_units!(units_5, "10", "10");
    test_units!(units_6, "10mm", "10mm");
    test_units!(units_7, "50%", "50%");
    test_units!(units_8, "px", "px");
    test_units!(units_9, "#fff", "#fff");
    test_units!(units_10, "M 10 10 L 20px", "M 10 10 L 20px");

    #[test]
    fn units_are_idempotent() {
        for value in ["10px", "3.25px", "7", "1em"] {
            let once = strip_units(value);
            assert_eq!(strip_units(once), once);
        }
    }

    #[test]
    fn style_1() {
        assert_eq!(
            split_style("fill:#ff0000;stroke-width:2"),
            vec![(AttributeId::Fill, "#ff0000"), (AttributeId::StrokeWidth, "2")]
        );
    }

    #[test]
    fn style_2() {
        assert_eq!(
            split_style(" stop-color : red ; unknown-prop: 1; opacity:0.5;"),
            vec![(AttributeId::StopColor, "red"), (AttributeId::Opacity, "0.5")]
        );
    }

    #[test]
    fn style_3() {
        assert!(split_style("").is_empty());
    }

    #[test]
    fn enabled_1() {
        assert_eq!(enabled("cx", ElementId::Circle), Some(AttributeId::Cx));
        assert_eq!(enabled("cx", ElementId::Rect), None);
        assert_eq!(enabled("strokeWidth", ElementId::Defs), Some(AttributeId::StrokeWidth));
        assert_eq!(enabled("stroke-width", ElementId::Rect), None);
        assert_eq!(enabled("xlinkHref", ElementId::Use), None);
    }
}
