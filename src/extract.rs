// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use crate::compiler::XLINK_NS;

/// Extracts the `svg` element markup from an arbitrary text.
///
/// Comments are removed. Everything before the first `<svg` tag and after
/// the first following `</svg>` is ignored, so an XML declaration, a DOCTYPE
/// or a surrounding HTML markup will not affect parsing.
///
/// The extracted markup is not validated. Returns `None` when there is no `<svg` tag.
pub fn extract_svg(text: &str) -> Option<String> {
    let text = strip_comments(text);
    let start = find_svg_start(&text)?;
    let end = match text[start..].find("</svg>") {
        Some(idx) => start + idx + "</svg>".len(),
        // Let the XML parser report an unclosed element.
        None => text.len(),
    };

    Some(declare_xlink(&text[start..end]))
}

fn find_svg_start(text: &str) -> Option<usize> {
    text.match_indices("<svg").map(|(idx, _)| idx).find(|idx| {
        text[idx + "<svg".len()..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_whitespace())
    })
}

/// Removes `<!-- -->` spans.
///
/// An unclosed comment is removed till the end of the text.
fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains("<!--") {
        return Cow::Borrowed(text);
    }

    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        stripped.push_str(&rest[..start]);
        rest = &rest[start + "<!--".len()..];
        rest = match rest.find("-->") {
            Some(end) => &rest[end + "-->".len()..],
            None => "",
        };
    }
    stripped.push_str(rest);

    Cow::Owned(stripped)
}

/// Declares the `xlink` namespace prefix on the root element when it's used but not declared.
///
/// Documents produced by older editors rely on a lenient XML parser here.
fn declare_xlink(svg: &str) -> String {
    if !svg.contains("xlink:") || svg.contains("xmlns:xlink") {
        return svg.to_string();
    }

    // `svg` always starts with `<svg` followed by a whitespace.
    let (tag, rest) = svg.split_at("<svg".len());
    format!("{} xmlns:xlink=\"{}\"{}", tag, XLINK_NS, rest)
}
