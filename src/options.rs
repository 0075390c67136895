// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Compilation options.
#[derive(Clone, Default, Debug)]
pub struct Options {
    /// Overrides the root `svg` element width.
    ///
    /// Empty strings are ignored.
    ///
    /// Default: `None`
    pub width: Option<String>,

    /// Overrides the root `svg` element height.
    ///
    /// Empty strings are ignored.
    ///
    /// Default: `None`
    pub height: Option<String>,

    /// A fill color that replaces authored fill colors.
    ///
    /// An authored `fill="none"` is preserved, except on `path` elements,
    /// which always receive this color.
    ///
    /// Empty strings are ignored.
    ///
    /// Default: `None`
    pub fill: Option<String>,

    /// Applies `fill` to every element, even to the ones without
    /// an authored fill.
    ///
    /// Has no effect when `fill` is not set.
    ///
    /// Default: false
    pub fill_all: bool,
}

impl Options {
    #[inline]
    pub(crate) fn width(&self) -> Option<&str> {
        non_empty(&self.width)
    }

    #[inline]
    pub(crate) fn height(&self) -> Option<&str> {
        non_empty(&self.height)
    }

    #[inline]
    pub(crate) fn fill(&self) -> Option<&str> {
        non_empty(&self.fill)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
