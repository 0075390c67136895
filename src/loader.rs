// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::{Error, Options, Tree};

/// An SVG source.
#[derive(Clone, PartialEq, Debug)]
pub enum Source {
    /// An SVG markup.
    Data(String),
    /// A reference to an SVG asset, like a file path or a `file://` URI.
    Href(String),
}

/// A function that converts an asset reference into a URI that can be fetched.
pub type HrefResolverFn<'a> = Box<dyn Fn(&str, Option<&Path>) -> Option<String> + 'a>;

/// A function that returns the content of a resolved URI.
pub type FetchFn<'a> = Box<dyn Fn(&str) -> Result<String, String> + 'a>;

/// A source loading callback.
pub type LoadFn<'a> = Box<dyn Fn() + 'a>;

/// Loads SVG sources and compiles them.
pub struct Loader<'a> {
    /// Directory that will be used during relative paths resolving.
    ///
    /// Default: `None`
    pub resources_dir: Option<PathBuf>,

    /// Specifies how asset references should be resolved.
    ///
    /// Default: [`Loader::default_href_resolver`]
    pub resolve_href: HrefResolverFn<'a>,

    /// Specifies how resolved URIs should be fetched.
    ///
    /// Default: reads a file
    pub fetch: FetchFn<'a>,

    /// Called once a referenced source was fetched successfully.
    ///
    /// Default: `None`
    pub on_load: Option<LoadFn<'a>>,
}

impl Default for Loader<'_> {
    fn default() -> Self {
        Loader {
            resources_dir: None,
            resolve_href: Box::new(Loader::default_href_resolver),
            fetch: Box::new(|uri: &str| std::fs::read_to_string(uri).map_err(|e| e.to_string())),
            on_load: None,
        }
    }
}

impl std::fmt::Debug for Loader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("resources_dir", &self.resources_dir)
            .field("resolve_href", &"HrefResolverFn(..)")
            .field("fetch", &"FetchFn(..)")
            .field("on_load", &self.on_load.as_ref().map(|_| "LoadFn(..)"))
            .finish()
    }
}

impl Loader<'_> {
    /// Resolves local file references.
    ///
    /// A `file://` scheme is removed and relative paths are joined
    /// with `resources_dir`. Other URI schemes are not supported.
    pub fn default_href_resolver(href: &str, resources_dir: Option<&Path>) -> Option<String> {
        let path = match href.strip_prefix("file://") {
            Some(path) => path,
            None if href.contains("://") => {
                log::warn!("'{}' has an unsupported URI scheme.", href);
                return None;
            }
            None => href,
        };

        let path = Path::new(path);
        let path = match resources_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        };

        Some(path.to_string_lossy().into_owned())
    }

    /// Loads and compiles an SVG.
    ///
    /// A source that cannot be fetched is an error. A source that was fetched
    /// but cannot be compiled produces no tree, as in [`render`](crate::render).
    pub fn load(&self, source: &Source, opt: &Options) -> Result<Option<Tree>, Error> {
        let text = match source {
            Source::Data(ref text) => Cow::Borrowed(text.as_str()),
            Source::Href(ref href) => {
                let text = self.fetch_href(href)?;
                if let Some(ref on_load) = self.on_load {
                    on_load();
                }

                Cow::Owned(text)
            }
        };

        Ok(crate::render(&text, opt))
    }

    fn fetch_href(&self, href: &str) -> Result<String, Error> {
        let uri = match (self.resolve_href)(href, self.resources_dir.as_deref()) {
            Some(uri) => uri,
            None => {
                log::warn!("Failed to resolve '{}'.", href);
                return Err(Error::SourceUnavailable(format!("'{}' cannot be resolved", href)));
            }
        };

        (self.fetch)(&uri).map_err(|e| {
            log::warn!("Failed to fetch '{}' cause {}.", uri, e);
            Error::SourceUnavailable(e)
        })
    }
}
