// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// The SVG source could not be fetched.
    SourceUnavailable(String),

    /// The input doesn't contain an `<svg>` element.
    NoSvgElement,

    /// Elements nesting is deeper than 1024 levels.
    NestingLimitReached,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::SourceUnavailable(ref e) => {
                write!(f, "SVG source is unavailable cause {}", e)
            }
            Error::NoSvgElement => {
                write!(f, "provided data doesn't contain an SVG element")
            }
            Error::NestingLimitReached => {
                write!(f, "the maximum elements nesting depth has been reached")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}
