// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface classification from the `surfaceType` attribute.

use std::fmt;

/// gbXML surface classification.
///
/// Tags are matched case-sensitively. Anything outside the known set is kept
/// verbatim in [`SurfaceType::Other`] so callers can still report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    InteriorWall,
    ExteriorWall,
    Roof,
    InteriorFloor,
    Shade,
    SlabOnGrade,
    Other(String),
}

impl SurfaceType {
    /// Resolve a `surfaceType` attribute value
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "InteriorWall" => SurfaceType::InteriorWall,
            "ExteriorWall" => SurfaceType::ExteriorWall,
            "Roof" => SurfaceType::Roof,
            "InteriorFloor" => SurfaceType::InteriorFloor,
            "Shade" => SurfaceType::Shade,
            "SlabOnGrade" => SurfaceType::SlabOnGrade,
            other => SurfaceType::Other(other.to_string()),
        }
    }

    /// The attribute value this type was read from
    pub fn as_str(&self) -> &str {
        match self {
            SurfaceType::InteriorWall => "InteriorWall",
            SurfaceType::ExteriorWall => "ExteriorWall",
            SurfaceType::Roof => "Roof",
            SurfaceType::InteriorFloor => "InteriorFloor",
            SurfaceType::Shade => "Shade",
            SurfaceType::SlabOnGrade => "SlabOnGrade",
            SurfaceType::Other(tag) => tag,
        }
    }

    /// True for tags outside the known enumeration
    #[inline]
    pub fn is_other(&self) -> bool {
        matches!(self, SurfaceType::Other(_))
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(SurfaceType::from_tag("Roof"), SurfaceType::Roof);
        assert_eq!(SurfaceType::from_tag("SlabOnGrade"), SurfaceType::SlabOnGrade);
        assert_eq!(SurfaceType::from_tag("ExteriorWall").as_str(), "ExteriorWall");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let surface_type = SurfaceType::from_tag("roof");
        assert!(surface_type.is_other());
        assert_eq!(surface_type.to_string(), "roof");
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        assert_eq!(
            SurfaceType::from_tag("UndergroundWall"),
            SurfaceType::Other("UndergroundWall".to_string())
        );
    }
}
