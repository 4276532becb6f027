use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};

use crate::ParseError;
use crate::parser::parse_version;

/// Version in `major.minor.patch[-tag]` form.
/// Everything after the first `-` is one opaque tag, there is no separate pre-release or build metadata.
/// [VersionOwned] carries the same data with an owned tag.
///
/// Ordering compares major, minor and patch numerically. At equal numbers an untagged version sorts
/// after a tagged one (`1.0.0-beta < 1.0.0`), and two tags are compared byte-wise.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Version<'i> {
    major: u32,
    minor: u32,
    patch: u32,
    /// Never empty and never surrounded by whitespace.
    tag: Option<&'i str>,
}

impl<'i> Version<'i> {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            tag: None,
        }
    }

    /// Tag is trimmed, blank tags are stored as no tag at all.
    pub fn with_tag(major: u32, minor: u32, patch: u32, tag: Option<&'i str>) -> Self {
        Version {
            major,
            minor,
            patch,
            tag: normalize_tag(tag),
        }
    }

    /// Parse `[v]major[.minor[.patch[-tag]]]`, see [parse_version].
    pub fn parse(input: &'i str) -> Result<Self, ParseError> {
        parse_version(Some(input))
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn patch(&self) -> u32 {
        self.patch
    }

    pub const fn tag(&self) -> Option<&'i str> {
        self.tag
    }

    pub const fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
}

fn normalize_tag(tag: Option<&str>) -> Option<&str> {
    tag.map(str::trim).filter(|tag| !tag.is_empty())
}

impl<'i> TryFrom<&'i str> for Version<'i> {
    type Error = ParseError;

    fn try_from(value: &'i str) -> Result<Self, Self::Error> {
        parse_version(Some(value))
    }
}

impl Ord for Version<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.tag, other.tag) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(tag), Some(other_tag)) => tag.as_bytes().cmp(other_tag.as_bytes()),
            })
    }
}

impl PartialOrd for Version<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Version<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(tag) = self.tag {
            write!(f, "-{}", tag)?;
        }
        Ok(())
    }
}

impl Debug for Version<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(feature = "std")]
pub use owned::VersionOwned;

#[cfg(feature = "std")]
mod owned {
    use super::*;
    use std::str::FromStr;

    /// [Version] with an owned tag, for keeping versions around after the parsed string is gone.
    #[derive(PartialEq, Eq, Clone, Hash)]
    pub struct VersionOwned {
        major: u32,
        minor: u32,
        patch: u32,
        tag: Option<String>,
    }

    impl VersionOwned {
        pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
            VersionOwned {
                major,
                minor,
                patch,
                tag: None,
            }
        }

        pub fn with_tag(major: u32, minor: u32, patch: u32, tag: Option<&str>) -> Self {
            Version::with_tag(major, minor, patch, tag).make_owned()
        }

        pub const fn major(&self) -> u32 {
            self.major
        }

        pub const fn minor(&self) -> u32 {
            self.minor
        }

        pub const fn patch(&self) -> u32 {
            self.patch
        }

        pub fn tag(&self) -> Option<&str> {
            self.tag.as_deref()
        }

        pub fn as_ref(&self) -> Version<'_> {
            Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                tag: self.tag.as_deref(),
            }
        }
    }

    impl Version<'_> {
        pub fn make_owned(&self) -> VersionOwned {
            VersionOwned {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                tag: self.tag.map(|tag| tag.to_string()),
            }
        }
    }

    impl From<Version<'_>> for VersionOwned {
        fn from(value: Version<'_>) -> Self {
            value.make_owned()
        }
    }

    impl FromStr for VersionOwned {
        type Err = ParseError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Version::parse(s)?.make_owned())
        }
    }

    impl Ord for VersionOwned {
        fn cmp(&self, other: &Self) -> Ordering {
            self.as_ref().cmp(&other.as_ref())
        }
    }

    impl PartialOrd for VersionOwned {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Display for VersionOwned {
        fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
            write!(f, "{}", self.as_ref())
        }
    }

    impl Debug for VersionOwned {
        fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
            write!(f, "{:?}", self.as_ref())
        }
    }
}

#[cfg(feature = "semver")]
mod semver_interop {
    use super::VersionOwned;

    impl TryFrom<semver::Version> for VersionOwned {
        type Error = &'static str;

        fn try_from(value: semver::Version) -> Result<Self, Self::Error> {
            const ERR: &str = "failed to convert u64 to u32";
            let major = u32::try_from(value.major).map_err(|_| ERR)?;
            let minor = u32::try_from(value.minor).map_err(|_| ERR)?;
            let patch = u32::try_from(value.patch).map_err(|_| ERR)?;
            let pre_present = !value.pre.is_empty();
            let tag = pre_present.then_some(value.pre.as_str());
            Ok(VersionOwned::with_tag(major, minor, patch, tag))
        }
    }

    impl TryFrom<VersionOwned> for semver::Version {
        type Error = semver::Error;

        fn try_from(value: VersionOwned) -> Result<Self, Self::Error> {
            use semver::{BuildMetadata, Prerelease};
            let pre = match value.tag() {
                Some(tag) => Prerelease::new(tag)?,
                None => Prerelease::EMPTY,
            };
            Ok(semver::Version {
                major: value.major() as u64,
                minor: value.minor() as u64,
                patch: value.patch() as u64,
                pre,
                build: BuildMetadata::EMPTY,
            })
        }
    }

}
