#![cfg_attr(not(feature = "std"), no_std)]

//! SemVer-like version strings: a single-pass parser and a total order over the parsed values.
//!
//! ```
//! use ww_semver::Version;
//!
//! let release = Version::parse("v1.2.0").unwrap();
//! let beta = Version::parse("1.2.0-beta-1").unwrap();
//! assert!(beta < release);
//! assert_eq!(beta.to_string(), "1.2.0-beta-1");
//! ```

pub mod error;
pub mod parser;
pub mod version;

pub use error::ParseError;
pub use parser::parse_version;
pub use version::Version;
#[cfg(feature = "std")]
pub use version::VersionOwned;

#[cfg(feature = "semver")]
pub use semver;
