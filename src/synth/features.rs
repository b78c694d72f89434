use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Target language version reported by the host compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageVersion {
    major: u16,
    minor: u16,
}

impl LanguageVersion {
    pub const CSHARP_1: Self = Self::new(1, 0);
    pub const CSHARP_7_3: Self = Self::new(7, 3);
    pub const CSHARP_10: Self = Self::new(10, 0);
    pub const CSHARP_11: Self = Self::new(11, 0);
    pub const CSHARP_12: Self = Self::new(12, 0);
    /// `latest` / `preview`: newer than any numbered version.
    pub const LATEST: Self = Self::new(u16::MAX, 0);

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub const fn major(self) -> u16 {
        self.major
    }

    pub const fn minor(self) -> u16 {
        self.minor
    }
}

impl Default for LanguageVersion {
    /// Hosts that cannot report a version get the most conservative output.
    fn default() -> Self {
        Self::CSHARP_1
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::LATEST {
            f.write_str("latest")
        } else if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

/// Accepts `11`, `7.3`, `CSharp11`, `CSharp7_3`, `latest`, `preview`.
impl FromStr for LanguageVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("latest") || trimmed.eq_ignore_ascii_case("preview") {
            return Ok(Self::LATEST);
        }
        let digits = trimmed
            .strip_prefix("CSharp")
            .or_else(|| trimmed.strip_prefix("csharp"))
            .unwrap_or(trimmed);
        let (major, minor) = match digits.split_once(['.', '_']) {
            Some((major, minor)) => (major, minor),
            None => (digits, "0"),
        };
        let parse = |part: &str| part.parse::<u16>().map_err(|_| Error::InvalidLanguageVersion(s.to_owned()));
        let version = Self::new(parse(major)?, parse(minor)?);
        if version.major == 0 {
            return Err(Error::InvalidLanguageVersion(s.to_owned()));
        }
        Ok(version)
    }
}

/// Target-language capabilities that change the emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LanguageFeatures {
    /// The `file` access modifier is available.
    pub supports_file_scoped_visibility: bool,
}

impl LanguageFeatures {
    pub fn for_version(version: LanguageVersion) -> Self {
        Self {
            supports_file_scoped_visibility: version >= LanguageVersion::CSHARP_11,
        }
    }

    /// Most restrictive modifier for the generated helper types.
    pub const fn helper_visibility(&self) -> &'static str {
        if self.supports_file_scoped_visibility {
            "file"
        } else {
            "internal"
        }
    }
}
