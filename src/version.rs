//! the [`Version`] struct
use std::fmt;

/// an http version as a `major.minor` digit pair
///
/// the [`Default`] value is the unset version `0.0`, which is never returned
/// by a successful read
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version {
    major: u8,
    minor: u8,
}

impl Version {
    /// [`HTTP/1.0`](https://developer.mozilla.org/en-US/docs/Web/HTTP/Guides/Evolution_of_HTTP#http1.0_%E2%80%93_building_extensibility)
    pub const HTTP_10: Version = Version::new(1, 0);

    /// [`HTTP/1.1`](https://developer.mozilla.org/en-US/docs/Web/HTTP/Guides/Evolution_of_HTTP#http1.1_%E2%80%93_the_standardized_protocol)
    pub const HTTP_11: Version = Version::new(1, 1);

    /// create a version from its `major.minor` digits
    pub const fn new(major: u8, minor: u8) -> Version {
        Version { major, minor }
    }

    /// major digit
    pub const fn major(&self) -> u8 {
        self.major
    }

    /// minor digit
    pub const fn minor(&self) -> u8 {
        self.minor
    }

    /// `true` for the unset version
    pub const fn is_unset(&self) -> bool {
        self.major == 0 && self.minor == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
