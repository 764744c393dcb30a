//! Target platform classifiers and host platform detection.

use crate::error::ConfigError;
use std::fmt;

/// javacpp platform classifier the uberjar is built for.
///
/// Selects which native library variants Maven bundles. The string form is
/// passed verbatim as `-Djavacpp.platform=<classifier>` and becomes part of
/// the artifact file name.
///
/// # Examples
///
/// ```
/// use konduit_build_jar::options::Platform;
///
/// let platform = Platform::from_host_identifier("win32").unwrap();
/// assert_eq!(platform.as_str(), "windows-x86_64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Platform {
    /// 64-bit Windows
    #[value(name = "windows-x86_64")]
    WindowsX86_64,
    /// 64-bit Linux
    #[value(name = "linux-x86_64")]
    LinuxX86_64,
    /// 64-bit Intel macOS
    #[value(name = "macosx-x86_64")]
    MacosxX86_64,
    /// 32-bit ARM Linux with hard-float (Raspberry Pi and similar boards)
    #[value(name = "linux-armhf")]
    LinuxArmhf,
}

impl Platform {
    /// All classifiers accepted by `--os`, in help order.
    pub const ALL: [Platform; 4] = [
        Platform::WindowsX86_64,
        Platform::LinuxX86_64,
        Platform::MacosxX86_64,
        Platform::LinuxArmhf,
    ];

    /// Classifier string, e.g. `linux-x86_64`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::WindowsX86_64 => "windows-x86_64",
            Platform::LinuxX86_64 => "linux-x86_64",
            Platform::MacosxX86_64 => "macosx-x86_64",
            Platform::LinuxArmhf => "linux-armhf",
        }
    }

    /// Classifier strings of every supported platform.
    pub fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }

    /// Detects the platform of the running host.
    ///
    /// Fails with [`ConfigError::UnrecognizedPlatform`] when the host OS is
    /// none of Windows, macOS or Linux; the caller must then pass `--os`.
    pub fn detect() -> Result<Self, ConfigError> {
        Self::from_host_identifier(std::env::consts::OS)
    }

    /// Maps a host OS identifier to a platform classifier.
    ///
    /// Accepts both Rust's `std::env::consts::OS` names (`windows`, `macos`,
    /// `linux`) and the conventional `win32`/`darwin` spellings. Matching is
    /// by prefix, so `linux2` or `win32-x64` resolve too. Linux hosts map to
    /// `linux-x86_64` regardless of CPU; ARM targets must be requested
    /// explicitly.
    pub fn from_host_identifier(identifier: &str) -> Result<Self, ConfigError> {
        let id = identifier.to_ascii_lowercase();
        if id.starts_with("win32") || id.starts_with("windows") {
            Ok(Platform::WindowsX86_64)
        } else if id.starts_with("darwin") || id.starts_with("macos") {
            Ok(Platform::MacosxX86_64)
        } else if id.starts_with("linux") {
            Ok(Platform::LinuxX86_64)
        } else {
            Err(ConfigError::UnrecognizedPlatform {
                identifier: identifier.to_string(),
                allowed: Self::allowed_values(),
            })
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_host_identifiers() {
        assert_eq!(
            Platform::from_host_identifier("win32").unwrap(),
            Platform::WindowsX86_64
        );
        assert_eq!(
            Platform::from_host_identifier("windows").unwrap(),
            Platform::WindowsX86_64
        );
        assert_eq!(
            Platform::from_host_identifier("darwin").unwrap(),
            Platform::MacosxX86_64
        );
        assert_eq!(
            Platform::from_host_identifier("macos").unwrap(),
            Platform::MacosxX86_64
        );
        assert_eq!(
            Platform::from_host_identifier("linux").unwrap(),
            Platform::LinuxX86_64
        );
    }

    #[test]
    fn unknown_host_names_allowed_values() {
        let err = Platform::from_host_identifier("freebsd").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--os"));
        for value in Platform::allowed_values() {
            assert!(message.contains(value), "missing {value} in: {message}");
        }
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn detects_supported_hosts() {
        assert!(Platform::detect().is_ok());
    }

    #[test]
    fn clap_names_match_classifiers() {
        use clap::ValueEnum;
        for platform in Platform::ALL {
            let value = platform.to_possible_value().unwrap();
            assert_eq!(value.get_name(), platform.as_str());
        }
    }
}
