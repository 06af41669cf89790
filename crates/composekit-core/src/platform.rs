//! Platform detection module
//!
//! Detects the operating system family and CPU architecture so the
//! lifecycle manager can choose executable suffixes, wrapper script
//! formats, and permission operations. Also maps the platform onto the
//! naming scheme used by upstream compose release assets.

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux
    Linux,
    /// macOS (Darwin)
    MacOs,
    /// Windows
    Windows,
    /// Unknown/unsupported platform
    Unknown,
}

impl Os {
    /// Executable suffix for downloaded binaries (`.exe` on Windows)
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            _ => "",
        }
    }

    /// File name of the generated wrapper script
    pub fn wrapper_file_name(self) -> &'static str {
        match self {
            Self::Windows => "compose.bat",
            _ => "compose",
        }
    }

    /// Whether executability must be granted explicitly after download
    ///
    /// Windows executability is extension-based, so the chmod step is a
    /// no-op there.
    pub fn needs_exec_bit(self) -> bool {
        !matches!(self, Self::Windows)
    }

    /// OS segment of upstream compose asset names
    pub fn asset_segment(self) -> Option<&'static str> {
        match self {
            Self::Linux => Some("linux"),
            Self::MacOs => Some("darwin"),
            Self::Windows => Some("windows"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// x86_64 / AMD64
    X86_64,
    /// ARM64 / AArch64
    Aarch64,
    /// Unknown architecture
    Unknown,
}

impl Arch {
    /// Architecture segment of upstream compose asset names
    pub fn asset_segment(self) -> Option<&'static str> {
        match self {
            Self::X86_64 => Some("x86_64"),
            Self::Aarch64 => Some("aarch64"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X86_64 => write!(f, "x86_64"),
            Self::Aarch64 => write!(f, "aarch64"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detected platform information
#[derive(Debug, Clone, Copy)]
pub struct PlatformInfo {
    /// Operating system family
    pub os: Os,
    /// CPU architecture
    pub arch: Arch,
}

/// Detect the current platform
pub fn current_platform() -> PlatformInfo {
    PlatformInfo {
        os: detect_os(),
        arch: detect_arch(),
    }
}

fn detect_os() -> Os {
    match std::env::consts::OS {
        "linux" => Os::Linux,
        "macos" => Os::MacOs,
        "windows" => Os::Windows,
        _ => Os::Unknown,
    }
}

fn detect_arch() -> Arch {
    match std::env::consts::ARCH {
        "x86_64" => Arch::X86_64,
        "aarch64" => Arch::Aarch64,
        _ => Arch::Unknown,
    }
}
