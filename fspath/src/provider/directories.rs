//! Standard directory lookup.
//!
//! User-scope locations come from the `dirs` crate (the home directory from
//! `home`). System-scope locations are fixed per platform. Both are decided
//! at runtime so every platform compiles the same interface; a kind a
//! platform lacks simply has no locations.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Well-known directory kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryKind {
    /// The home directory.
    Home,
    /// Cached data.
    Cache,
    /// Configuration files.
    Config,
    /// Application data.
    Data,
    /// Machine-local application data.
    LocalData,
    /// The desktop.
    Desktop,
    /// Documents.
    Documents,
    /// Downloads.
    Downloads,
    /// Pictures.
    Pictures,
    /// Music.
    Music,
    /// Videos.
    Videos,
    /// Publicly shared files.
    Public,
    /// Document templates.
    Templates,
    /// Fonts.
    Fonts,
    /// Executables.
    Executables,
    /// Installed applications.
    Applications,
}

impl DirectoryKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Home,
        Self::Cache,
        Self::Config,
        Self::Data,
        Self::LocalData,
        Self::Desktop,
        Self::Documents,
        Self::Downloads,
        Self::Pictures,
        Self::Music,
        Self::Videos,
        Self::Public,
        Self::Templates,
        Self::Fonts,
        Self::Executables,
        Self::Applications,
    ];

    /// The kebab-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Cache => "cache",
            Self::Config => "config",
            Self::Data => "data",
            Self::LocalData => "local-data",
            Self::Desktop => "desktop",
            Self::Documents => "documents",
            Self::Downloads => "downloads",
            Self::Pictures => "pictures",
            Self::Music => "music",
            Self::Videos => "videos",
            Self::Public => "public",
            Self::Templates => "templates",
            Self::Fonts => "fonts",
            Self::Executables => "executables",
            Self::Applications => "applications",
        }
    }
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DirectoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| format!("unknown directory kind: {s}"))
    }
}

/// Whose copy of a standard directory to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryScope {
    /// The current user's directories.
    #[default]
    User,
    /// Machine-wide directories.
    System,
}

/// Look up the locations of `kind` in `scope`.
pub(crate) fn lookup(kind: DirectoryKind, scope: DirectoryScope) -> Vec<Path> {
    let native: Vec<PathBuf> = match scope {
        DirectoryScope::User => user_directory(kind).into_iter().collect(),
        DirectoryScope::System => system_directories(kind),
    };

    native
        .into_iter()
        .filter_map(|dir| match Path::try_from(dir) {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("skipping {kind} directory: {e}");
                None
            }
        })
        .collect()
}

fn user_directory(kind: DirectoryKind) -> Option<PathBuf> {
    match kind {
        DirectoryKind::Home => home::home_dir(),
        DirectoryKind::Cache => dirs::cache_dir(),
        DirectoryKind::Config => dirs::config_dir(),
        DirectoryKind::Data => dirs::data_dir(),
        DirectoryKind::LocalData => dirs::data_local_dir(),
        DirectoryKind::Desktop => dirs::desktop_dir(),
        DirectoryKind::Documents => dirs::document_dir(),
        DirectoryKind::Downloads => dirs::download_dir(),
        DirectoryKind::Pictures => dirs::picture_dir(),
        DirectoryKind::Music => dirs::audio_dir(),
        DirectoryKind::Videos => dirs::video_dir(),
        DirectoryKind::Public => dirs::public_dir(),
        DirectoryKind::Templates => dirs::template_dir(),
        DirectoryKind::Fonts => dirs::font_dir(),
        DirectoryKind::Executables => dirs::executable_dir(),
        DirectoryKind::Applications => {
            if cfg!(target_os = "macos") {
                home::home_dir().map(|home| home.join("Applications"))
            } else if cfg!(windows) {
                dirs::data_dir().map(|data| data.join("Microsoft\\Windows\\Start Menu\\Programs"))
            } else {
                dirs::data_dir().map(|data| data.join("applications"))
            }
        }
    }
}

fn system_directories(kind: DirectoryKind) -> Vec<PathBuf> {
    if cfg!(windows) {
        let from_env =
            |var: &str| -> Vec<PathBuf> { env::var_os(var).map(PathBuf::from).into_iter().collect() };
        return match kind {
            DirectoryKind::Data | DirectoryKind::Config => from_env("ProgramData"),
            DirectoryKind::Applications | DirectoryKind::Executables => from_env("ProgramFiles"),
            DirectoryKind::Public => from_env("PUBLIC"),
            DirectoryKind::Fonts => env::var_os("SystemRoot")
                .map(|root| PathBuf::from(root).join("Fonts"))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        };
    }

    let fixed: &[&str] = if cfg!(target_os = "macos") {
        match kind {
            DirectoryKind::Applications => &["/Applications"],
            DirectoryKind::Cache => &["/Library/Caches"],
            DirectoryKind::Config => &["/Library/Preferences"],
            DirectoryKind::Data => &["/Library/Application Support"],
            DirectoryKind::Fonts => &["/Library/Fonts", "/System/Library/Fonts"],
            DirectoryKind::Executables => &["/usr/local/bin", "/usr/bin"],
            DirectoryKind::Public => &["/Users/Shared"],
            _ => &[],
        }
    } else {
        match kind {
            DirectoryKind::Applications => &["/usr/share/applications"],
            DirectoryKind::Cache => &["/var/cache"],
            DirectoryKind::Config => &["/etc/xdg", "/etc"],
            DirectoryKind::Data => &["/usr/local/share", "/usr/share"],
            DirectoryKind::Fonts => &["/usr/share/fonts"],
            DirectoryKind::Executables => &["/usr/local/bin", "/usr/bin"],
            _ => &[],
        }
    };
    fixed.iter().copied().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in DirectoryKind::ALL {
            assert_eq!(kind.name().parse::<DirectoryKind>().unwrap(), kind);
        }
        assert_eq!("LOCAL_DATA".parse::<DirectoryKind>().unwrap(), DirectoryKind::LocalData);
        assert!("nowhere".parse::<DirectoryKind>().is_err());
    }

    #[test]
    fn test_home_matches_home_crate() {
        let expected = home::home_dir().unwrap();
        let found = lookup(DirectoryKind::Home, DirectoryScope::User);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_std_path(), expected.as_path());
    }

    #[test]
    fn test_system_home_is_absent() {
        assert!(lookup(DirectoryKind::Home, DirectoryScope::System).is_empty());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_linux_system_directories() {
        assert_eq!(
            lookup(DirectoryKind::Config, DirectoryScope::System),
            vec![Path::new("/etc/xdg"), Path::new("/etc")]
        );
        assert!(lookup(DirectoryKind::Desktop, DirectoryScope::System).is_empty());
    }

    #[test]
    fn test_user_directories_are_absolute() {
        for kind in DirectoryKind::ALL {
            for dir in lookup(kind, DirectoryScope::User) {
                assert!(dir.is_absolute(), "{kind} resolved to relative {dir}");
            }
        }
    }
}
