use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Mod-loader toolchains the launch pipeline knows how to bootstrap —
/// strongly typed, no magic strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoaderFlavor {
    BepInEx,
    MelonLoader,
}

impl std::fmt::Display for LoaderFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderFlavor::BepInEx => write!(f, "bepinex"),
            LoaderFlavor::MelonLoader => write!(f, "melonloader"),
        }
    }
}

/// Mod-loader descriptor attached to a game: the flavor decides which
/// instruction templates apply, the entry point is where the loader's
/// bootstrap assembly lives inside a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModLoader {
    pub flavor: LoaderFlavor,
    /// Path of the bootstrap assembly relative to the profile root.
    pub relative_entry_point: PathBuf,
}

impl ModLoader {
    pub fn bepinex() -> Self {
        Self {
            flavor: LoaderFlavor::BepInEx,
            relative_entry_point: ["BepInEx", "core", "BepInEx.Preloader.dll"].iter().collect(),
        }
    }

    pub fn melon_loader() -> Self {
        Self {
            flavor: LoaderFlavor::MelonLoader,
            relative_entry_point: ["MelonLoader", "MelonLoader.dll"].iter().collect(),
        }
    }

    /// Same flavor with a non-default entry point (games that ship a
    /// repackaged loader).
    pub fn with_entry_point(mut self, relative_entry_point: impl Into<PathBuf>) -> Self {
        self.relative_entry_point = relative_entry_point.into();
        self
    }
}

/// A supported title. Immutable once loaded; owned by the game catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Stable identifier, also the folder name used for per-game state.
    pub internal_folder_name: String,
    pub display_name: String,
    /// Executable names to probe, in order. Platform conventions differ
    /// (`Title.exe` on Windows, bare `Title` or `Title.x86_64` elsewhere),
    /// so a game lists every candidate.
    pub exe_names: Vec<String>,
    /// Folder the engine treats as its data root, relative to the game
    /// directory (e.g. `Title_Data` for Unity games).
    pub data_folder_name: String,
    pub loader: ModLoader,
}

impl Game {
    pub fn new(
        internal_folder_name: impl Into<String>,
        display_name: impl Into<String>,
        exe_names: Vec<String>,
        data_folder_name: impl Into<String>,
        loader: ModLoader,
    ) -> Self {
        Self {
            internal_folder_name: internal_folder_name.into(),
            display_name: display_name.into(),
            exe_names,
            data_folder_name: data_folder_name.into(),
            loader,
        }
    }

    /// Executable candidates matching the current platform's naming
    /// convention, most specific first.
    pub fn platform_exe_names(&self) -> Vec<&str> {
        let windows = cfg!(target_os = "windows");
        let mut names: Vec<&str> = self
            .exe_names
            .iter()
            .map(String::as_str)
            .filter(|name| name.ends_with(".exe") == windows)
            .collect();
        if names.is_empty() {
            names = self.exe_names.iter().map(String::as_str).collect();
        }
        names
    }
}
