// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::FolderSpec;

/// `folder!("Name")` or `folder!("Name", [children...])`.
macro_rules! folder {
    ($name:literal) => {
        FolderSpec {
            name: $name,
            children: &[],
        }
    };
    ($name:literal, [$($child:expr),+ $(,)?]) => {
        FolderSpec {
            name: $name,
            children: &[$($child),+],
        }
    };
}

/// Application folders created under the install root.
pub static PRIVATE_FOLDERS: FolderSpec = folder!(
    "YeagerEngine",
    [
        folder!("Binarie"),
        folder!("Utilities", [folder!("Setup")]),
        folder!(
            "Configuration",
            [
                folder!("Theme", [folder!("Colorscheme"), folder!("Sound")]),
                folder!("Shader"),
            ]
        ),
        folder!(
            "Resources",
            [
                folder!("Shaders"),
                folder!("Icons"),
                folder!("Textures", [folder!("Default")]),
                folder!("Fonts", [folder!("Editor")]),
                folder!("Locales"),
                folder!("Sound"),
            ]
        ),
        folder!(
            "Templates",
            [folder!(
                "EmptyScene",
                [
                    folder!("Assets", [folder!("Skybox")]),
                    folder!("Configuration"),
                ]
            )]
        ),
    ]
);

/// Per-user folders created under the user root.
pub static PUBLIC_FOLDERS: FolderSpec = folder!(
    "YeagerEngine",
    [
        folder!(
            "Resources",
            [folder!("Sound"), folder!("Shaders"), folder!("Locales")]
        ),
        folder!(
            "Configuration",
            [
                folder!("Projects"),
                folder!("Variables"),
                folder!("Themes", [folder!("Colorscheme"), folder!("Sound")]),
                folder!("Interface"),
                folder!("Shaders"),
            ]
        ),
        folder!("Extensions", [folder!("ModuleAPI")]),
        folder!("Versions", [folder!("1.0.0-dev")]),
        folder!(
            "Cache",
            [folder!("Resources", [folder!("Textures"), folder!("Sound")])]
        ),
        folder!("Template", [folder!("Custom")]),
        folder!("Logs", [folder!("CrashReport")]),
    ]
);
