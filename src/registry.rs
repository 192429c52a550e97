use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "pcbuilder";
pub const CHECKLIST_FILE: &str = "ICONS_CHECKLIST.md";
pub const MANIFEST_FILE: &str = "images/icon-manifest.json";

/// A named group of icons sharing a target directory and nominal pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub dir: &'static str,
    pub size: u32,
    pub icons: &'static [&'static str],
}

impl Category {
    pub fn heading(&self) -> String {
        format!("{} ({}×{}px)", self.key.to_uppercase(), self.size, self.size)
    }

    /// Report-facing path, relative to the app dir.
    pub fn icon_rel_path(&self, name: &str) -> String {
        format!("{}/{}.png", self.dir, name)
    }

    pub fn target_dir(&self, root: &Path) -> PathBuf {
        root.join(APP_DIR).join(self.dir)
    }

    pub fn icon_file(&self, root: &Path, name: &str) -> PathBuf {
        self.target_dir(root).join(format!("{}.png", name))
    }
}

const CATEGORIES: &[Category] = &[
    Category {
        key: "components",
        dir: "images/icons/components",
        size: 128,
        icons: &[
            "cpu",
            "cpu-lga1700",
            "cpu-am4",
            "cpu-am5",
            "gpu",
            "gpu-nvidia",
            "gpu-amd",
            "motherboard",
            "motherboard-z790",
            "motherboard-b660",
            "memory",
            "memory-ddr4",
            "memory-ddr5",
            "storage",
            "storage-ssd",
            "storage-hdd",
            "storage-nvme",
            "power",
            "power-550w",
            "power-750w",
            "case",
            "case-atx",
            "case-matx",
            "cooler",
            "cooler-air",
            "cooler-water",
        ],
    },
    Category {
        key: "ui",
        dir: "images/icons/ui",
        size: 48,
        icons: &[
            "back",
            "home",
            "forward",
            "close",
            "more",
            "menu",
            "refresh",
            "search",
            "filter",
            "sort",
            "clear",
            "edit",
            "delete",
            "copy",
            "paste",
            "save",
            "upload",
            "download",
            "image",
            "file",
            "confirm",
            "cancel",
            "check",
            "cross",
            "settings",
            "help",
            "info",
            "arrow_down",
            "arrow_up",
        ],
    },
    Category {
        key: "social",
        dir: "images/icons/social",
        size: 48,
        icons: &[
            "like",
            "like-active",
            "save",
            "save-active",
            "star",
            "star-active",
            "comment",
            "reply",
            "share",
        ],
    },
    Category {
        key: "status",
        dir: "images/icons/status",
        size: 64,
        icons: &[
            "success",
            "success_circle",
            "check_circle",
            "error",
            "error_circle",
            "close_circle",
            "warning",
            "warning_circle",
            "info",
            "info_circle",
            "loading",
            "loading_circle",
            "empty",
            "no_data",
            "no_result",
        ],
    },
    Category {
        key: "tabbar",
        dir: "images/tabbar",
        size: 81,
        icons: &[
            "home",
            "home-active",
            "builder",
            "builder-active",
            "community",
            "community-active",
            "profile",
            "profile-active",
        ],
    },
    Category {
        key: "placeholder",
        dir: "images/placeholder",
        size: 400,
        icons: &["component", "build", "user", "post"],
    },
];

/// The built-in asset manifest. Constructed once at startup and handed to
/// every component by reference; never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    categories: &'static [Category],
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            categories: CATEGORIES,
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn total_icons(&self) -> usize {
        self.categories.iter().map(|c| c.icons.len()).sum()
    }

    pub fn checklist_path(&self, root: &Path) -> PathBuf {
        root.join(CHECKLIST_FILE)
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(APP_DIR).join(MANIFEST_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_icon_names_unique_within_category() {
        for category in Registry::builtin().categories() {
            let unique: HashSet<_> = category.icons.iter().collect();
            assert_eq!(
                unique.len(),
                category.icons.len(),
                "duplicate icon name in category {}",
                category.key
            );
        }
    }

    #[test]
    fn test_total_matches_category_sums() {
        let registry = Registry::builtin();
        let sum: usize = registry
            .categories()
            .iter()
            .map(|c| c.icons.len())
            .sum();
        assert_eq!(registry.total_icons(), sum);
    }

    #[test]
    fn test_icon_rel_path() {
        let components = &Registry::builtin().categories()[0];
        assert_eq!(
            components.icon_rel_path("cpu"),
            "images/icons/components/cpu.png"
        );
    }

    #[test]
    fn test_icon_file_is_rooted_under_app_dir() {
        let components = &Registry::builtin().categories()[0];
        let path = components.icon_file(Path::new("/tmp/work"), "cpu");
        assert_eq!(
            path,
            Path::new("/tmp/work/pcbuilder/images/icons/components/cpu.png")
        );
    }
}
