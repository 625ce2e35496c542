//! Navigation Tree
//!
//! Static two-level menu structure and the route -> panel mapping.

/// A navigable menu entry without children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLeaf {
    /// Translation key for the label
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
}

/// A menu entry that only expands its submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBranch {
    pub label: &'static str,
    pub icon: &'static str,
    pub children: &'static [NavLeaf],
}

/// A top-level menu entry; the variant is explicit so rendering never
/// guesses whether children exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Leaf(NavLeaf),
    Branch(NavBranch),
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Leaf(leaf) => leaf.label,
            NavEntry::Branch(branch) => branch.label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavEntry::Leaf(leaf) => leaf.icon,
            NavEntry::Branch(branch) => branch.icon,
        }
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::Leaf(NavLeaf {
        label: "dashboard",
        icon: "📊",
        route: "/",
    }),
    NavEntry::Branch(NavBranch {
        label: "lectures",
        icon: "🎓",
        children: &[NavLeaf {
            label: "research",
            icon: "",
            route: "/lectures/research",
        }],
    }),
    NavEntry::Branch(NavBranch {
        label: "topics",
        icon: "📰",
        children: &[
            NavLeaf {
                label: "collection",
                icon: "",
                route: "/topics/collection",
            },
            NavLeaf {
                label: "list",
                icon: "📋",
                route: "/topics/list",
            },
            NavLeaf {
                label: "delivery",
                icon: "📄",
                route: "/topics/delivery",
            },
        ],
    }),
    NavEntry::Leaf(NavLeaf {
        label: "analytics",
        icon: "📈",
        route: "/analytics",
    }),
    NavEntry::Leaf(NavLeaf {
        label: "settings",
        icon: "⚙️",
        route: "/settings",
    }),
];

/// Panel selected by the active route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Dashboard,
    Lectures,
    Topics,
    Analytics,
    Settings,
    NotFound,
}

impl Panel {
    /// Pure route -> panel mapping; unrecognized routes (including submenu
    /// routes) fall through to NotFound
    pub fn for_route(route: &str) -> Panel {
        match route {
            "/" => Panel::Dashboard,
            "/lectures" => Panel::Lectures,
            "/topics" => Panel::Topics,
            "/analytics" => Panel::Analytics,
            "/settings" => Panel::Settings,
            _ => Panel::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes_map_to_panels() {
        assert_eq!(Panel::for_route("/"), Panel::Dashboard);
        assert_eq!(Panel::for_route("/lectures"), Panel::Lectures);
        assert_eq!(Panel::for_route("/topics"), Panel::Topics);
        assert_eq!(Panel::for_route("/analytics"), Panel::Analytics);
        assert_eq!(Panel::for_route("/settings"), Panel::Settings);
    }

    #[test]
    fn test_unknown_routes_fall_through() {
        assert_eq!(Panel::for_route("/nope"), Panel::NotFound);
        assert_eq!(Panel::for_route(""), Panel::NotFound);
        // Submenu routes have no dedicated panel
        assert_eq!(Panel::for_route("/lectures/research"), Panel::NotFound);
        assert_eq!(Panel::for_route("/topics/delivery"), Panel::NotFound);
    }

    #[test]
    fn test_nav_labels_unique() {
        let mut labels: Vec<&str> = NAV_ENTRIES.iter().map(|entry| entry.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), NAV_ENTRIES.len());
    }

    #[test]
    fn test_leaf_routes_have_panels() {
        for entry in NAV_ENTRIES {
            if let NavEntry::Leaf(leaf) = entry {
                assert_ne!(
                    Panel::for_route(leaf.route),
                    Panel::NotFound,
                    "top-level route {} should have a panel",
                    leaf.route
                );
            }
        }
    }

    #[test]
    fn test_submenu_routes_unique() {
        let mut routes: Vec<&str> = NAV_ENTRIES
            .iter()
            .flat_map(|entry| match entry {
                NavEntry::Leaf(leaf) => std::slice::from_ref(leaf).iter(),
                NavEntry::Branch(branch) => branch.children.iter(),
            })
            .map(|leaf| leaf.route)
            .collect();
        let total = routes.len();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), total);
    }
}
