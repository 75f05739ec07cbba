//! Navigation tree and active-section state for the OS-styled shell.
//!
//! DESIGN
//! ======
//! The section set is closed, so ids parse into an enum with an explicit
//! `Home` default instead of being validated at each use site. Content view
//! selection is a total `match` over that enum.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One section of the OS shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Problem,
    Solution,
    Program,
    Team,
    Audience,
    Waitlist,
}

impl Section {
    /// Parse a navigation id. Unknown ids fall back to [`Section::Home`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "problem" => Self::Problem,
            "solution" => Self::Solution,
            "program" => Self::Program,
            "team" => Self::Team,
            "audience" => Self::Audience,
            "waitlist" => Self::Waitlist,
            _ => Self::Home,
        }
    }

    /// Navigation id; the inverse of [`Section::from_id`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Program => "program",
            Self::Team => "team",
            Self::Audience => "audience",
            Self::Waitlist => "waitlist",
        }
    }

    /// Navigation entry for this section.
    pub fn nav_item(self) -> &'static NavItem {
        NAV_ITEMS
            .iter()
            .find(|item| item.section == self)
            .unwrap_or(&NAV_ITEMS[0])
    }
}

/// A row in the navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub section: Section,
    pub label: &'static str,
    pub icon: &'static str,
    /// Tree depth, rendered as left padding.
    pub indent: u8,
}

impl NavItem {
    pub fn indent_px(&self) -> u32 {
        12 + u32::from(self.indent) * 16
    }
}

/// Navigation tree in tab order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", section: Section::Home, label: "~/launchpad", icon: "▸", indent: 0 },
    NavItem { id: "problem", section: Section::Problem, label: "problem.log", icon: "!", indent: 1 },
    NavItem { id: "solution", section: Section::Solution, label: "solution.md", icon: "◇", indent: 1 },
    NavItem { id: "program", section: Section::Program, label: "program/", icon: "▤", indent: 1 },
    NavItem { id: "team", section: Section::Team, label: "team.json", icon: "◎", indent: 2 },
    NavItem { id: "audience", section: Section::Audience, label: "audience.txt", icon: "◈", indent: 2 },
    NavItem { id: "waitlist", section: Section::Waitlist, label: "join.sh", icon: "$", indent: 0 },
];

/// Content pane rendered for a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentView {
    Overview,
    ProblemLog,
    SolutionDoc,
    ProgramListing,
    TeamJson,
    AudienceList,
    WaitlistScript,
}

impl ContentView {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Home => Self::Overview,
            Section::Problem => Self::ProblemLog,
            Section::Solution => Self::SolutionDoc,
            Section::Program => Self::ProgramListing,
            Section::Team => Self::TeamJson,
            Section::Audience => Self::AudienceList,
            Section::Waitlist => Self::WaitlistScript,
        }
    }

    /// Shell command echoed above the pane.
    pub fn command(self) -> &'static str {
        match self {
            Self::Overview => "cat README",
            Self::ProblemLog => "tail problem.log",
            Self::SolutionDoc => "less solution.md",
            Self::ProgramListing => "ls -l program/",
            Self::TeamJson => "jq . team.json",
            Self::AudienceList => "cat audience.txt",
            Self::WaitlistScript => "./join.sh",
        }
    }
}

/// Active-section state for the OS shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
}

impl NavState {
    /// Activate the section named by `id`.
    pub fn navigate(&mut self, id: &str) {
        self.active = Section::from_id(id);
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn content_view(&self) -> ContentView {
        ContentView::for_section(self.active)
    }

    /// Path shown in the status bar, e.g. `~/launchpad/team.json`.
    pub fn active_path(&self) -> String {
        match self.active {
            Section::Home => "~/launchpad".to_owned(),
            other => format!("~/launchpad/{}", other.nav_item().label),
        }
    }
}
