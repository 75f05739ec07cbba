//! Static copy for both page variants.
//!
//! Everything here is literal data; views only iterate over it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Serialize;

pub const SITE_TITLE: &str = "Filecoin Strategy Launchpad";
pub const SITE_DESCRIPTION: &str =
    "Strategic clarity for Filecoin ecosystem teams. Turn technical excellence into market traction.";
pub const SOCIAL_DESCRIPTION: &str = "Strategic clarity for Filecoin ecosystem teams.";

/// Placeholder form link used when no `WAITLIST_URL` is set at build time.
pub const WAITLIST_URL_PLACEHOLDER: &str = "https://tally.so/r/filecoin-strategy-launchpad";

/// External waitlist form. Opened in a new tab; its response is never read.
///
/// Set `WAITLIST_URL` in the build environment to point at the real form.
pub const WAITLIST_URL: &str = waitlist_url_or(option_env!("WAITLIST_URL"));

const fn waitlist_url_or(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(url) if !url.is_empty() => url,
        _ => WAITLIST_URL_PLACEHOLDER,
    }
}

pub const CREDIT_LINE: &str = "Powered by Jayne & Clarity University";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    pub main: &'static str,
    pub sub: &'static str,
}

pub const PROBLEMS: &[Problem] = &[
    Problem {
        main: "You've built something powerful on Filecoin",
        sub: "but struggle to explain why anyone should care",
    },
    Problem {
        main: "You compete on price or technical specs",
        sub: "because you can't articulate your real differentiation",
    },
    Problem {
        main: "Your pitch deck explains what you do, not why it matters",
        sub: "so enterprise clients tune out",
    },
    Problem { main: "You got the grant, shipped the code", sub: "but adoption is painfully slow" },
    Problem {
        main: "You're doing everything right technically",
        sub: "yet still feel like you're shouting into the void",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "◇",
        title: "Crystal clear positioning",
        desc: "Explain your value in one sentence. No more fumbled pitches.",
    },
    Benefit { icon: "↗", title: "Faster adoption", desc: "When the message is right, users and enterprises show up." },
    Benefit { icon: "◎", title: "Inbound demand", desc: "Stop chasing. Start attracting the right customers." },
    Benefit {
        icon: "◈",
        title: "Premium pricing",
        desc: "Compete on value, not price. Escape the race to the bottom.",
    },
];

pub const AUDIENCES: &[&str] = &[
    "Storage Providers",
    "FVM Builders",
    "ProPGF Recipients",
    "RetroPGF Recipients",
    "Infrastructure Teams",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Jayne",
        role: "Strategy lead",
        bio: "Brings enterprise-grade positioning and go-to-market methodology to ecosystem teams.",
    },
    TeamMember {
        name: "Clarity University",
        role: "Methodology partner",
        bio: "Structured curriculum for turning technical depth into a message buyers understand.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramFeature {
    pub file: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const PROGRAM_FEATURES: &[ProgramFeature] = &[
    ProgramFeature {
        file: "01-positioning",
        title: "Positioning sprint",
        desc: "Find the one sentence that explains why your solution matters.",
    },
    ProgramFeature {
        file: "02-narrative",
        title: "Narrative workshop",
        desc: "Turn specs into a story enterprises and users repeat for you.",
    },
    ProgramFeature {
        file: "03-pitch-review",
        title: "Pitch review",
        desc: "Rework your deck around outcomes instead of architecture.",
    },
    ProgramFeature {
        file: "04-gtm-roadmap",
        title: "Go-to-market roadmap",
        desc: "Sequence channels, partners and pricing so adoption compounds.",
    },
];

/// Team table rendered as pretty JSON for the `team.json` pane.
pub fn team_json() -> String {
    serde_json::to_string_pretty(TEAM).unwrap_or_else(|_| "[]".to_owned())
}
