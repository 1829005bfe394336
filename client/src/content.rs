//! Static site content rendered by the page components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Owner details shown on the navbar, home, and about pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub about: &'static str,
}

/// A portfolio entry on the projects page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

impl Project {
    /// Comma-separated technology list for the card footer.
    pub fn tech_line(&self) -> String {
        self.tech.join(", ")
    }
}

/// One line on the contact page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub display: &'static str,
    pub href: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Lee",
    headline: "Hi, I'm Alex Lee 👋",
    intro: "I'm a Computer Science student passionate about creating useful, elegant, and efficient \
            digital tools. Welcome to my portfolio.",
    about: "I'm currently pursuing a Bachelor's degree in Computer Science at Wilfrid Laurier \
            University. My interests include frontend development, AWS cloud services, and game \
            development. I enjoy building tools and interactive experiences that make everyday \
            life more efficient and fun.",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "TabCycle Chrome Extension",
        description: "A Chrome extension that automatically cycles tabs and schedules tabs to open \
                      and close at specific times.",
        tech: &["JavaScript", "Chrome Extensions API", "HTML/CSS"],
    },
    Project {
        title: "Rhythm Dungeon Crawler (WIP)",
        description: "A 3D rhythm-based first-person game about timing movement and attacks to the \
                      beat.",
        tech: &["Unity", "C#", "Blender"],
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "📧",
        label: "Email",
        display: "alexlee.dev@example.com",
        href: "mailto:alexlee.dev@example.com",
    },
    ContactLink {
        icon: "🔗",
        label: "LinkedIn",
        display: "linkedin.com/in/alexleedev",
        href: "https://linkedin.com/in/alexleedev",
    },
    ContactLink {
        icon: "🐙",
        label: "GitHub",
        display: "github.com/alexleedev",
        href: "https://github.com/alexleedev",
    },
];
