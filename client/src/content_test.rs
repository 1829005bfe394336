use super::*;

#[test]
fn tech_line_joins_with_commas() {
    assert_eq!(PROJECTS[0].tech_line(), "JavaScript, Chrome Extensions API, HTML/CSS");
    assert_eq!(PROJECTS[1].tech_line(), "Unity, C#, Blender");
}

#[test]
fn tech_line_of_empty_list_is_empty() {
    let project = Project { title: "t", description: "d", tech: &[] };
    assert_eq!(project.tech_line(), "");
}

#[test]
fn project_titles_are_unique_and_non_empty() {
    for (i, a) in PROJECTS.iter().enumerate() {
        assert!(!a.title.is_empty());
        assert!(!a.description.is_empty());
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn contact_links_use_expected_schemes() {
    for link in CONTACT_LINKS {
        assert!(
            link.href.starts_with("mailto:") || link.href.starts_with("https://"),
            "unexpected href {}",
            link.href
        );
        assert!(link.href.ends_with(link.display), "href {} does not end with {}", link.href, link.display);
    }
}

#[test]
fn contact_links_cover_email_linkedin_github() {
    let labels: Vec<_> = CONTACT_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Email", "LinkedIn", "GitHub"]);
}

#[test]
fn headline_mentions_owner_name() {
    assert!(PROFILE.headline.contains(PROFILE.name));
}

#[test]
fn multiline_text_has_no_doubled_spaces() {
    for text in [PROFILE.intro, PROFILE.about, PROJECTS[0].description, PROJECTS[1].description] {
        assert!(!text.contains("  "), "{text}");
    }
}
