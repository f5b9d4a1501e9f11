use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

static SITE_CONTENT: LazyLock<SiteContent> =
    LazyLock::new(|| SiteContent::load().expect("Should be able to load site content"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Site content document not found")]
    Missing,
    #[error("Couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything rendered by the page: copy, image paths, contact entries.
/// Constant configuration data, deserialized once from the embedded
/// `content/site.json` and never mutated at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub hero: Hero,
    pub marquee: Vec<String>,
    pub about: About,
    pub connect: Connect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub intro: String,
    pub lead: String,
    pub connect_label: String,
    pub about_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub heading: String,
    pub facts: Vec<Fact>,
    pub favorites_heading: String,
    pub favorites: Vec<Favorite>,
    pub footer_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fact {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connect {
    pub phone: Phone,
    pub links: Vec<SocialLink>,
    pub footer_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phone {
    pub number: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
    pub accent: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let raw = Assets::get("site.json").ok_or(ContentError::Missing)?;
        let content = serde_json::from_slice(&raw.data)?;
        Ok(content)
    }
}

/// Shared handle to the parsed content document.
pub fn site() -> &'static SiteContent {
    &SITE_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_parses() {
        let content = SiteContent::load().expect("embedded content should parse");
        assert_eq!(content.owner, "Parham Moradi");
        assert_eq!(content.hero.greeting, "Hello My Friend!");
        assert_eq!(content.hero.intro, "it's parham .");
    }

    #[test]
    fn test_marquee_has_eight_logos() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.marquee.len(), 8);
        assert_eq!(content.marquee[0], "/esteghlal.png");
        assert_eq!(content.marquee[7], "/Amir-tataloo.png");
    }

    #[test]
    fn test_favorites_fixed_order() {
        let content = SiteContent::load().unwrap();
        let names = content
            .about
            .favorites
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Esteghlal",
                "Liverpool",
                "Nike",
                "Jordan",
                "Benz",
                "Apple",
                "PlayStation",
                "Amir Tataloo",
            ]
        );
    }

    #[test]
    fn test_identity_facts() {
        let content = SiteContent::load().unwrap();
        let labels = content
            .about
            .facts
            .iter()
            .map(|f| f.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Full Name", "Birthday", "Lives in", "Work"]);
        assert_eq!(content.about.facts[1].value, "14 August 2008");
    }

    #[test]
    fn test_contact_entries() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.connect.phone.number, "+98 936 698 1815");
        assert_eq!(content.connect.links.len(), 2);
        assert_eq!(content.connect.links[0].href, "https://t.me/parham_yakuza");
        assert!(content.connect.links[1].href.starts_with("https://www.instagram.com/"));
    }

    #[test]
    fn test_shared_handle_is_cached() {
        let a = site() as *const SiteContent;
        let b = site() as *const SiteContent;
        assert_eq!(a, b);
    }
}
