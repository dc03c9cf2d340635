//! Compiled-in site configuration.
//!
//! Every record here is a `const` built from `&'static str` literals, so the
//! registry is fixed at compile time and shared read-only by all callers.

use std::fmt;

use serde::Serialize;

// Site-wide identity and homepage limits.
pub const SITE: Site = Site {
    title: "Bloggy",
    description: "A blog by ditin agrawal.",
    email: "ditin.agrawal05@gmail.com",
    posts_per_homepage: 5,
    projects_per_homepage: 3,
};

pub const HOME: PageMetadata = PageMetadata {
    title: "Home",
    description: "Welcome to my blog! I write about things I care about.",
};

pub const BLOG: PageMetadata = PageMetadata {
    title: "Blog",
    description: "A collection of my thoughts and ideas.",
};

pub const PROJECTS: PageMetadata = PageMetadata {
    title: "Projects",
    description: "A collection of my projects. Some are finished, some are not. Some are good, some are not.",
};

// Display order matters: renderers list these exactly as declared.
pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "X (formerly Twitter)",
        href: "https://twitter.com/ditinagrawal",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/ditinagrawal",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/ditinagrawal",
    },
];

static REGISTRY: Registry = Registry {
    site: SITE,
    home: HOME,
    blog: BLOG,
    projects: PROJECTS,
    socials: SOCIALS,
};

/// Global identity of the website.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub title: &'static str,
    pub description: &'static str,
    /// Contact address. Shape is checked by [`crate::validate`], not here.
    pub email: &'static str,
    pub posts_per_homepage: usize,
    pub projects_per_homepage: usize,
}

/// Title and description for one page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// A link to an external profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// The pages that carry their own metadata. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    Blog,
    Projects,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Blog, Page::Projects];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Blog => "blog",
            Page::Projects => "projects",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Everything a renderer needs, bundled as one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Registry {
    pub site: Site,
    pub home: PageMetadata,
    pub blog: PageMetadata,
    pub projects: PageMetadata,
    pub socials: &'static [SocialLink],
}

impl Registry {
    pub fn page(&self, page: Page) -> &PageMetadata {
        match page {
            Page::Home => &self.home,
            Page::Blog => &self.blog,
            Page::Projects => &self.projects,
        }
    }
}

pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub fn site() -> &'static Site {
    &REGISTRY.site
}

pub fn page_metadata(page: Page) -> &'static PageMetadata {
    REGISTRY.page(page)
}

pub fn social_links() -> &'static [SocialLink] {
    REGISTRY.socials
}
