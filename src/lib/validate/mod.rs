//! Authoring-time checks over the configuration registry.
//!
//! The registry accessors never fail; a bad literal is caught here, by the
//! test suite or by `bloggy check`, before the site ships.

use std::fmt;

use color_eyre::eyre::eyre;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    config::{Page, Registry},
    types::{AbsoluteUrl, EmailAddress},
};

/// A configuration-authoring mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Defect {
    EmptyField {
        record: String,
        field: &'static str,
    },
    MalformedEmail(String),
    MalformedUrl {
        name: String,
        href: String,
    },
    DuplicateHref(String),
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::EmptyField { record, field } => write!(f, "{record}.{field} is empty"),
            Defect::MalformedEmail(email) => write!(f, "site email {email:?} is not an address"),
            Defect::MalformedUrl { name, href } => {
                write!(f, "social link {name:?} has non-absolute href {href:?}")
            }
            Defect::DuplicateHref(href) => write!(f, "href {href:?} is listed more than once"),
        }
    }
}

/// Collect every defect in `registry`, in record order.
pub fn defects(registry: &Registry) -> Vec<Defect> {
    let mut found = Vec::new();

    let site = &registry.site;
    require(&mut found, "site", "title", site.title);
    require(&mut found, "site", "description", site.description);
    require(&mut found, "site", "email", site.email);
    match EmailAddress::parse(site.email) {
        Some(email) => {
            debug!(title = site.title, domain = email.domain(), "checked site record");
        }
        None if !site.email.is_empty() => {
            found.push(Defect::MalformedEmail(site.email.to_string()));
        }
        None => {}
    }

    for page in Page::ALL {
        let meta = registry.page(page);
        let record = format!("pages.{page}");
        require(&mut found, &record, "title", meta.title);
        require(&mut found, &record, "description", meta.description);
        debug!(%page, "checked page record");
    }

    let mut targets = Vec::with_capacity(registry.socials.len());
    for (i, link) in registry.socials.iter().enumerate() {
        let record = format!("socials[{i}]");
        require(&mut found, &record, "name", link.name);
        require(&mut found, &record, "href", link.href);
        match AbsoluteUrl::parse(link.href) {
            Some(url) => {
                debug!(name = link.name, host = url.host(), "checked social link");
                targets.push(url);
            }
            None if !link.href.is_empty() => found.push(Defect::MalformedUrl {
                name: link.name.to_string(),
                href: link.href.to_string(),
            }),
            None => {}
        }
    }

    // Compare normalised URLs so case-only host differences still collide.
    found.extend(
        targets
            .iter()
            .map(AbsoluteUrl::as_str)
            .duplicates()
            .map(|href| Defect::DuplicateHref(href.to_string())),
    );
    debug!(socials = registry.socials.len(), "checked social links");

    for defect in &found {
        warn!(%defect, "configuration defect");
    }
    found
}

/// Fail with every defect listed if `registry` is not fit to ship.
pub fn check(registry: &Registry) -> color_eyre::Result<()> {
    let found = defects(registry);
    if found.is_empty() {
        return Ok(());
    }
    Err(eyre!(
        "Found {} configuration defect(s): {}",
        found.len(),
        found.iter().join("; ")
    ))
}

fn require(found: &mut Vec<Defect>, record: &str, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        found.push(Defect::EmptyField {
            record: record.to_string(),
            field,
        });
    }
}
