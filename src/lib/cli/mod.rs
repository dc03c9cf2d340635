//! Command dispatch for the `bloggy` binary. Commands render to a string so
//! `main` only has to print it.

use color_eyre::{Section, eyre::eyre};
use tracing::info;

use crate::{
    config::{Page, Registry},
    validate::check,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Validate, then print the whole registry as JSON.
    Dump,
    Check,
    Page(Page),
    /// One `name<TAB>href` line per link, in declaration order.
    Socials,
}

impl Command {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: &[String]) -> color_eyre::Result<Self> {
        match args.first().map(String::as_str) {
            None => Ok(Command::Dump),
            Some("check") => Ok(Command::Check),
            Some("socials") => Ok(Command::Socials),
            Some("page") => {
                let slug = args
                    .get(1)
                    .ok_or_else(|| eyre!("Missing page name"))
                    .with_note(|| "Usage: bloggy page <home|blog|projects>")?;
                Page::from_slug(slug)
                    .map(Command::Page)
                    .ok_or_else(|| eyre!("Unknown page {slug:?}"))
                    .with_note(|| "Expected one of: home, blog, projects")
            }
            Some(other) => Err(eyre!("Unknown command {other:?}"))
                .with_note(|| "Expected one of: check, page <name>, socials"),
        }
    }
}

pub fn run(command: Command, registry: &Registry) -> color_eyre::Result<String> {
    match command {
        Command::Dump => {
            check(registry).with_note(|| "While validating the site configuration")?;
            Ok(format!("{}\n", serde_json::to_string_pretty(registry)?))
        }
        Command::Check => {
            check(registry)?;
            info!("configuration is valid");
            Ok(String::new())
        }
        Command::Page(page) => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(registry.page(page))?
        )),
        Command::Socials => Ok(registry
            .socials
            .iter()
            .map(|link| format!("{}\t{}\n", link.name, link.href))
            .collect()),
    }
}

#[cfg(test)]
mod tests;
