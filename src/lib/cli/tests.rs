use crate::config::{Page, Registry, SocialLink, registry};

use super::{Command, run};

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_known_commands() {
    assert_eq!(Command::parse(&args(&[])).unwrap(), Command::Dump);
    assert_eq!(Command::parse(&args(&["check"])).unwrap(), Command::Check);
    assert_eq!(Command::parse(&args(&["socials"])).unwrap(), Command::Socials);
    assert_eq!(
        Command::parse(&args(&["page", "projects"])).unwrap(),
        Command::Page(Page::Projects)
    );
}

#[test]
fn unknown_page_is_an_error() {
    let err = Command::parse(&args(&["page", "about"])).unwrap_err();
    assert_eq!(err.to_string(), r#"Unknown page "about""#);
}

#[test]
fn missing_page_name_is_an_error() {
    let err = Command::parse(&args(&["page"])).unwrap_err();
    assert_eq!(err.to_string(), "Missing page name");
}

#[test]
fn unknown_command_is_an_error() {
    let err = Command::parse(&args(&["serve"])).unwrap_err();
    assert_eq!(err.to_string(), r#"Unknown command "serve""#);
}

#[test]
fn socials_print_tab_separated_in_order() {
    let out = run(Command::Socials, registry()).unwrap();
    assert_eq!(
        out,
        "X (formerly Twitter)\thttps://twitter.com/ditinagrawal\n\
         GitHub\thttps://github.com/ditinagrawal\n\
         LinkedIn\thttps://www.linkedin.com/in/ditinagrawal\n"
    );
}

#[test]
fn page_prints_its_record() {
    let out = run(Command::Page(Page::Home), registry()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["title"], "Home");
    assert_eq!(
        json["description"],
        "Welcome to my blog! I write about things I care about."
    );
}

#[test]
fn dump_prints_whole_registry() {
    let out = run(Command::Dump, registry()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["site"]["title"], "Bloggy");
    assert_eq!(json["site"]["postsPerHomepage"], 5);
    assert_eq!(json["blog"]["title"], "Blog");
    assert_eq!(json["socials"].as_array().unwrap().len(), 3);
}

#[test]
fn check_prints_nothing_when_valid() {
    assert_eq!(run(Command::Check, registry()).unwrap(), "");
}

#[test]
fn dump_and_check_refuse_defective_registry() {
    let reg = Registry {
        socials: &[SocialLink {
            name: "GitHub",
            href: "github.com/ditinagrawal",
        }],
        ..*registry()
    };
    assert!(run(Command::Check, &reg).is_err());
    assert!(run(Command::Dump, &reg).is_err());
}
