use serde::{Deserialize, Serialize};

use super::Page;
use crate::models::{ChecklistResource, ResourceLink};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityProps {
    pub checklist: Vec<ChecklistResource>,
}

fn link(name: &str, url: &str) -> ResourceLink {
    ResourceLink {
        name: name.to_string(),
        url: url.to_string(),
    }
}

fn item(title: &str, description: &str, resources: Vec<ResourceLink>) -> ChecklistResource {
    ChecklistResource {
        title: title.to_string(),
        description: description.to_string(),
        resources,
    }
}

/// The security checklist. Built into the binary, never regenerated.
///
/// Sample entries standing in for the site's checklist data files.
pub fn checklist() -> Vec<ChecklistResource> {
    vec![
        item(
            "Use a password manager",
            "Generate and store a unique password for every account.",
            vec![
                link("1Password", "https://1password.com"),
                link("Bitwarden", "https://bitwarden.com"),
            ],
        ),
        item(
            "Enable two-factor authentication",
            "Prefer hardware keys or an authenticator app over SMS codes.",
            vec![
                link("YubiKey", "https://www.yubico.com"),
                link("2FA Directory", "https://2fa.directory"),
            ],
        ),
        item(
            "Check for breached accounts",
            "Find out whether your email address appears in known data breaches.",
            vec![link("Have I Been Pwned", "https://haveibeenpwned.com")],
        ),
        item(
            "Use an encrypted messenger",
            "End-to-end encryption keeps conversations between the people in them.",
            vec![link("Signal", "https://signal.org")],
        ),
        item(
            "Keep software up to date",
            "Turn on automatic updates for your operating system and browser.",
            vec![],
        ),
    ]
}

pub fn security() -> Page<SecurityProps> {
    Page::fixed(SecurityProps {
        checklist: checklist(),
    })
}
