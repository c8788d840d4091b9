//! Site-wide texts that are not part of the content document.

use serde::{Deserialize, Serialize};

/// Static texts placed in the page head, navigation and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name, shown in the navigation bar and the footer
    pub name: String,

    /// Page title (`<title>`)
    pub title: String,

    /// Value of the `lang` attribute on `<html>`
    pub lang: String,

    /// Footer tagline
    pub tagline: String,

    /// Footer copyright line
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Atelier Coding".to_string(),
            title: "Atelier Coding pour Enfants".to_string(),
            lang: "fr".to_string(),
            tagline: "Développer les compétences de demain, aujourd'hui".to_string(),
            copyright: "© 2024 Atelier Coding. Tous droits réservés.".to_string(),
        }
    }
}
