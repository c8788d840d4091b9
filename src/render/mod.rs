//! Landing page rendering
//!
//! The page is a fixed tera template. Section renderers from a
//! [`SectionRegistry`] build one template variable each from the document
//! metadata; `site` comes from [`SiteConfig`]. Every field is optional and
//! falls back to a default.
//!
//! Autoescaping is off: values are inserted as written, so metadata may
//! carry inline HTML.

mod fields;
mod sections;

pub use fields::Fields;
pub use sections::SectionRegistry;

use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::error::{Result, render};
use crate::frontmatter::ParsedDocument;

/// The landing page template
pub const LANDING_TEMPLATE: &str = include_str!("../../templates/landing.html");

const LANDING_NAME: &str = "landing.html";

fn landing_engine() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(Vec::new());
    tera.add_raw_template(LANDING_NAME, LANDING_TEMPLATE)
        .map_err(|e| render::template_failed(&e))?;
    Ok(tera)
}

/// Template variables: one per registered section plus `site`.
pub fn context(document: &ParsedDocument, site: &SiteConfig, registry: &SectionRegistry) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    for (name, value) in registry.render_all(&Fields::of(document)) {
        context.insert(name, &value);
    }
    context
}

/// Render the landing page.
pub fn render_page(
    document: &ParsedDocument,
    site: &SiteConfig,
    registry: &SectionRegistry,
) -> Result<String> {
    let tera = landing_engine()?;
    tera.render(LANDING_NAME, &context(document, site, registry))
        .map_err(|e| render::template_failed(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::load;

    const HOME: &str = r#"---
hero:
  title: "Apprends à coder: en t'amusant"
  subtitle: "Ateliers pour les 8-14 ans"
  button_text: 'Découvrir'
benefits:
  - Logique
  - "Créativité"
  - Confiance en soi
about:
  presentation: |
    Un atelier chaque semaine
    en petits groupes.
organization:
  schedule: |
    Mercredi 14h
    Samedi 10h
---
Corps du document.
"#;

    fn render(text: &str) -> String {
        let doc = load(text).unwrap();
        render_page(&doc, &SiteConfig::default(), &SectionRegistry::with_defaults()).unwrap()
    }

    #[test]
    fn test_template_compiles() {
        assert!(landing_engine().is_ok());
    }

    #[test]
    fn test_hero_fields_substituted_verbatim() {
        let page = render(HOME);
        assert!(page.contains("Apprends à coder: en t'amusant"));
        assert!(page.contains("Ateliers pour les 8-14 ans"));
        assert!(page.contains(">Découvrir</a>"));
        assert!(!page.contains("Titre par défaut"));
    }

    #[test]
    fn test_benefits_enumerated_in_order() {
        let page = render(HOME);
        let positions: Vec<usize> = ["Logique", "Créativité", "Confiance en soi"]
            .iter()
            .map(|b| page.find(b).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(page.matches(r#"<div class="text-4xl mb-4">✨</div>"#).count(), 3);
    }

    #[test]
    fn test_block_scalar_rendered() {
        let page = render(HOME);
        assert!(page.contains("Un atelier chaque semaine\nen petits groupes."));
        assert!(page.contains("<p>Mercredi 14h<br>Samedi 10h</p>"));
    }

    #[test]
    fn test_missing_rows_left_out() {
        let page = render(HOME);
        assert!(page.contains("📅 Horaires"));
        assert!(!page.contains("📍 Lieu"));
        assert!(!page.contains("🔒 Sécurité"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let page = render("---\nhero:\n  subtitle: Ateliers <em>gratuits</em> & ouverts\n---\n");
        assert!(page.contains("Ateliers <em>gratuits</em> & ouverts"));
    }

    #[test]
    fn test_empty_metadata_uses_defaults() {
        let page = render("---\n\n---\n");
        assert!(page.contains("Titre par défaut"));
        assert!(page.contains("En savoir plus"));
        assert!(page.contains(r#"<html lang="fr">"#));
        assert!(!page.contains("{{") && !page.contains("{%"));
    }

    #[test]
    fn test_cms_shaped_benefits_do_not_leak_into_hero() {
        let page = render(
            "---\nhero:\n  subtitle: \"Sub\"\nbenefits:\n  - emoji: \"🧠\"\n    title: \"Logique\"\n    description: \"Penser\"\n---\n",
        );
        assert!(page.contains(r#"<h2 class="text-5xl font-bold mb-6">Titre par défaut</h2>"#));
        assert!(page.contains(">Sub</p>"));
    }

    #[test]
    fn test_site_texts() {
        let site = SiteConfig {
            name: "Code Club".to_string(),
            lang: "en".to_string(),
            ..SiteConfig::default()
        };
        let page = render_page(
            &ParsedDocument::default(),
            &site,
            &SectionRegistry::with_defaults(),
        )
        .unwrap();
        assert!(page.contains(r#"<html lang="en">"#));
        assert!(page.contains("Code Club"));
    }

    #[test]
    fn test_context_holds_every_section() {
        let context = context(
            &ParsedDocument::default(),
            &SiteConfig::default(),
            &SectionRegistry::with_defaults(),
        );
        for name in ["site", "hero", "about", "benefits", "program", "practical"] {
            assert!(context.contains_key(name), "missing template variable {name}");
        }
    }
}
