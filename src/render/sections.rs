//! Section registry for the landing page
//!
//! Each section turns metadata fields into the template variable named
//! after it (`hero`, `benefits`, ...). Defaults are applied here; loops and
//! optional rows live in the template. The registry is built once at
//! start-up and handed to the renderer by reference.

use std::collections::HashMap;

use serde_json::{Value, json};

use super::fields::Fields;
use crate::error::{Result, render};

/// Builds the template variable owned by one section.
pub type SectionRenderer = fn(&Fields<'_>) -> Value;

#[derive(Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub render: SectionRenderer,
}

/// Registry of all page sections
pub struct SectionRegistry {
    sections: Vec<Section>,
    by_name: HashMap<&'static str, usize>,
}

impl SectionRegistry {
    /// Create a new registry with the given sections
    pub fn new(sections: Vec<Section>) -> Self {
        let by_name = sections
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.name, idx))
            .collect();

        Self { sections, by_name }
    }

    /// Create a registry with the landing page sections
    pub fn with_defaults() -> Self {
        Self::new(default_sections())
    }

    pub fn get(&self, name: &str) -> Result<&Section> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.sections.get(idx))
            .ok_or_else(|| render::section_not_found(name, self.names()))
    }

    /// Section names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.name)
    }

    /// Render a single section
    pub fn render(&self, name: &str, fields: &Fields<'_>) -> Result<Value> {
        let section = self.get(name)?;
        Ok((section.render)(fields))
    }

    /// Render every section, in registration order
    pub fn render_all(&self, fields: &Fields<'_>) -> Vec<(&'static str, Value)> {
        self.sections
            .iter()
            .map(|section| {
                tracing::trace!(section = section.name, "rendering section");
                (section.name, (section.render)(fields))
            })
            .collect()
    }
}

fn default_sections() -> Vec<Section> {
    vec![
        Section {
            name: "hero",
            render: render_hero,
        },
        Section {
            name: "about",
            render: render_about,
        },
        Section {
            name: "benefits",
            render: render_benefits,
        },
        Section {
            name: "program",
            render: render_program,
        },
        Section {
            name: "practical",
            render: render_practical,
        },
    ]
}

fn render_hero(fields: &Fields<'_>) -> Value {
    json!({
        "title": fields.text_or("hero", "title", "Titre par défaut"),
        "subtitle": fields.text_or("hero", "subtitle", ""),
        "button_text": fields.text_or("hero", "button_text", "En savoir plus"),
    })
}

fn render_about(fields: &Fields<'_>) -> Value {
    json!({
        "presentation": fields.text_or("about", "presentation", ""),
        "vision": fields.text_or("about", "vision", ""),
    })
}

/// One card per list entry, in document order.
fn render_benefits(fields: &Fields<'_>) -> Value {
    let cards: Vec<Value> = fields
        .top_list("benefits")
        .iter()
        .map(|title| json!({ "emoji": "✨", "title": title }))
        .collect();
    json!({ "cards": cards })
}

fn render_program(fields: &Fields<'_>) -> Value {
    let level = |section: &str| {
        json!({
            "path": fields.list(section, "path"),
            "projects": fields.list(section, "projects"),
        })
    };
    json!({
        "beginners": level("program_beginners"),
        "advanced": level("program_advanced"),
    })
}

/// Missing rows are `null` so the template can leave them out.
fn render_practical(fields: &Fields<'_>) -> Value {
    json!({
        "organization": {
            "schedule": fields.text("organization", "schedule"),
            "groups": fields.text("organization", "groups"),
            "location": fields.text("organization", "location"),
            "pricing": fields.text("organization", "pricing"),
        },
        "security": {
            "safety": fields.text("security", "safety"),
            "equipment": fields.text("security", "equipment"),
            "resources": fields.text("security", "resources"),
        },
    })
}
