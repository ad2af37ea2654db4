use leptos::prelude::*;

use crate::content::{ContactKind, SkillIcon};

/// Outline icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Brain,
    Rocket,
    Github,
    Linkedin,
    FileDown,
}

impl Glyph {
    fn markup(self) -> &'static str {
        match self {
            Glyph::Code => {
                r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#
            }
            Glyph::Brain => {
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/><path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/><path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4"/>"#
            }
            Glyph::Rocket => {
                r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#
            }
            Glyph::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Glyph::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Glyph::FileDown => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M12 18v-6"/><path d="m9 15 3 3 3-3"/>"#
            }
        }
    }
}

impl From<SkillIcon> for Glyph {
    fn from(value: SkillIcon) -> Self {
        match value {
            SkillIcon::Code => Glyph::Code,
            SkillIcon::Brain => Glyph::Brain,
            SkillIcon::Rocket => Glyph::Rocket,
        }
    }
}

impl From<ContactKind> for Glyph {
    fn from(value: ContactKind) -> Self {
        match value {
            ContactKind::CodeHost => Glyph::Github,
            ContactKind::ProfessionalNetwork => Glyph::Linkedin,
            ContactKind::Document => Glyph::FileDown,
        }
    }
}

#[component]
pub fn Icon(#[prop(into)] glyph: Glyph, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=glyph.markup()
        ></svg>
    }
}
