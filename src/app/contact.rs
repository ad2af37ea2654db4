use leptos::{either::Either, prelude::*};

use super::icons::Icon;
use super::reveal::Reveal;
use crate::content::{ContactLink, CONTACT_LINKS};
use crate::motion::Entrance;

const BUTTON_CLASS: &str = "flex items-center px-6 py-3 bg-gray-800 rounded-xl hover:bg-gray-700 transition duration-200 hover:scale-105";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-32 px-4 md:px-20">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-5xl font-bold mb-16">"Contacto"</h2>
                <Reveal
                    entrance=Entrance::rise(500)
                    class="flex flex-col md:flex-row justify-center items-center space-y-6 md:space-y-0 md:space-x-12"
                >
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| view! { <ContactButton link=*link /> })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactButton(link: ContactLink) -> impl IntoView {
    let body = view! {
        <Icon glyph=link.kind class="w-8 h-8 mr-3" />
        <span>{link.label}</span>
    };
    match link.download_name() {
        Some(name) => Either::Left(view! {
            <a href=link.href download=name class=BUTTON_CLASS data-contact-link=link.label>
                {body}
            </a>
        }),
        None => Either::Right(view! {
            <a
                href=link.href
                target="_blank"
                rel="noopener noreferrer"
                class=BUTTON_CLASS
                data-contact-link=link.label
            >
                {body}
            </a>
        }),
    }
}
