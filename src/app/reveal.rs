use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Entrance, RevealLatch};

/// Plays `entrance` the first time the wrapper scrolls into view.
///
/// With `on_mount` set the entrance plays as soon as the component mounts in
/// the browser, whether or not it is visible.
#[component]
pub fn Reveal(
    entrance: Entrance,
    #[prop(into, optional)] class: String,
    #[prop(optional)] on_mount: bool,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let latch = RwSignal::new(RevealLatch::default());

    Effect::new(move |_| {
        let seen = on_mount || visible.get();
        if seen && !latch.get_untracked().is_revealed() {
            latch.update(|l| {
                l.observe(true);
            });
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=class
            style=move || entrance.style(latch.with(RevealLatch::is_revealed))
        >
            {children()}
        </div>
    }
}
