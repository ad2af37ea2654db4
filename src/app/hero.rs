use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::reveal::Reveal;
use crate::content::PROFILE;
use crate::motion::{scroll_progress, scroll_scale, Entrance};
#[cfg(feature = "hydrate")]
use crate::scene::{Scene, SceneError};

#[component]
pub fn Hero() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scale = Memo::new(move |_| {
        let (height, viewport) = page_extent();
        scroll_scale(scroll_progress(scroll_y.get(), height, viewport))
    });

    view! {
        <div class="h-screen relative overflow-hidden">
            <HeroCanvas />
            <div class="absolute inset-0 flex items-center justify-center z-10 bg-gradient-to-b from-transparent via-gray-900/30 to-gray-900">
                <div style:transform=move || format!("scale({})", scale.get())>
                    <Reveal entrance=Entrance::rise(1000) on_mount=true class="text-center px-4">
                        <h1 class="text-7xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500">
                            {PROFILE.name}
                        </h1>
                        <p class="text-2xl text-gray-300 mb-8">{PROFILE.headline}</p>
                        <div class="inline-block transition-transform duration-200 hover:scale-105">
                            <a
                                href="#contact"
                                class="px-8 py-3 bg-indigo-600 rounded-full text-lg font-semibold hover:bg-indigo-700 transition-colors"
                            >
                                "Contáctame"
                            </a>
                        </div>
                    </Reveal>
                </div>
            </div>
        </div>
    }
}

/// Total document height and viewport height, in CSS pixels.
#[cfg(feature = "hydrate")]
fn page_extent() -> (f64, f64) {
    let height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    let viewport = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    (height, viewport)
}

#[cfg(not(feature = "hydrate"))]
fn page_extent() -> (f64, f64) {
    (0.0, 0.0)
}

/// The server renders an empty canvas; the scene starts drawing once the
/// component is mounted in the browser.
#[component]
fn HeroCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let scene = StoredValue::new(Scene::default());
        let warned = StoredValue::new(false);
        use_raf_fn(move |args: UseRafFnCallbackArgs| {
            scene.update_value(|s| s.advance(args.delta));
            let res = canvas_ref
                .get_untracked()
                .ok_or(SceneError::NotMounted)
                .and_then(|canvas| scene.with_value(|s| draw(&canvas, s)));
            match res {
                Ok(()) | Err(SceneError::NotMounted) => {}
                Err(e) => {
                    if !warned.get_value() {
                        log::warn!("hero scene disabled: {e}");
                        warned.set_value(true);
                    }
                }
            }
        });
    }

    view! {
        <canvas node_ref=canvas_ref class="absolute inset-0 w-full h-full" aria-hidden="true"></canvas>
    }
}

#[cfg(feature = "hydrate")]
fn draw(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<(), SceneError> {
    use std::f64::consts::TAU;
    use wasm_bindgen::JsCast;

    let ratio = window().device_pixel_ratio();
    let width = (canvas.client_width() as f64 * ratio).round();
    let height = (canvas.client_height() as f64 * ratio).round();
    if canvas.width() != width as u32 {
        canvas.set_width(width as u32);
    }
    if canvas.height() != height as u32 {
        canvas.set_height(height as u32);
    }

    let ctx = canvas
        .get_context("2d")
        .map_err(|_| SceneError::NoContext)?
        .ok_or(SceneError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SceneError::NoContext)?;

    let frame = scene.frame(width, height);
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(&format!("rgba({}, 0.9)", scene.config().star_color));
    ctx.begin_path();
    for star in &frame.stars {
        let radius = star.radius * ratio;
        ctx.move_to(star.x + radius, star.y);
        ctx.arc(star.x, star.y, radius, 0.0, TAU)
            .map_err(|_| SceneError::Draw)?;
    }
    ctx.fill();

    ctx.set_stroke_style_str(scene.config().cube_color);
    ctx.set_line_width(ratio);
    ctx.begin_path();
    for (a, b) in &frame.edges {
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
    }
    ctx.stroke();

    Ok(())
}
