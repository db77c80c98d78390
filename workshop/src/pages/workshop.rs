//! Demo page: a playground button driven by the URL query, and a gallery of
//! every variant combination.

use leptos::*;
use leptos_router::*;
use variants::ButtonVariants;

use crate::components::button::Button;

#[component]
pub fn WorkshopPage() -> impl IntoView {
    let query = use_query_map();
    let clicks = create_rw_signal(0u32);

    let playground = move || {
        let parsed = query.with(|q| ButtonVariants::from_lookup(|key| q.get(key).cloned()));
        match parsed {
            Ok(v) => view! {
                <div class="flex flex-col items-start gap-3">
                    <Button
                        impact=v.impact
                        size=v.size
                        shape=v.shape
                        on_click=Callback::new(move |_| clicks.update(|n| *n += 1))
                    >
                        "Click me"
                    </Button>
                    <p class="text-sm">{move || format!("Clicked {} times", clicks.get())}</p>
                    <code class="text-xs break-all">{v.resolve()}</code>
                </div>
            }
            .into_view(),
            Err(e) => {
                leptos::logging::warn!("invalid button query: {}", e);
                view! {
                    <div class="rounded-md bg-red-50 p-3 text-red-700">{e.to_string()}</div>
                }
                .into_view()
            }
        }
    };

    let gallery = ButtonVariants::all()
        .map(|v| {
            view! {
                <div class="flex flex-col items-start gap-1">
                    <Button impact=v.impact size=v.size shape=v.shape attr:title=v.to_string()>
                        "Button"
                    </Button>
                    <span class="text-xs text-slate-500">{v.to_string()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <h1 class="mb-6 text-2xl font-semibold">"Button workshop"</h1>

        <section id="playground" class="mb-10">
            <h2 class="mb-3 text-lg font-semibold">"Playground"</h2>
            <p class="mb-3 text-sm text-slate-600">
                "Set the variants in the URL, e.g. ?impact=light&size=small&shape=pill"
            </p>
            {playground}
        </section>

        <section id="gallery">
            <h2 class="mb-3 text-lg font-semibold">"All variants"</h2>
            <div class="grid grid-cols-3 gap-6">{gallery}</div>
        </section>
    }
}
