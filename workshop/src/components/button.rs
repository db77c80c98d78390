use leptos::*;
use variants::{ButtonVariants, Impact, Shape, Size};

/// Workshop button. Its class list is resolved from the `impact`, `size` and
/// `shape` variants; every other attribute passed with `attr:` lands on the
/// `<button>` as given.
///
/// The resolved string is the only value of `class`. An `attr:class` from
/// the caller is dropped.
#[component]
pub fn Button(
    #[prop(optional, into)] impact: MaybeSignal<Impact>,
    #[prop(optional, into)] size: MaybeSignal<Size>,
    #[prop(optional, into)] shape: MaybeSignal<Shape>,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = without_class(attrs);

    let full_class =
        move || ButtonVariants::new(impact.get(), size.get(), shape.get()).resolve();

    let button_type = button_type.unwrap_or_else(|| "button".to_string());

    view! {
        <button
            {..attrs}
            type=button_type
            class=full_class
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

fn without_class(attrs: Vec<(&'static str, Attribute)>) -> Vec<(&'static str, Attribute)> {
    let (class, rest): (Vec<_>, Vec<_>) = attrs
        .into_iter()
        .partition(|(name, _)| name.eq_ignore_ascii_case("class"));
    for (_, value) in class {
        leptos::logging::warn!("Button ignores caller class {:?}", value);
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use variants::BASE_CLASSES;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_button<F, N>(f: F) -> web_sys::HtmlElement
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        let container = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone().unchecked_into(), f);
        container
            .query_selector("button")
            .unwrap()
            .unwrap()
            .unchecked_into()
    }

    #[wasm_bindgen_test]
    fn test_button_default_classes() {
        let button = mount_button(|| view! { <Button>"Save"</Button> });
        assert_eq!(
            button.get_attribute("class"),
            Some(ButtonVariants::default().resolve())
        );
        assert_eq!(button.get_attribute("type").as_deref(), Some("button"));
        assert_eq!(button.text_content().as_deref(), Some("Save"));
    }

    #[wasm_bindgen_test]
    fn test_button_variant_classes() {
        let button = mount_button(|| {
            view! {
                <Button impact=Impact::Light size=Size::Small shape=Shape::Pill>"Go"</Button>
            }
        });
        assert_eq!(
            button.get_attribute("class"),
            Some(format!(
                "{} bg-indigo-100 text-indigo-700 hover:bg-indigo-200 px-3 py-1 text-sm rounded-full",
                BASE_CLASSES
            ))
        );
    }

    #[wasm_bindgen_test]
    fn test_button_class_follows_signal() {
        let impact = create_rw_signal(Impact::Bold);
        let button = mount_button(move || view! { <Button impact=impact>"Go"</Button> });
        assert!(button.class_name().contains(Impact::Bold.classes()));

        impact.set(Impact::None);
        assert!(button.class_name().contains(Impact::None.classes()));
        assert!(!button.class_name().contains(Impact::Bold.classes()));
    }

    #[wasm_bindgen_test]
    fn test_button_passes_attributes_through() {
        let button = mount_button(|| {
            view! {
                <Button attr:id="save" attr:title="Save changes" attr:disabled=true attr:aria-label="save">
                    "Save"
                </Button>
            }
        });
        assert_eq!(button.id(), "save");
        assert_eq!(button.get_attribute("title").as_deref(), Some("Save changes"));
        assert_eq!(button.get_attribute("aria-label").as_deref(), Some("save"));
        assert!(button.has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_button_ignores_caller_class() {
        let button = mount_button(|| {
            view! { <Button shape=Shape::Square attr:class="text-red-500">"Go"</Button> }
        });
        let class = button.class_name();
        assert!(!class.contains("text-red-500"));
        assert_eq!(
            class,
            ButtonVariants::default().shape(Shape::Square).resolve()
        );
    }

    #[wasm_bindgen_test]
    fn test_without_class_keeps_other_attributes() {
        let rest = without_class(vec![
            ("title", "Save".into_attribute()),
            ("class", "text-red-500".into_attribute()),
            ("CLASS", "p-8".into_attribute()),
            ("disabled", true.into_attribute()),
        ]);
        let names: Vec<_> = rest.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["title", "disabled"]);
    }

    #[wasm_bindgen_test]
    fn test_button_custom_type() {
        let button = mount_button(|| view! { <Button button_type="submit">"Send"</Button> });
        assert_eq!(button.get_attribute("type").as_deref(), Some("submit"));
    }

    #[wasm_bindgen_test]
    fn test_button_click_handler() {
        let clicks = create_rw_signal(0);
        let button = mount_button(move || {
            view! {
                <Button on_click=Callback::new(move |_| clicks.update(|n| *n += 1))>"Go"</Button>
            }
        });
        button.click();
        button.click();
        assert_eq!(clicks.get_untracked(), 2);
    }
}
