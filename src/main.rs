use yew::prelude::*;
use log::{info, Level};
use web_sys::{window, AddEventListenerOptions, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod i18n;
mod scroll {
    pub mod reactor;
    pub mod reveal;
}
mod components {
    pub mod contact_form;
}
mod pages {
    pub mod home;
}

use i18n::Lang;
use pages::home::Home;
use scroll::reactor::{is_past_threshold, NAV_SCROLL_THRESHOLD};

fn set_body_overflow(hidden: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if hidden { "hidden" } else { "" });
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
    pub on_toggle_lang: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let lang = props.lang;
    let on_toggle_lang = props.on_toggle_lang.clone();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let update = {
                    let window = window.clone();
                    move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(is_past_threshold(scroll_y, NAV_SCROLL_THRESHOLD));
                    }
                };
                // Correct appearance before the first scroll event arrives.
                update();

                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let open = !*menu_open;
            menu_open.set(open);
            set_body_overflow(open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            set_body_overflow(false);
        })
    };

    let toggle_lang = {
        let on_toggle_lang = on_toggle_lang.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_lang.emit(());
        })
    };

    let links = [
        ("#philosophy", ("Philosophy", "Philosophie")),
        ("#products", ("Products", "Produits")),
        ("#services", ("Services", "Services")),
        ("#story", ("Our Story", "Notre Histoire")),
        ("#contact", ("Contact", "Contact")),
    ];

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "header--scrolled"))}>
            <div class="header__content">
                <a href="#" class="header__logo" onclick={close_menu.clone()}>
                    <span class="header__name">{ "International Jute" }</span>
                    <span class="header__tagline">
                        { lang.pick("Sustainable Packaging", "Emballage Durable") }
                    </span>
                </a>

                <button class={classes!("burger", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                    { for links.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()} key={*href}>
                            { lang.pick(label.0, label.1) }
                        </a>
                    }) }
                    <button class="lang-toggle" onclick={toggle_lang}>
                        { lang.toggle_label() }
                    </button>
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let lang = use_state(Lang::default);

    // Keep the document element's lang attribute in sync with the active language.
    {
        let active = *lang;
        use_effect_with_deps(
            move |_| {
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", active.code());
                }
                || ()
            },
            active,
        );
    }

    let on_toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_| lang.set((*lang).toggled()))
    };

    html! {
        <>
            <Nav lang={*lang} on_toggle_lang={on_toggle_lang} />
            <Home lang={*lang} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
