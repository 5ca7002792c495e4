// src/components/navbar.rs
use crate::scroll::{active_section, measure_sections, viewport_height};
use crate::site_config::NavEntry;
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub entries: Vec<NavEntry>,
    pub logo: String,
    pub brand: String,
    pub slogan: String,
    pub on_navigate: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let ids: Vec<String> = props.entries.iter().map(|e| e.id.clone()).collect();
    let first = ids.first().cloned().unwrap_or_default();
    let active = use_state(|| first.clone());
    // Latest value for the scroll listener, which outlives any one render.
    let current = use_mut_ref(|| first);

    {
        let active = active.clone();
        let current = current.clone();
        use_effect_with(ids, move |ids| {
            let ids = ids.clone();
            let track = move || {
                let sections = measure_sections(&ids);
                let next = active_section(&sections, viewport_height(), &current.borrow());
                if *current.borrow() != next {
                    *current.borrow_mut() = next.clone();
                    active.set(next);
                }
            };
            track();
            let listener = EventListener::new(&window(), "scroll", move |_| track());
            move || drop(listener)
        });
    }

    html! {
        <header class="navbar">
            <div class="navbar-inner">
                <img src={props.logo.clone()} alt={props.brand.clone()} class="navbar-logo" />
                <div class="navbar-slogan">
                    <span class="pill">{"🍃 "}{ props.slogan.clone() }</span>
                </div>
                <nav aria-label="Primary" class="navbar-links">
                    { for props.entries.iter().map(|entry| {
                        let onclick = {
                            let id = entry.id.clone();
                            props.on_navigate.reform(move |_: MouseEvent| id.clone())
                        };
                        html! {
                            <button
                                key={entry.id.clone()}
                                class={classes!("nav-link", (*active == entry.id).then_some("active"))}
                                {onclick}
                            >
                                { entry.label.clone() }
                            </button>
                        }
                    }) }
                </nav>
                <div class="navbar-mobile">
                    <button
                        class="nav-link"
                        onclick={props.on_navigate.reform(|_: MouseEvent| "contact".to_string())}
                    >
                        {"Contact"}
                    </button>
                </div>
            </div>
        </header>
    }
}
