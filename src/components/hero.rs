// src/components/hero.rs
use crate::components::common::{Pill, Section, StatBlock};
use crate::scroll::{parallax, scroll_y};
use crate::site_config::HeroConfig;
use crate::utils::resource_url;
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroConfig,
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let scroll = use_state(|| 0.0f64);

    {
        let scroll = scroll.clone();
        use_effect_with((), move |_| {
            scroll.set(scroll_y());
            let listener = EventListener::new(&window(), "scroll", move |_| scroll.set(scroll_y()));
            move || drop(listener)
        });
    }

    let (shift, opacity) = parallax(*scroll);
    let hero = &props.hero;
    let learn_more = props.on_navigate.reform(|_: MouseEvent| "about".to_string());
    let get_in_touch = props.on_navigate.reform(|_: MouseEvent| "contact".to_string());

    html! {
        <Section id="home" aria_label="Home / Hero" class={classes!("hero")}>
            <div
                class="hero-backdrop"
                style={format!("transform: translateY({}px); opacity: {};", shift, opacity)}
            >
                <div
                    class="hero-image"
                    aria-hidden="true"
                    style={format!("background-image: url('{}');", resource_url(&hero.background))}
                />
                <div class="hero-gradient" aria-hidden="true" />
            </div>

            <div class="container hero-content">
                <Pill icon={Some("🛡".to_string())} label={hero.pill.clone()} />
                <h1 class="hero-headline">{ hero.headline.clone() }</h1>
                <p class="hero-tagline">{ hero.tagline.clone() }</p>
                <div class="hero-actions">
                    <button class="button button-light" onclick={learn_more}>{"Learn more"}</button>
                    <button class="button button-outline" onclick={get_in_touch}>{"Get in touch ↗"}</button>
                </div>
                <div class="hero-stats">
                    { for hero.stats.iter().map(|s| html! {
                        <StatBlock value={s.value.clone()} label={s.label.clone()} />
                    }) }
                </div>
            </div>
        </Section>
    }
}
