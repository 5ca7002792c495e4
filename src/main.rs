// src/main.rs
mod components;
mod contact;
mod hotspot;
mod scroll;
mod site_config;
mod utils;

use components::contact_section::ContactSection;
use components::content::{About, Esg, Guarantee, Quality, Sourcing};
use components::footer::Footer;
use components::hero::Hero;
use components::navbar::Navbar;
use site_config::SiteConfig;
use utils::resource_url;
use yew::prelude::*;

pub enum AppMsg {
    Navigate(String),
}

pub struct App {
    site: Result<SiteConfig, String>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let site = match SiteConfig::embedded() {
            Ok(config) => {
                log::info!(
                    "Loaded site config: {} sections, {} inspection points",
                    config.nav.len(),
                    config.quality.points.len()
                );
                Ok(config)
            }
            Err(e) => {
                log::error!("Failed to load site config: {}", e);
                Err(e.to_string())
            }
        };
        Self { site }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(id) => {
                scroll::scroll_to_section(&id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let site = match &self.site {
            Ok(site) => site,
            Err(error) => {
                return html! {
                    <div class="app-container">
                        <main class="app-main">
                            <div class="error">{ format!("Error: {}", error) }</div>
                        </main>
                    </div>
                };
            }
        };

        let on_navigate = ctx.link().callback(AppMsg::Navigate);

        html! {
            <div class="app-container">
                <Navbar
                    entries={site.nav.clone()}
                    logo={resource_url(&site.company.logo)}
                    brand={site.company.name.clone()}
                    slogan={site.company.slogan.clone()}
                    on_navigate={on_navigate.clone()}
                />
                <main>
                    <Hero hero={site.hero.clone()} {on_navigate} />
                    <About about={site.about.clone()} />
                    <Sourcing cards={site.sourcing.clone()} />
                    <Quality quality={site.quality.clone()} />
                    <Esg cards={site.esg.clone()} />
                    <Guarantee guarantee={site.guarantee.clone()} />
                    <ContactSection contact={site.contact.clone()} company={site.company.clone()} />
                </main>
                <Footer company={site.company.clone()} />
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
