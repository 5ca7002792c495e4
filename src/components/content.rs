// src/components/content.rs
use crate::components::common::{Card, CardGrid, Pill, Section};
use crate::components::hotspot_viewer::HotspotViewerComponent;
use crate::site_config::{AboutConfig, GuaranteeConfig, InfoCard, QualityConfig};
use crate::utils::resource_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutConfig,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.about;
    html! {
        <Section id="about" class={classes!("light")}>
            <div class="container two-column">
                <div>
                    <h2 class="section-heading">{ about.heading.clone() }</h2>
                    <p class="quote">{ about.quote.clone() }</p>
                    <p class="lead">
                        <span class="emphasis">{ about.question.clone() }</span>
                        {" "}{ about.body.clone() }
                        <br/><br/>
                        <span class="brand">{ about.brand_line.clone() }</span>
                        {" "}{ about.brand_body.clone() }
                    </p>
                    <div class="pill-row">
                        { for about.pills.iter().map(|p| html! {
                            <Pill icon={p.icon.clone()} label={p.label.clone()} />
                        }) }
                    </div>
                </div>
                <Card title={html! { { about.principles_title.clone() } }}>
                    <ul class="principles">
                        { for about.principles.iter().map(|t| html! {
                            <li><span class="check" aria-hidden="true">{"✔"}</span>{ t.clone() }</li>
                        }) }
                    </ul>
                </Card>
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardsSectionProps {
    pub cards: Vec<InfoCard>,
}

#[function_component(Sourcing)]
pub fn sourcing(props: &CardsSectionProps) -> Html {
    html! {
        <Section id="sourcing" class={classes!("tinted")}>
            <div class="container">
                <CardGrid cards={props.cards.clone()} />
            </div>
        </Section>
    }
}

#[function_component(Esg)]
pub fn esg(props: &CardsSectionProps) -> Html {
    html! {
        <Section id="esg" class={classes!("dark")}>
            <div class="container">
                <CardGrid cards={props.cards.clone()} card_class={classes!("card-on-dark")} />
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct QualityProps {
    pub quality: QualityConfig,
}

#[function_component(Quality)]
pub fn quality(props: &QualityProps) -> Html {
    let q = &props.quality;
    html! {
        <Section id="quality" class={classes!("light")}>
            <div class="container">
                <HotspotViewerComponent
                    src={resource_url(&q.image)}
                    title={q.title.clone()}
                    hint={q.hint.clone()}
                    points={q.points.clone()}
                    zoom={q.zoom}
                    projection={q.marker_projection}
                />
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct GuaranteeProps {
    pub guarantee: GuaranteeConfig,
}

#[function_component(Guarantee)]
pub fn guarantee(props: &GuaranteeProps) -> Html {
    let g = &props.guarantee;
    html! {
        <Section id="guarantee" class={classes!("tinted")}>
            <div class="container guarantee">
                <img src={resource_url(&g.image)} alt="100% Money Back Guarantee" class="guarantee-badge" />
                <div>
                    <h2 class="section-heading">{ g.heading.clone() }</h2>
                    <p class="lead">{ g.body.clone() }</p>
                </div>
            </div>
        </Section>
    }
}
