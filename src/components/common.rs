// src/components/common.rs
use crate::site_config::InfoCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Page section that the navbar can scroll to and track.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let label = props.aria_label.clone().unwrap_or_else(|| props.id.clone());
    html! {
        <section
            id={props.id.clone()}
            aria-label={label}
            class={classes!("page-section", props.class.clone())}
        >
            { props.children.clone() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    #[prop_or_default]
    pub icon: Option<String>,
    pub label: String,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill">
            { for props.icon.iter().map(|icon| html! { <span class="pill-icon" aria-hidden="true">{ icon.clone() }</span> }) }
            { props.label.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub value: String,
    pub label: String,
}

#[function_component(StatBlock)]
pub fn stat_block(props: &StatProps) -> Html {
    html! {
        <div class="stat">
            <div class="stat-value">{ props.value.clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-header">
                <h3 class="card-title">{ props.title.clone() }</h3>
            </div>
            <div class="card-content">{ props.children.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub cards: Vec<InfoCard>,
    #[prop_or_default]
    pub card_class: Classes,
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class="card-grid">
            { for props.cards.iter().map(|c| {
                let title = html! {
                    <>
                        { for c.icon.iter().map(|icon| html! { <span class="card-icon" aria-hidden="true">{ icon.clone() }</span> }) }
                        { c.title.clone() }
                    </>
                };
                html! {
                    <Card title={title} class={props.card_class.clone()}>
                        { c.body.clone() }
                    </Card>
                }
            }) }
        </div>
    }
}
