// src/components/hotspot_viewer.rs
use crate::hotspot::{
    HotspotError, HotspotViewer, KeyCommand, MarkerProjection, PointOfInterest, ZoomConfig,
};
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HotspotViewerProps {
    pub src: String,
    pub title: String,
    #[prop_or_default]
    pub hint: String,
    pub points: Vec<PointOfInterest>,
    #[prop_or_default]
    pub zoom: ZoomConfig,
    #[prop_or_default]
    pub projection: MarkerProjection,
}

pub enum HotspotViewerMsg {
    Highlight(String),
    Select(String),
    ZoomIn,
    ZoomOut,
    Reset,
    ImageLoaded,
    ImageFailed,
    Key(KeyCommand),
}

pub struct HotspotViewerComponent {
    viewer: HotspotViewer,
}

impl HotspotViewerComponent {
    fn apply(&mut self, result: Result<(), HotspotError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                log::error!("Hotspot viewer: {}", e);
                false
            }
        }
    }
}

/// Keydown handler. `entry` names the point whose marker or list entry owns
/// the handler; the handled key stops there so the container skips it.
fn key_callback(
    ctx: &Context<HotspotViewerComponent>,
    entry: Option<String>,
) -> Callback<KeyboardEvent> {
    ctx.link().batch_callback(move |event: KeyboardEvent| {
        let command = KeyCommand::from_key(&event.key(), entry.as_deref())?;
        event.prevent_default();
        if entry.is_some() {
            event.stop_propagation();
        }
        Some(HotspotViewerMsg::Key(command))
    })
}

impl Component for HotspotViewerComponent {
    type Message = HotspotViewerMsg;
    type Properties = HotspotViewerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            viewer: HotspotViewer::new(props.points.clone(), props.zoom),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.points != old.points || props.zoom != old.zoom {
            self.viewer = HotspotViewer::new(props.points.clone(), props.zoom);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HotspotViewerMsg::Highlight(key) => {
                if self.viewer.is_active(&key) {
                    return false;
                }
                let result = self.viewer.highlight(&key);
                self.apply(result)
            }
            HotspotViewerMsg::Select(key) => {
                let result = self.viewer.select_point(&key);
                self.apply(result)
            }
            HotspotViewerMsg::ZoomIn => {
                self.viewer.zoom_in();
                true
            }
            HotspotViewerMsg::ZoomOut => {
                self.viewer.zoom_out();
                true
            }
            HotspotViewerMsg::Reset => {
                self.viewer.reset();
                true
            }
            HotspotViewerMsg::ImageLoaded => {
                self.viewer.image_loaded();
                true
            }
            HotspotViewerMsg::ImageFailed => {
                log::warn!("Reference image failed to load: {}", ctx.props().src);
                self.viewer.image_load_failed();
                true
            }
            HotspotViewerMsg::Key(command) => {
                let result = self.viewer.apply_key(command);
                self.apply(result)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onkeydown = key_callback(ctx, None);

        html! {
            <div class="quality-interactive">
                <h2 class="section-title">{ props.title.clone() }</h2>
                <div class="hotspot-layout" tabindex="0" {onkeydown}>
                    <div class="hotspot-figure">
                        { self.render_stage(ctx) }
                        { self.render_controls(ctx) }
                    </div>
                    { self.render_list(ctx) }
                </div>
            </div>
        }
    }
}

/// Hover and focus highlight a point; click or Enter selects it and zooms.
struct PointCallbacks {
    onmouseenter: Callback<MouseEvent>,
    onfocus: Callback<FocusEvent>,
    onclick: Callback<MouseEvent>,
    onkeydown: Callback<KeyboardEvent>,
}

impl PointCallbacks {
    fn new(ctx: &Context<HotspotViewerComponent>, key: &str) -> Self {
        let link = ctx.link();
        let hover_key = key.to_string();
        let focus_key = key.to_string();
        let click_key = key.to_string();
        Self {
            onmouseenter: link.callback(move |_: MouseEvent| {
                HotspotViewerMsg::Highlight(hover_key.clone())
            }),
            onfocus: link.callback(move |_: FocusEvent| HotspotViewerMsg::Highlight(focus_key.clone())),
            onclick: link.callback(move |_: MouseEvent| HotspotViewerMsg::Select(click_key.clone())),
            onkeydown: key_callback(ctx, Some(key.to_string())),
        }
    }
}

impl HotspotViewerComponent {
    fn render_stage(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onload = ctx.link().callback(|_: Event| HotspotViewerMsg::ImageLoaded);
        let onerror = ctx.link().callback(|_: Event| HotspotViewerMsg::ImageFailed);

        let image_style = format!(
            "transform: {}; transform-origin: 50% 50%;",
            self.viewer.transform_css()
        );

        html! {
            <div
                class={classes!("hotspot-stage", self.viewer.image_failed().then_some("image-failed"))}
                aria-label="Interactive apple quality checks"
            >
                <img
                    class="hotspot-image"
                    src={props.src.clone()}
                    alt="Apple"
                    style={image_style}
                    {onload}
                    {onerror}
                />
                { for self.viewer.points().iter().map(|p| self.render_marker(ctx, p)) }
            </div>
        }
    }

    fn render_marker(&self, ctx: &Context<Self>, point: &PointOfInterest) -> Html {
        let (left, top) = self.viewer.marker_position(point, ctx.props().projection);
        let key = point.key.clone();
        let PointCallbacks {
            onmouseenter,
            onfocus,
            onclick,
            onkeydown,
        } = PointCallbacks::new(ctx, &key);

        html! {
            <button
                key={key.clone()}
                class={classes!("hotspot-marker", self.viewer.is_active(&key).then_some("active"))}
                style={format!("left: {}%; top: {}%;", left, top)}
                aria-label={key.clone()}
                {onmouseenter}
                {onfocus}
                {onclick}
                {onkeydown}
            />
        }
    }

    fn render_controls(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let zoom_in = ctx.link().callback(|_| HotspotViewerMsg::ZoomIn);
        let zoom_out = ctx.link().callback(|_| HotspotViewerMsg::ZoomOut);
        let reset = ctx.link().callback(|_| HotspotViewerMsg::Reset);
        let offset = self.viewer.viewport().offset;
        let announcement = self
            .viewer
            .active_point()
            .map(|p| format!("{}: {}", p.key, p.description))
            .unwrap_or_default();

        html! {
            <div class="hotspot-controls">
                <div class="hotspot-hint">{ props.hint.clone() }</div>
                <div class="hotspot-buttons">
                    <button onclick={zoom_out} aria-label="Zoom out" title="Zoom out (-)">{"−"}</button>
                    <button onclick={zoom_in} aria-label="Zoom in" title="Zoom in (+)">{"+"}</button>
                    <button onclick={reset} aria-label="Reset view" title="Reset view (R)">{"Reset"}</button>
                    <span class="zoom-level">
                        { format!("{}% | Pan: ({:.1}, {:.1})", self.viewer.zoom_percent(), offset.dx, offset.dy) }
                    </span>
                </div>
                <div class="visually-hidden" aria-live="polite">{ announcement }</div>
            </div>
        }
    }

    fn render_list(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="hotspot-list">
                { for self.viewer.points().iter().map(|point| {
                    let key = point.key.clone();
                    let PointCallbacks { onmouseenter, onfocus, onclick, onkeydown } =
                        PointCallbacks::new(ctx, &key);
                    html! {
                        <article
                            key={key.clone()}
                            class={classes!("hotspot-entry", self.viewer.is_active(&key).then_some("active"))}
                            tabindex="0"
                            {onmouseenter}
                            {onfocus}
                            {onclick}
                            {onkeydown}
                        >
                            <h3>{ key.clone() }</h3>
                            <p>{ point.description.clone() }</p>
                        </article>
                    }
                }) }
            </div>
        }
    }
}
