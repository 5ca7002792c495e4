// src/components/contact_section.rs
use crate::components::common::{Card, Section};
use crate::contact::{ContactForm, PartnerType, ACKNOWLEDGEMENT};
use crate::site_config::{CompanyInfo, ContactConfig};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub contact: ContactConfig,
    pub company: CompanyInfo,
}

#[derive(Clone, PartialEq)]
enum FormStatus {
    Editing,
    Invalid(String),
    Sent,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let contact = &props.contact;
    let company = &props.company;

    html! {
        <Section id="contact" class={classes!("light")}>
            <div class="container contact-layout">
                <div class="contact-details">
                    <h2 class="section-heading">{ contact.heading.clone() }</h2>
                    <p class="lead">{ contact.intro.clone() }</p>
                    <div class="contact-cards">
                        <Card title={html! { {"✉ Email"} }}>
                            <a href={format!("mailto:{}", contact.email)}>{ contact.email.clone() }</a>
                        </Card>
                        <Card title={html! { {"☎ Phone"} }}>
                            { contact.phone.clone() }
                        </Card>
                        <Card title={html! { { format!("📍 {}", contact.office_title) } }} class={classes!("wide")}>
                            { for contact.office_lines.iter().map(|line| html! { <div>{ line.clone() }</div> }) }
                        </Card>
                    </div>
                </div>

                <Card title={html! { { contact.form_title.clone() } }}>
                    <p>{ contact.form_intro.clone() }</p>
                    <PartnerForm />
                    <a href={company.website.clone()} class="external-link">
                        { format!("↗ {}", company.website.trim_start_matches("https://")) }
                    </a>
                </Card>
            </div>
        </Section>
    }
}

#[function_component(PartnerForm)]
fn partner_form() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| FormStatus::Editing);

    if *status == FormStatus::Sent {
        return html! { <p class="form-ack" role="status">{ ACKNOWLEDGEMENT }</p> };
    }

    let oninput_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(ContactForm {
                    name: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let oninput_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(ContactForm {
                    email: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let onchange_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let selected = e
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| PartnerType::from_label(&select.value()));
            if let Some(partner_type) = selected {
                form.set(ContactForm {
                    partner_type,
                    ..(*form).clone()
                });
            }
        })
    };

    let oninput_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                form.set(ContactForm {
                    message: area.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    log::info!(
                        "Partner enquiry from {} <{}> as {}",
                        form.name.trim(),
                        form.email.trim(),
                        form.partner_type
                    );
                    status.set(FormStatus::Sent);
                }
                Err(err) => {
                    log::warn!("Partner form rejected: {}", err);
                    status.set(FormStatus::Invalid(err.to_string()));
                }
            }
        })
    };

    html! {
        <form class="partner-form" {onsubmit}>
            <input
                required=true
                name="name"
                placeholder="Your name"
                value={form.name.clone()}
                oninput={oninput_name}
            />
            <input
                required=true
                type="email"
                name="email"
                placeholder="Email"
                value={form.email.clone()}
                oninput={oninput_email}
            />
            <select name="type" onchange={onchange_type}>
                { for PartnerType::ALL.iter().map(|t| html! {
                    <option value={t.label()} selected={form.partner_type == *t}>{ t.label() }</option>
                }) }
            </select>
            <textarea
                name="msg"
                rows="4"
                placeholder="Tell us a bit…"
                value={form.message.clone()}
                oninput={oninput_message}
            />
            if let FormStatus::Invalid(message) = &*status {
                <p class="form-error" role="alert">{ message.clone() }</p>
            }
            <button type="submit" class="button button-dark">{"Send"}</button>
        </form>
    }
}
