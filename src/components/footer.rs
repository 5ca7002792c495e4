// src/components/footer.rs
use crate::scroll::scroll_to_top;
use crate::site_config::CompanyInfo;
use crate::utils::resource_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub company: CompanyInfo,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let company = &props.company;
    let year = js_sys::Date::new_0().get_full_year();
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <img src={resource_url(&company.logo)} alt={company.name.clone()} class="footer-logo" />
                    <span>{ format!("© {} {}", year, company.legal_name) }</span>
                </div>
                <div class="footer-note">{ company.footer_note.clone() }</div>
                <button class="link-button" onclick={back_to_top}>{"Back to top"}</button>
            </div>
        </footer>
    }
}
