use yew::prelude::*;

use crate::store::model::{CaseStudy, Partner, Service};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let expanded = use_state(|| false);
    let service = &props.service;

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class={classes!("service-card", (*expanded).then(|| "open"))}>
            <div class="service-icon" title={service.icon.as_str()}>{service.icon.glyph()}</div>
            <h3>{&service.title}</h3>
            <p>{&service.description}</p>
            if !service.details.is_empty() {
                <button class="service-more" onclick={toggle}>
                    {if *expanded { "Show less" } else { "Read more" }}
                </button>
                if *expanded {
                    <p class="service-details">{&service.details}</p>
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PartnerCardProps {
    pub partner: Partner,
    #[prop_or_default]
    pub case_study_count: usize,
}

#[function_component(PartnerCard)]
pub fn partner_card(props: &PartnerCardProps) -> Html {
    let partner = &props.partner;
    html! {
        <div class="partner-card">
            <img src={partner.logo.clone()} alt={format!("{} logo", partner.name)} loading="lazy" />
            <h3>{&partner.name}</h3>
            <p>{&partner.description}</p>
            if props.case_study_count > 0 {
                <span class="partner-cases">
                    {format!("{} case {}", props.case_study_count, if props.case_study_count == 1 { "study" } else { "studies" })}
                </span>
            }
            if let Some(website) = partner.website.as_ref() {
                <a href={website.clone()} target="_blank" rel="noopener noreferrer">{"Visit website"}</a>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyCardProps {
    pub case_study: CaseStudy,
    /// Name of the linked partner when the reference still resolves.
    #[prop_or_default]
    pub partner_name: Option<String>,
}

#[function_component(CaseStudyCard)]
pub fn case_study_card(props: &CaseStudyCardProps) -> Html {
    let study = &props.case_study;
    html! {
        <article class="case-study-card">
            if let Some(image) = study.images.first() {
                <img class="case-study-image" src={image.clone()} alt={study.title.clone()} loading="lazy" />
            }
            <div class="case-study-body">
                <span class="case-study-client">{&study.client}</span>
                <h3>{&study.title}</h3>
                <p>{&study.description}</p>
                <dl>
                    <dt>{"Challenge"}</dt>
                    <dd>{&study.challenge}</dd>
                    <dt>{"Solution"}</dt>
                    <dd>{&study.solution}</dd>
                    <dt>{"Result"}</dt>
                    <dd>{&study.result}</dd>
                </dl>
                if let Some(name) = props.partner_name.as_ref() {
                    <span class="case-study-partner">{format!("In partnership with {}", name)}</span>
                }
            </div>
        </article>
    }
}
