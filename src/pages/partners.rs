use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::background::{AnimatedBackground, BackgroundStyle};
use crate::components::cards::{CaseStudyCard, PartnerCard};
use crate::store::context::use_content;

#[function_component(Partners)]
pub fn partners() -> Html {
    use_title("Partners | Northbeam Consulting".to_string());
    let content = use_content();
    let store = content.read();

    html! {
        <div class="partners-page">
            <AnimatedBackground style={BackgroundStyle::Waves} />
            <section class="page-hero">
                <h1>{"Partners"}</h1>
                <p>{"The companies we build with, and what we have built together."}</p>
            </section>

            <section class="partners-section">
                <div class="card-grid">
                    {
                        store.partners().iter().map(|partner| html! {
                            <PartnerCard
                                key={partner.id.clone()}
                                partner={partner.clone()}
                                case_study_count={store.case_studies_for_partner(&partner.id).count()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="case-studies-section">
                <h2>{"Case studies"}</h2>
                if store.case_studies().is_empty() {
                    <p class="empty-state">{"Case studies are on their way."}</p>
                }
                <div class="case-study-list">
                    {
                        store.case_studies().iter().map(|study| html! {
                            <CaseStudyCard
                                key={study.id.clone()}
                                case_study={study.clone()}
                                partner_name={store.partner_for(study).map(|p| p.name.clone())}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
