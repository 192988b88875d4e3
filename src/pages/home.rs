use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::components::background::{AnimatedBackground, BackgroundStyle};
use crate::components::cards::{CaseStudyCard, ServiceCard};
use crate::store::context::use_content;
use crate::Route;

const FEATURED_CASE_STUDIES: usize = 2;

#[function_component(Home)]
pub fn home() -> Html {
    use_title("Northbeam Consulting".to_string());
    let content = use_content();
    let store = content.read();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <AnimatedBackground style={BackgroundStyle::Particles} />
            <section class="hero">
                <h1>{"Software that works where your work happens"}</h1>
                <p>{"We help construction, logistics and public sector teams trade paper and spreadsheets for tools people actually use."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="cta-button">{"Talk to us"}</Link<Route>>
                    <Link<Route> to={Route::Pricing} classes="cta-button secondary">{"See plans"}</Link<Route>>
                </div>
            </section>

            <section class="services-section">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    {
                        store.services().iter().map(|service| html! {
                            <ServiceCard key={service.id.clone()} service={service.clone()} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            if !store.case_studies().is_empty() {
                <section class="case-studies-section">
                    <h2>{"Recent work"}</h2>
                    <div class="case-study-list">
                        {
                            store.case_studies().iter().take(FEATURED_CASE_STUDIES).map(|study| html! {
                                <CaseStudyCard
                                    key={study.id.clone()}
                                    case_study={study.clone()}
                                    partner_name={store.partner_for(study).map(|p| p.name.clone())}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                    <Link<Route> to={Route::Partners} classes="section-link">{"All partners and case studies"}</Link<Route>>
                </section>
            }
        </div>
    }
}
