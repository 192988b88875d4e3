use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::background::{AnimatedBackground, BackgroundStyle};
use crate::store::context::use_content;

#[function_component(About)]
pub fn about() -> Html {
    use_title("About | Northbeam Consulting".to_string());
    let content = use_content();
    let about = content.read().about().clone();

    html! {
        <div class="about-page">
            <AnimatedBackground style={BackgroundStyle::Waves} />
            <section class="page-hero">
                <h1>{&about.title}</h1>
                <p>{&about.description}</p>
            </section>

            <section class="about-pillars">
                <div class="pillar">
                    <h2>{"Mission"}</h2>
                    <p>{&about.mission}</p>
                </div>
                <div class="pillar">
                    <h2>{"Vision"}</h2>
                    <p>{&about.vision}</p>
                </div>
            </section>

            if !about.values.is_empty() {
                <section class="about-values">
                    <h2>{"What we value"}</h2>
                    <ul>
                        { for about.values.iter().map(|value| html! { <li>{value}</li> }) }
                    </ul>
                </section>
            }

            <section class="team-section">
                <h2>{"Team"}</h2>
                <div class="card-grid">
                    {
                        about.team.iter().map(|member| html! {
                            <div class="team-card" key={member.id.clone()}>
                                <img src={member.photo.clone()} alt={member.name.clone()} loading="lazy" />
                                <h3>{&member.name}</h3>
                                <span class="team-position">{&member.position}</span>
                                <p>{&member.bio}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
