use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Assessment",
        price: "€4 900",
        period: "one-off",
        summary: "Two weeks mapping your processes and tools, ending in a prioritised roadmap.",
        features: &[
            "On-site interviews",
            "Current tool and data audit",
            "Written roadmap with cost estimates",
        ],
        highlighted: false,
    },
    Plan {
        name: "Delivery",
        price: "€12 500",
        period: "per month",
        summary: "A dedicated team shipping the roadmap in two-week iterations.",
        features: &[
            "Product owner, designer and two engineers",
            "Fortnightly demos",
            "Integration with your existing systems",
            "Rollout and crew training",
        ],
        highlighted: true,
    },
    Plan {
        name: "Care",
        price: "€1 800",
        period: "per month",
        summary: "Keep what we built running, patched and improving.",
        features: &[
            "Monitoring and incident response",
            "Security updates",
            "Eight hours of improvements each month",
        ],
        highlighted: false,
    },
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_title("Pricing | Northbeam Consulting".to_string());

    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1>{"Plans"}</h1>
                <p>{"Fixed prices, no surprises. Every engagement starts with a free call."}</p>
            </section>
            <section class="pricing-grid">
                {
                    PLANS.iter().map(|plan| html! {
                        <div class={classes!("pricing-card", plan.highlighted.then(|| "highlighted"))} key={plan.name}>
                            <h2>{plan.name}</h2>
                            <div class="price">
                                <span class="amount">{plan.price}</span>
                                <span class="period">{plan.period}</span>
                            </div>
                            <p>{plan.summary}</p>
                            <ul>
                                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                            <Link<Route> to={Route::Contact} classes="cta-button">{"Get started"}</Link<Route>>
                        </div>
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}
