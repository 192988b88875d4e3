use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::store::context::use_content;
use crate::Route;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let content = use_content();
    let footer = content.read().footer().clone();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h3>{"Northbeam Consulting"}</h3>
                    <p>{&footer.address}</p>
                </div>
                <div class="footer-column">
                    <h3>{"Contact"}</h3>
                    <a href={format!("mailto:{}", footer.email)}>{&footer.email}</a>
                    <a href={format!("tel:{}", footer.phone.replace(' ', ""))}>{&footer.phone}</a>
                </div>
                <div class="footer-column">
                    <h3>{"Follow us"}</h3>
                    {
                        footer.social_links.iter().map(|link| html! {
                            <a href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                                {&link.platform}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} Northbeam Consulting", year)}</span>
                <Link<Route> to={Route::Admin} classes="footer-admin-link">{"Admin"}</Link<Route>>
            </div>
        </footer>
    }
}
