use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod store {
    pub mod model;
    pub mod storage;
    pub mod defaults;
    pub mod content;
    pub mod context;
}
mod components {
    pub mod background;
    pub mod cards;
    pub mod field;
    pub mod footer;
    pub mod notification;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod partners;
    pub mod pricing;
    pub mod contact;
    pub mod not_found;
}
mod admin {
    pub mod login;
    pub mod dashboard;
    pub mod singletons;
    pub mod collections;
}

use pages::{
    home::Home,
    about::About,
    partners::Partners,
    pricing::Pricing,
    contact::Contact,
    not_found::NotFound,
};
use admin::dashboard::Admin;
use components::footer::SiteFooter;
use store::context::{use_content, ContentProvider};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/partners")]
    Partners,
    #[at("/pricing")]
    Pricing,
    #[at("/contact")]
    Contact,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Partners => {
            info!("Rendering Partners page");
            html! { <Partners /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <Admin /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let content = use_content();
    let is_admin = content.read().is_admin();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let handle_logout = {
        let content = content.clone();
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            content.update(|store| store.logout());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"northbeam"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Partners} classes="nav-link">{"Partners"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">{"Pricing"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-login-button">{"Contact"}</Link<Route>>
                    </div>
                    if is_admin {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Admin} classes="nav-profile-link">{"Admin"}</Link<Route>>
                        </div>
                        <button onclick={handle_logout} class="nav-logout-button">
                            {"Logout"}
                        </button>
                    }
                </div>
            </div>
        </nav>
    }
}


const GLOBAL_STYLES: &str = r#"
    body {
        margin: 0;
        background: #1a1a1a;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    a { color: #7EB2FF; }
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 100;
        transition: background 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(26, 26, 26, 0.9);
        backdrop-filter: blur(10px);
        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo { font-size: 1.5rem; font-weight: 600; color: #fff; text-decoration: none; }
    .nav-right { display: flex; align-items: center; gap: 1.5rem; }
    .nav-link, .nav-profile-link { color: #fff; text-decoration: none; }
    .nav-login-button, .cta-button {
        display: inline-block;
        padding: 0.6rem 1.2rem;
        border-radius: 8px;
        border: none;
        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
        color: #fff;
        text-decoration: none;
        cursor: pointer;
    }
    .cta-button.secondary, .secondary-button {
        background: transparent;
        border: 1px solid rgba(126, 178, 255, 0.5);
        color: #7EB2FF;
        padding: 0.5rem 1rem;
        border-radius: 8px;
        cursor: pointer;
    }
    .nav-logout-button, .delete-button {
        background: transparent;
        border: 1px solid rgba(255, 99, 99, 0.5);
        color: #ff8080;
        padding: 0.5rem 1rem;
        border-radius: 8px;
        cursor: pointer;
    }
    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
    .hero, .page-hero {
        text-align: center;
        padding: 10rem 2rem 5rem;
    }
    .hero h1, .page-hero h1 {
        font-size: 3.2rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero p, .page-hero p { color: #bbb; max-width: 640px; margin: 1rem auto 2rem; }
    .hero-actions { display: flex; gap: 1rem; justify-content: center; }
    section { max-width: 1100px; margin: 0 auto; padding: 2rem; }
    .card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
    .service-card, .partner-card, .team-card, .pricing-card, .case-study-card, .pillar {
        background: rgba(30, 30, 30, 0.8);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 12px;
        padding: 1.5rem;
        backdrop-filter: blur(10px);
    }
    .service-icon { font-size: 2rem; }
    .service-more { background: none; border: none; color: #7EB2FF; cursor: pointer; padding: 0; }
    .partner-card img, .team-card img { width: 100%; max-height: 140px; object-fit: contain; }
    .case-study-list { display: flex; flex-direction: column; gap: 1.5rem; }
    .case-study-card { display: flex; gap: 1.5rem; }
    .case-study-image { width: 280px; object-fit: cover; border-radius: 8px; }
    .case-study-client, .team-position, .partner-cases, .case-study-partner { color: #7EB2FF; font-size: 0.9rem; }
    .case-study-card dt { color: #999; margin-top: 0.5rem; }
    .case-study-card dd { margin: 0; }
    .about-pillars { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
    .pricing-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
    .pricing-card.highlighted { border-color: rgba(126, 178, 255, 0.6); }
    .price .amount { font-size: 2rem; font-weight: 600; }
    .price .period { color: #999; margin-left: 0.5rem; }
    .contact-layout { max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; padding: 2rem; }
    .contact-details { display: flex; flex-direction: column; gap: 0.5rem; }
    .contact-form, .editor-form { display: flex; flex-direction: column; gap: 1rem; }
    .form-field { display: flex; flex-direction: column; gap: 0.4rem; }
    .form-label { color: #bbb; font-size: 0.9rem; }
    .form-field input, .form-field textarea, .form-field select, .login-container input {
        padding: 0.7rem;
        border-radius: 8px;
        border: 1px solid rgba(30, 144, 255, 0.2);
        background: rgba(0, 0, 0, 0.3);
        color: #fff;
        font: inherit;
    }
    .form-field textarea { min-height: 100px; }
    .form-actions, .panel-actions { display: flex; gap: 1rem; }
    .toast {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        padding: 1rem 1.5rem;
        border-radius: 8px;
        display: flex;
        gap: 1rem;
        align-items: center;
        z-index: 200;
    }
    .toast-success { background: #1f6f43; }
    .toast-error { background: #8a2a2a; }
    .toast-close { background: none; border: none; color: #fff; font-size: 1.2rem; cursor: pointer; }
    .login-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; }
    .login-container {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 3rem;
        width: 100%;
        max-width: 420px;
    }
    .login-container form { display: flex; flex-direction: column; gap: 1rem; }
    .error-message { color: #ff8080; margin-top: 1rem; }
    .dashboard-container { padding: 6rem 2rem 2rem; }
    .dashboard-panel { max-width: 1100px; margin: 0 auto; }
    .panel-header { display: flex; justify-content: space-between; align-items: center; }
    .dashboard-tabs { display: flex; gap: 0.5rem; margin: 1.5rem 0; flex-wrap: wrap; }
    .tab-button { background: rgba(30, 30, 30, 0.8); border: 1px solid rgba(30, 144, 255, 0.1); color: #bbb; padding: 0.6rem 1rem; border-radius: 8px; cursor: pointer; }
    .tab-button.active { color: #fff; border-color: #7EB2FF; }
    .collection-editor { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
    .record-list { display: flex; flex-direction: column; gap: 0.75rem; }
    .record-row { display: flex; justify-content: space-between; gap: 1rem; padding: 1rem; border-radius: 8px; background: rgba(30, 30, 30, 0.8); }
    .record-row.selected { border: 1px solid #7EB2FF; }
    .record-text { display: flex; flex-direction: column; gap: 0.25rem; }
    .record-text span { color: #999; font-size: 0.85rem; }
    .record-actions { display: flex; gap: 0.5rem; align-items: center; }
    .site-footer { border-top: 1px solid rgba(30, 144, 255, 0.1); margin-top: 4rem; padding: 3rem 2rem 1.5rem; background: rgba(20, 20, 20, 0.9); }
    .footer-columns { max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .footer-column { display: flex; flex-direction: column; gap: 0.4rem; }
    .footer-bottom { max-width: 1100px; margin: 2rem auto 0; display: flex; justify-content: space-between; color: #666; }
    .footer-admin-link { color: #666; }
    .not-found-page { text-align: center; padding: 12rem 2rem; }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            background: rgba(26, 26, 26, 0.95);
            padding: 1.5rem;
        }
        .about-pillars, .pricing-grid, .contact-layout, .collection-editor, .footer-columns { grid-template-columns: 1fr; }
        .case-study-card { flex-direction: column; }
        .case-study-image { width: 100%; }
        .hero h1, .page-hero h1 { font-size: 2.2rem; }
    }
"#;


#[function_component]
fn App() -> Html {
    html! {
        <ContentProvider>
            <BrowserRouter>
                <style>{GLOBAL_STYLES}</style>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <SiteFooter />
            </BrowserRouter>
        </ContentProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
