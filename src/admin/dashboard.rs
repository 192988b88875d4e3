use yew::prelude::*;
use yew_hooks::use_title;

use crate::admin::collections::{CaseStudiesEditor, PartnersEditor, ServicesEditor};
use crate::admin::login::AdminLogin;
use crate::admin::singletons::{AboutEditor, FooterEditor};
use crate::components::notification::{Toast, ToastMessage};
use crate::store::context::use_content;

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Footer,
    About,
    Services,
    Partners,
    CaseStudies,
}

impl DashboardTab {
    const ALL: [DashboardTab; 5] = [
        DashboardTab::Footer,
        DashboardTab::About,
        DashboardTab::Services,
        DashboardTab::Partners,
        DashboardTab::CaseStudies,
    ];

    fn label(self) -> &'static str {
        match self {
            DashboardTab::Footer => "Contact & footer",
            DashboardTab::About => "About",
            DashboardTab::Services => "Services",
            DashboardTab::Partners => "Partners",
            DashboardTab::CaseStudies => "Case studies",
        }
    }
}

/// `/admin`: the login form until the admin flag is set, then the editors.
#[function_component(Admin)]
pub fn admin() -> Html {
    use_title("Admin | Northbeam Consulting".to_string());
    let content = use_content();

    if content.read().is_admin() {
        html! { <AdminDashboard /> }
    } else {
        html! { <AdminLogin /> }
    }
}

#[function_component(AdminDashboard)]
fn admin_dashboard() -> Html {
    let content = use_content();
    let active_tab = use_state(|| DashboardTab::Services);
    let toast = use_state(|| None::<ToastMessage>);

    let notify = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };

    let on_reset = {
        let content = content.clone();
        let notify = notify.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Restore all content to the defaults?").ok())
                .unwrap_or(false);
            if confirmed {
                content.update(|store| store.reset_to_defaults());
                notify.emit(ToastMessage::success("Content restored to defaults"));
            }
        })
    };

    let on_logout = {
        let content = content.clone();
        Callback::from(move |_: MouseEvent| content.update(|store| store.logout()))
    };

    let dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let editor = match *active_tab {
        DashboardTab::Footer => html! { <FooterEditor notify={notify.clone()} /> },
        DashboardTab::About => html! { <AboutEditor notify={notify.clone()} /> },
        DashboardTab::Services => html! { <ServicesEditor notify={notify.clone()} /> },
        DashboardTab::Partners => html! { <PartnersEditor notify={notify.clone()} /> },
        DashboardTab::CaseStudies => html! { <CaseStudiesEditor notify={notify.clone()} /> },
    };

    html! {
        <div class="dashboard-container">
            <div class="dashboard-panel">
                <div class="panel-header">
                    <h1 class="panel-title">{"Content admin"}</h1>
                    <div class="panel-actions">
                        <button class="secondary-button" onclick={on_reset}>{"Restore defaults"}</button>
                        <button class="nav-logout-button" onclick={on_logout}>{"Logout"}</button>
                    </div>
                </div>
                <div class="dashboard-tabs">
                    {
                        DashboardTab::ALL.iter().map(|tab| {
                            let tab = *tab;
                            let active_tab = active_tab.clone();
                            html! {
                                <button
                                    class={classes!("tab-button", (*active_tab == tab).then(|| "active"))}
                                    onclick={Callback::from(move |_| active_tab.set(tab))}
                                >
                                    {tab.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="dashboard-content">
                    {editor}
                </div>
            </div>
            <Toast message={(*toast).clone()} on_dismiss={dismiss} />
        </div>
    }
}
