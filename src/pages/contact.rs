use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::background::{AnimatedBackground, BackgroundStyle};
use crate::components::field::TextField;
use crate::components::notification::{Toast, ToastMessage};
use crate::config;
use crate::store::context::use_content;
use crate::store::model::missing_required;

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    company: String,
    message: String,
}

impl ContactForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        missing_required(&[
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Message", self.message.as_str()),
        ])
    }
}

/// Outcome of the simulated submission for a roll in `[0, 1)`.
fn submission_succeeded(roll: f64) -> bool {
    roll >= config::CONTACT_FAILURE_RATE
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_title("Contact | Northbeam Consulting".to_string());
    let content = use_content();
    let footer = content.read().footer().clone();
    let form = use_state(ContactForm::default);
    let submitting = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);

    let set_field = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let missing = form.missing_fields();
            if !missing.is_empty() {
                toast.set(Some(ToastMessage::error(format!(
                    "Please fill in: {}",
                    missing.join(", ")
                ))));
                return;
            }

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::contact_submit_delay_ms()).await;
                if submission_succeeded(web_sys::js_sys::Math::random()) {
                    info!("Contact form sent");
                    form.set(ContactForm::default());
                    toast.set(Some(ToastMessage::success(
                        "Thanks! We will get back to you within one business day.",
                    )));
                } else {
                    info!("Contact form submission failed");
                    toast.set(Some(ToastMessage::error(
                        "Sending failed. Please try again or email us directly.",
                    )));
                }
                submitting.set(false);
            });
        })
    };

    let dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="contact-page">
            <AnimatedBackground style={BackgroundStyle::Particles} />
            <section class="page-hero">
                <h1>{"Contact"}</h1>
                <p>{"Tell us what slows your team down. We reply within one business day."}</p>
            </section>
            <div class="contact-layout">
                <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                    <TextField label="Name" required=true value={form.name.clone()}
                        on_change={set_field(|f, v| f.name = v)} />
                    <TextField label="Email" input_type="email" required=true value={form.email.clone()}
                        on_change={set_field(|f, v| f.email = v)} />
                    <TextField label="Company" value={form.company.clone()}
                        on_change={set_field(|f, v| f.company = v)} />
                    <TextField label="Message" multiline=true required=true value={form.message.clone()}
                        on_change={set_field(|f, v| f.message = v)} />
                    <button type="submit" class="cta-button" disabled={*submitting}>
                        {if *submitting { "Sending..." } else { "Send message" }}
                    </button>
                </form>
                <aside class="contact-details">
                    <h2>{"Reach us directly"}</h2>
                    <p>{&footer.address}</p>
                    <a href={format!("mailto:{}", footer.email)}>{&footer.email}</a>
                    <a href={format!("tel:{}", footer.phone.replace(' ', ""))}>{&footer.phone}</a>
                </aside>
            </div>
            <Toast message={(*toast).clone()} on_dismiss={dismiss} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_is_the_only_optional_field() {
        let form = ContactForm { company: "Acme".into(), ..Default::default() };
        assert_eq!(form.missing_fields(), vec!["Name", "Email", "Message"]);

        let complete = ContactForm {
            name: "Aino".into(),
            email: "aino@example.com".into(),
            company: String::new(),
            message: "Hello".into(),
        };
        assert!(complete.missing_fields().is_empty());
    }

    #[test]
    fn low_rolls_fail_at_the_configured_rate() {
        assert!(!submission_succeeded(0.0));
        assert!(!submission_succeeded(config::CONTACT_FAILURE_RATE - 0.01));
        assert!(submission_succeeded(config::CONTACT_FAILURE_RATE));
        assert!(submission_succeeded(0.99));
    }
}
