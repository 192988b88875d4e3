use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::store::context::use_content;

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let content = use_content();
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if content.update(|store| store.login(&password)) {
                error.set(None);
            } else {
                error.set(Some("Incorrect password".to_string()));
                password.set(String::new());
            }
        })
    };

    let oninput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="login-page">
            <div class="login-container">
                <h1>{"Admin"}</h1>
                <p>{"Sign in to edit site content."}</p>
                <form onsubmit={onsubmit}>
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={oninput}
                    />
                    <button type="submit" class="cta-button">{"Sign in"}</button>
                </form>
                if let Some(message) = (*error).as_ref() {
                    <div class="error-message">{message}</div>
                }
            </div>
        </div>
    }
}
