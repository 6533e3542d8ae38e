use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::session::Credentials;
use crate::services::api::login;
use wasm_bindgen_futures::spawn_local;

pub const LOGIN_UNREACHABLE: &str =
    "Unable to connect to server. Please ensure the backend is running.";
pub const LOGIN_FAILED: &str = "An unexpected error occurred. Please try again.";

pub fn login_error_message(error: &AppError) -> String {
    if error.is_unreachable() {
        LOGIN_UNREACHABLE.to_string()
    } else {
        error.user_message(LOGIN_FAILED)
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<Credentials>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let credentials = match Credentials::parse(&email, &password) {
                Ok(credentials) => credentials,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            let loading = loading.clone();
            let error = error.clone();
            let on_login = on_login.clone();

            spawn_local(async move {
                match login(&credentials).await {
                    Ok(()) => on_login.emit(credentials),
                    Err(e) => {
                        gloo::console::error!(&format!("Login error: {e}"));
                        error.set(Some(login_error_message(&e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let is_loading = *loading;

    html! {
        <div class="login-container">
            <div class="header">
                <img src="/img/CoMotion_Logo.jpeg" alt="CoMotion Logo" />
                <h1>{"CoMotion Financial Reports"}</h1>
            </div>

            <form onsubmit={on_submit} class="login-form">
                <h2>{"Login to Your Account"}</h2>

                if let Some(msg) = &*error {
                    <div class="status error" role="alert">{msg}</div>
                }

                <input
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email}
                    placeholder="Enter your email"
                    required=true
                    disabled={is_loading}
                />
                <input
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password}
                    placeholder="Enter your password"
                    required=true
                    disabled={is_loading}
                />
                <button type="submit" disabled={is_loading}>
                    { if is_loading { "Logging in..." } else { "Login" } }
                </button>
            </form>
        </div>
    }
}
