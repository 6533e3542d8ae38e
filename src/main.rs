use yew::prelude::*;

use comotion_reports::components::{Dashboard, LoginForm};
use comotion_reports::hooks::use_session::use_session;
use comotion_reports::models::session::Session;

#[function_component(App)]
fn app() -> Html {
    let session = use_session();

    html! {
        <div class="app">
            {
                match &session.session {
                    Session::Authenticated(credentials) => html! {
                        <Dashboard
                            credentials={credentials.clone()}
                            on_logout={session.logout.clone()}
                        />
                    },
                    Session::Anonymous => html! {
                        <LoginForm on_login={session.login.clone()} />
                    },
                }
            }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
