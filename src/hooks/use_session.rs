use yew::prelude::*;

use crate::models::session::{Credentials, Session};

/// Handle returned by `use_session` hook
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Session,
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
}

/// Owns the in-memory session. Nothing is written to storage.
#[hook]
pub fn use_session() -> SessionHandle {
    let session = use_state(Session::default);

    let login = {
        let session = session.clone();
        Callback::from(move |credentials: Credentials| {
            gloo::console::log!("Signed in");
            session.set(Session::login(credentials));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |()| session.set(session.logout()))
    };

    SessionHandle {
        session: (*session).clone(),
        login,
        logout,
    }
}
