//! お問い合わせフォーム
//!
//! どれか1つでも空欄なら検証メッセージを出して止める。全部埋まって
//! いれば件名・本文を現在の言語で組み立て、mailto: に遷移する

use atelier_common::config::CONTACT_EMAIL;
use atelier_common::contact::{compose_subject, ContactMessage};
use atelier_common::ViewState;
use leptos::prelude::*;

use crate::translate::tr;

fn mailto_href(subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_EMAIL,
        String::from(js_sys::encode_uri_component(subject)),
        String::from(js_sys::encode_uri_component(body)),
    )
}

#[component]
pub fn ContactSection(state: RwSignal<ViewState>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (validation, set_validation) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage::new(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        if !msg.is_complete() {
            set_validation.set(Some(tr(
                state,
                "contact.form.validation",
                "Please fill in all fields.",
            )));
            return;
        }
        set_validation.set(None);
        let (subject, body) =
            state.with_untracked(|s| (compose_subject(&s.dict), msg.compose_body(&s.dict)));
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&mailto_href(&subject, &body));
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="reveal">{move || tr(state, "contact.heading", "Contact")}</h2>
            <p class="contact-note">
                {move || tr(state, "contact.note", "Write me at")}
                " "
                <a id="contact-email" href=format!("mailto:{}", CONTACT_EMAIL)>
                    {CONTACT_EMAIL}
                </a>
            </p>
            <form id="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    id="name"
                    placeholder=move || tr(state, "contact.form.name", "Name")
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                    }
                />
                <input
                    type="email"
                    id="email"
                    placeholder=move || tr(state, "contact.form.email", "Email")
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                    }
                />
                <textarea
                    id="message"
                    placeholder=move || tr(state, "contact.form.message", "Message")
                    prop:value=move || message.get()
                    on:input=move |ev| {
                        set_message.set(event_target_value(&ev));
                    }
                ></textarea>
                <Show when=move || validation.get().is_some()>
                    <p class="form-error" role="alert">
                        {move || validation.get().unwrap_or_default()}
                    </p>
                </Show>
                <button type="submit" class="btn btn-primary">
                    {move || tr(state, "contact.form.send", "Send")}
                </button>
            </form>
        </section>
    }
}
