use client::LoginForm;
use dioxus::prelude::*;

/// Login page with email/password.
#[component]
pub fn LoginPage(on_submit: EventHandler<LoginForm>, on_register: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(LoginForm {
            email: email(),
            password: password(),
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Sign In" }
                p { class: "auth-description", "Enter your credentials to borrow books" }

                form { id: "login-form", onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button { class: "auth-submit button", r#type: "submit", "Login" }
                }

                p { class: "auth-footer",
                    "Don't have an account? "
                    button {
                        id: "show-register",
                        class: "auth-link",
                        r#type: "button",
                        onclick: move |_| on_register.call(()),
                        "Register"
                    }
                }
            }
        }
    }
}
