use client::RegisterForm;
use dioxus::prelude::*;

/// Registration page. Accounts may opt into the librarian role.
#[component]
pub fn RegisterPage(on_submit: EventHandler<RegisterForm>, on_login: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_librarian = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(RegisterForm {
            name: name(),
            email: email(),
            password: password(),
            is_librarian: is_librarian(),
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Create Account" }

                form { id: "register-form", onsubmit: handle_register,
                    div { class: "auth-field",
                        label { r#for: "register-name", "Name" }
                        input {
                            id: "register-name",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e: FormEvent| name.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "register-email", "Email" }
                        input {
                            id: "register-email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "register-password", "Password" }
                        input {
                            id: "register-password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    div { class: "auth-field auth-checkbox",
                        input {
                            id: "register-librarian",
                            r#type: "checkbox",
                            checked: is_librarian(),
                            onchange: move |_| is_librarian.set(!is_librarian()),
                        }
                        label { r#for: "register-librarian", "Register as librarian" }
                    }
                    button { class: "auth-submit button", r#type: "submit", "Register" }
                }

                p { class: "auth-footer",
                    "Already have an account? "
                    button {
                        id: "show-login",
                        class: "auth-link",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }
        }
    }
}
