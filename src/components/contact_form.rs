// Contact form: validates locally, then hands the message to the user's
// mail client through a composed mailto link. No network calls.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::events::{InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::model::ContactMessage;
use crate::util::{is_valid_email, mailto_href};

const RESET_DELAY_MS: i32 = 1500;
const TOAST_DISMISS_MS: i32 = 3000;

#[derive(Clone, PartialEq)]
struct Toast {
    id: u32,
    message: String,
    success: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    /// Recipient address for the composed mailto link.
    pub email: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state_eq(|| false);
    let toast = use_state(|| None::<Toast>);
    let toast_seq = use_mut_ref(|| 0u32);

    // A new toast replaces the current one; the dismiss timer only
    // clears the toast it was scheduled for.
    let show_toast = {
        let toast = toast.clone();
        let toast_seq = toast_seq.clone();
        Callback::from(move |(message, success): (String, bool)| {
            let id = {
                let mut seq = toast_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            toast.set(Some(Toast {
                id,
                message,
                success,
            }));
            let toast = toast.clone();
            let toast_seq = toast_seq.clone();
            if let Some(win) = web_sys::window() {
                let f = Closure::once_into_js(move || {
                    if *toast_seq.borrow() == id {
                        toast.set(None);
                    }
                });
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    f.unchecked_ref(),
                    TOAST_DISMISS_MS,
                );
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let show_toast = show_toast.clone();
        let recipient = props.email.to_string();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let msg = ContactMessage {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                message: message.trim().to_string(),
            };
            if msg.name.is_empty() || msg.email.is_empty() || msg.message.is_empty() {
                show_toast.emit(("Please fill in all fields.".into(), false));
                return;
            }
            if !is_valid_email(&msg.email) {
                show_toast.emit(("Please enter a valid email address.".into(), false));
                return;
            }
            sending.set(true);
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(&mailto_href(&recipient, &msg));
            }
            // Clear the form and report once the mail client has had a
            // moment to open.
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            let show_toast = show_toast.clone();
            let recipient = recipient.clone();
            if let Some(win) = web_sys::window() {
                let f = Closure::once_into_js(move || {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    sending.set(false);
                    show_toast.emit((
                        format!(
                            "Email client opened. If nothing happened, write directly to {recipient}."
                        ),
                        true,
                    ));
                });
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    f.unchecked_ref(),
                    RESET_DELAY_MS,
                );
            }
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let input_style = "background:#0f0e13; border:1px solid #30363d; border-radius:8px; \
         color:#fff; padding:10px 12px; font-size:14px; width:100%; box-sizing:border-box;";

    html! {
        <section id="contact" style="padding:80px 24px; max-width:640px; margin:0 auto;">
            <h2 style="color:#fff; text-align:center; margin-bottom:32px;">{"Get In Touch"}</h2>
            <form class="contact-form" {onsubmit} style="display:flex; flex-direction:column; gap:14px;">
                <input type="text" name="name" placeholder="Your name" value={(*name).clone()} oninput={on_name} style={input_style} />
                <input type="text" name="email" placeholder="Your email" value={(*email).clone()} oninput={on_email} style={input_style} />
                <textarea name="message" placeholder="Your message" rows="6" value={(*message).clone()} oninput={on_message} style={input_style}></textarea>
                <button type="submit" class="submit-btn" disabled={*sending}
                    style="padding:12px; background:#9b5cff; color:#fff; border:none; border-radius:8px; font-size:15px; cursor:pointer;">
                    { if *sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
            if let Some(t) = (*toast).clone() {
                <div class="toast" style={format!(
                    "position:fixed; bottom:80px; left:50%; transform:translateX(-50%); z-index:200; \
                     background:{}; color:#fff; padding:12px 20px; border-radius:8px; font-size:14px; max-width:80vw;",
                    if t.success { "#238636" } else { "#b62324" },
                )}>
                    { t.message }
                </div>
            }
        </section>
    }
}
