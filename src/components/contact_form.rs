use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::i18n::Lang;

const SUCCESS_WINDOW_MS: u32 = 5_000;

/// Serializes form fields as an `application/x-www-form-urlencoded` body,
/// with spaces encoded as `+` the way native form submission does.
pub fn encode_form_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name).replace("%20", "+"),
                urlencoding::encode(value).replace("%20", "+"),
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub lang: Lang,
}

/// Contact form with a fire-and-forget submission: any settled response shows
/// the success banner for five seconds; failures are swallowed.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let lang = props.lang;
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let company_ref = use_node_ref();
    let message_ref = use_node_ref();
    let submitted = use_state(|| false);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let company_ref = company_ref.clone();
        let message_ref = message_ref.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let company = company_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            let body = encode_form_fields(&[
                ("name", &name),
                ("email", &email),
                ("company", &company),
                ("message", &message),
            ]);

            let form_ref = form_ref.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                let request = Request::post(&config::form_endpoint())
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body);
                // No response handling: any settled response counts as success,
                // rejection is silently dropped.
                if request.send().await.is_ok() {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                    submitted.set(true);
                    let submitted = submitted.clone();
                    Timeout::new(SUCCESS_WINDOW_MS, move || {
                        submitted.set(false);
                    })
                    .forget();
                }
            });
        })
    };

    html! {
        <form ref={form_ref} class="contact-form" {onsubmit}>
            <div class="contact-form__row">
                <input
                    ref={name_ref}
                    type="text"
                    name="name"
                    required=true
                    placeholder={lang.pick("Your Name", "Votre Nom")}
                />
                <input
                    ref={email_ref}
                    type="email"
                    name="email"
                    required=true
                    placeholder={lang.pick("Email Address", "Adresse E-mail")}
                />
            </div>
            <input
                ref={company_ref}
                type="text"
                name="company"
                placeholder={lang.pick("Company (optional)", "Société (facultatif)")}
            />
            <textarea
                ref={message_ref}
                name="message"
                required=true
                rows="5"
                placeholder={lang.pick(
                    "Tell us about your packaging project",
                    "Parlez-nous de votre projet d'emballage",
                )}
            />
            <button type="submit" class="btn-primary">
                { lang.pick("Send Message", "Envoyer") }
            </button>
            <p class={classes!("contact-form__success", (*submitted).then_some("visible"))}>
                { lang.pick(
                    "Thank you — we will be in touch shortly.",
                    "Merci — nous vous contacterons très prochainement.",
                ) }
            </p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_field_order() {
        let body = encode_form_fields(&[("name", "Ada"), ("email", "ada@example.com")]);
        assert_eq!(body, "name=Ada&email=ada%40example.com");
    }

    #[test]
    fn spaces_encode_as_plus() {
        let body = encode_form_fields(&[("message", "two jute bags")]);
        assert_eq!(body, "message=two+jute+bags");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let body = encode_form_fields(&[("message", "a&b=c"), ("company", "Å co")]);
        assert_eq!(body, "message=a%26b%3Dc&company=%C3%85+co");
    }

    #[test]
    fn empty_values_keep_their_field() {
        let body = encode_form_fields(&[("name", "Ada"), ("company", "")]);
        assert_eq!(body, "name=Ada&company=");
    }
}
