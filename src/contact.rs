//! Contact form validation and simulated send.
//!
//! Nothing leaves the browser: a valid submission shows [`SENDING`], waits
//! [`SEND_DELAY_MS`], then shows [`RECEIVED`] and resets the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const SENDING: &str = "Sending…";
pub const RECEIVED: &str = "Thanks! Message received. I will reply soon.";
pub const SEND_DELAY_MS: u32 = 700;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Names the blank fields in form order.
    #[error("Please fill all fields.")]
    MissingFields(Vec<&'static str>),
}

/// Trimmed contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self { name: name.trim().to_owned(), email: email.trim().to_owned(), message: message.trim().to_owned() }
    }

    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if any field is blank.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = [("name", &self.name), ("email", &self.email), ("message", &self.message)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(ContactError::MissingFields(missing)) }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

    use super::{ContactForm, RECEIVED, SEND_DELAY_MS, SENDING};
    use crate::dom;

    const FORM_ID: &str = "contact-form";
    const FEEDBACK_ID: &str = "form-feedback";
    const CLEAR_ID: &str = "clear-btn";

    /// Value of an `<input>` or `<textarea>` by id; empty if absent.
    fn field_value(document: &Document, id: &str) -> String {
        let Some(el) = document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn say(feedback: Option<&Element>, text: &str) {
        if let Some(feedback) = feedback {
            feedback.set_text_content(Some(text));
        }
    }

    pub fn wire(document: &Document) {
        let Some(form) = dom::by_id::<HtmlFormElement>(document, FORM_ID) else {
            return;
        };

        if let Some(clear) = document.get_element_by_id(CLEAR_ID) {
            let target = form.clone();
            dom::listen(&clear, "click", move |_: Event| target.reset());
        }

        let doc = document.clone();
        let target = form.clone();
        dom::listen(&form, "submit", move |ev: Event| {
            ev.prevent_default();
            let feedback = doc.get_element_by_id(FEEDBACK_ID);
            let submission = ContactForm::new(
                &field_value(&doc, "name"),
                &field_value(&doc, "email"),
                &field_value(&doc, "message"),
            );
            if let Err(err) = submission.validate() {
                say(feedback.as_ref(), &err.to_string());
                return;
            }

            say(feedback.as_ref(), SENDING);
            let form = target.clone();
            dom::after(SEND_DELAY_MS, move || {
                say(feedback.as_ref(), RECEIVED);
                form.reset();
            });
        });
    }
}

#[cfg(feature = "hydrate")]
pub use browser::wire;
