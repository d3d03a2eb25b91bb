//! Send-email form with optional file attachments.

#[cfg(test)]
#[path = "send_email_test.rs"]
mod send_email_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use leptos::prelude::*;

use super::settle;
use crate::app::Services;
use crate::error::ClientError;
use crate::net::functions::FunctionsApi;
use crate::net::types::{EmailAttachment, MISSING_FIELDS_MESSAGE, SendEmailRequest, SendEmailResponse};
use crate::util::validate::is_valid_recipient_list;

#[derive(Clone, Debug, Default)]
pub struct SendEmailPage {
    /// Comma-separated recipients.
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
    pub busy: bool,
    pub sent: Option<SendEmailResponse>,
    pub error: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_owned())
}

impl SendEmailPage {
    /// Attach a picked file, base64-encoding its bytes.
    pub fn attach(&mut self, filename: impl Into<String>, bytes: &[u8]) {
        self.attachments.push(EmailAttachment {
            filename: filename.into(),
            content: BASE64.encode(bytes),
            encoding: Some("base64".to_owned()),
        });
    }

    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    /// Build the request body from the form.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when required fields are blank or a
    /// recipient is not an email address.
    pub fn to_request(&self) -> Result<SendEmailRequest, ClientError> {
        let request = SendEmailRequest {
            to: optional(&self.to).map(|to| to.trim().to_owned()),
            subject: optional(&self.subject),
            text: optional(&self.text),
            html: optional(&self.html),
            attachments: (!self.attachments.is_empty()).then(|| self.attachments.clone()),
        };
        if !request.has_required_fields() {
            return Err(ClientError::Validation(MISSING_FIELDS_MESSAGE.to_owned()));
        }
        if !is_valid_recipient_list(request.to.as_deref().unwrap_or_default()) {
            return Err(ClientError::Validation("Enter valid recipient addresses.".to_owned()));
        }
        Ok(request)
    }

    /// # Errors
    ///
    /// Returns a validation or function error, mirrored into `error`.
    pub async fn submit(&mut self, functions: &dyn FunctionsApi) -> Result<SendEmailResponse, ClientError> {
        self.sent = None;
        let result = match self.to_request() {
            Ok(request) => {
                self.busy = true;
                let response = functions.send_email(&request).await;
                self.busy = false;
                response
            }
            Err(e) => Err(e),
        };
        if let Ok(response) = &result {
            tracing::info!(message_id = %response.message_id, "email sent");
            *self = Self { sent: Some(response.clone()), ..Self::default() };
        }
        settle(&mut self.error, result)
    }
}

#[component]
pub fn SendEmailView() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(SendEmailPage::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let mut draft = form.get_untracked();
            form.update(|f| f.busy = true);
            let functions = services.config.functions();
            leptos::task::spawn_local(async move {
                let _ = draft.submit(&functions).await;
                form.set(draft);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &services;
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::browser::read_files(&input).await {
                    Ok(files) => form.update(|f| {
                        for (name, bytes) in files {
                            f.attach(name, &bytes);
                        }
                    }),
                    Err(message) => form.update(|f| f.error = Some(message)),
                }
                input.set_value("");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <section>
            <h1>"Send email"</h1>
            <form class="form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="To (comma-separated)"
                    prop:value=move || form.with(|f| f.to.clone())
                    on:input=move |ev| form.update(|f| f.to = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Subject"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
                <textarea
                    placeholder="Message"
                    prop:value=move || form.with(|f| f.text.clone())
                    on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
                ></textarea>
                <textarea
                    placeholder="HTML (optional)"
                    prop:value=move || form.with(|f| f.html.clone())
                    on:input=move |ev| form.update(|f| f.html = event_target_value(&ev))
                ></textarea>
                <input type="file" multiple=true on:change=on_files/>
                <ul>
                    {move || {
                        form.with(|f| {
                            f.attachments
                                .iter()
                                .enumerate()
                                .map(|(index, attachment)| {
                                    let filename = attachment.filename.clone();
                                    view! {
                                        <li>
                                            {filename}
                                            " "
                                            <button type="button" on:click=move |_| form.update(|f| f.remove_attachment(index))>
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
                <button type="submit" disabled=move || form.with(|f| f.busy)>"Send"</button>
            </form>
            <p class="message">
                {move || form.with(|f| f.sent.as_ref().map(|sent| format!("{} ({})", sent.message, sent.message_id)))}
            </p>
            <p class="message message--error">{move || form.with(|f| f.error.clone())}</p>
        </section>
    }
}
