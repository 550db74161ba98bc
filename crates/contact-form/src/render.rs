// File: src/render.rs
// Purpose: Maud markup for the contact form and its page shell

use crate::config::FormConfig;
use crate::controller::FormView;
use crate::field::{Field, QueryType};
use maud::{html, Markup, DOCTYPE};

/// Shown once a submission has been accepted
pub const SUCCESS_MESSAGE: &str = "thank you! Your message has been successfully sent.";

/// Shown when delivery fails and failures are surfaced
pub const FAILURE_MESSAGE: &str =
    "Something went wrong while sending your message. Please try again.";

const INPUT_OK: &str = "w-full p-3 border rounded-lg focus:outline-none focus:ring-2 border-gray-300 focus:ring-emerald-400";
const INPUT_ERROR: &str = "w-full p-3 border rounded-lg focus:outline-none focus:ring-2 border-red-500 ring-red-200";
const LABEL: &str = "block text-sm font-medium text-gray-700 mb-1";
const ERROR_TEXT: &str = "text-red-600 text-sm mt-1";
const RADIO_SELECTED: &str = "flex-1 p-3 border rounded-lg flex items-center justify-start gap-2 cursor-pointer text-sm font-medium transition focus-within:ring-2 bg-emerald-50 border-emerald-600 ring-2 ring-emerald-200";
const RADIO_IDLE: &str = "flex-1 p-3 border rounded-lg flex items-center justify-start gap-2 cursor-pointer text-sm font-medium transition focus-within:ring-2 border-gray-300 hover:border-emerald-400";

/// Render-time switches
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Path the form posts to (plain POST and htmx)
    pub action: String,
    /// Whether a failed delivery shows an alert
    pub show_submission_errors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            action: "/contact".to_string(),
            show_submission_errors: true,
        }
    }
}

impl From<&FormConfig> for RenderOptions {
    fn from(config: &FormConfig) -> Self {
        Self {
            action: config.action.clone(),
            show_submission_errors: config.show_submission_errors,
        }
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        INPUT_ERROR
    } else {
        INPUT_OK
    }
}

fn required_label(field: Field) -> Markup {
    html! {
        label for=(field.name()) class=(LABEL) {
            (field.label()) span class="text-red-600" { "*" }
        }
    }
}

fn error_text(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class=(ERROR_TEXT) { (message) }
        }
    }
}

fn text_input(view: &FormView<'_>, field: Field, input_type: &str) -> Markup {
    let error = view.errors.get(field);

    html! {
        div {
            (required_label(field))
            input id=(field.name()) name=(field.name()) type=(input_type)
                value=(view.values.text(field))
                class=(input_class(error.is_some()))
                aria-invalid=[error.map(|_| "true")];
            (error_text(error))
        }
    }
}

fn message_input(view: &FormView<'_>) -> Markup {
    let error = view.errors.get(Field::Message);

    html! {
        div {
            (required_label(Field::Message))
            textarea id=(Field::Message.name()) name=(Field::Message.name()) rows="5"
                class=(input_class(error.is_some()))
                aria-invalid=[error.map(|_| "true")] {
                (view.values.message)
            }
            (error_text(error))
        }
    }
}

fn query_type_group(view: &FormView<'_>) -> Markup {
    html! {
        fieldset {
            legend class=(LABEL) {
                (Field::QueryType.label()) span class="text-red-600" { "*" }
            }
            div class="flex flex-col md:flex-row gap-4" {
                @for query_type in QueryType::ALL {
                    @let selected = view.selected_query_type == Some(query_type);
                    label class=(if selected { RADIO_SELECTED } else { RADIO_IDLE }) {
                        input type="radio" name=(Field::QueryType.name())
                            value=(query_type.as_str())
                            checked[selected]
                            class="accent-emerald-600";
                        span { (query_type.label()) }
                    }
                }
            }
            (error_text(view.errors.get(Field::QueryType)))
        }
    }
}

fn consent_checkbox(view: &FormView<'_>) -> Markup {
    html! {
        div class="flex items-start gap-2" {
            input id=(Field::Consent.name()) name=(Field::Consent.name()) type="checkbox"
                value="on"
                checked[view.values.consent]
                class="mt-1 accent-emerald-600";
            label for=(Field::Consent.name()) class="text-sm text-gray-700 leading-snug" {
                (Field::Consent.label()) span class="text-red-600" { "*" }
            }
        }
        (error_text(view.errors.get(Field::Consent)))
    }
}

/// The `<form>` element with inline errors and status alerts
pub fn contact_form(view: &FormView<'_>, options: &RenderOptions) -> Markup {
    html! {
        form id="contact-form" method="post" action=(options.action)
            hx-post=(options.action) hx-swap="outerHTML"
            novalidate
            class="w-full max-w-xl bg-white p-8 rounded-2xl shadow-md space-y-6" {
            h1 class="text-3xl font-semibold text-gray-900" { "Contact Us" }

            div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                (text_input(view, Field::FirstName, "text"))
                (text_input(view, Field::LastName, "text"))
            }

            (text_input(view, Field::Email, "email"))
            (query_type_group(view))
            (message_input(view))
            (consent_checkbox(view))

            button type="submit" disabled[view.submitting]
                class="w-full bg-emerald-700 hover:bg-emerald-800 text-white py-3 px-4 rounded-lg text-sm font-semibold focus:outline-none focus:ring-2 focus:ring-emerald-400" {
                "Submit"
            }

            @if view.submitted {
                div role="alert"
                    class="text-sm text-green-700 bg-green-100 border border-green-300 rounded-md p-3 text-center" {
                    (SUCCESS_MESSAGE)
                }
            }

            @if view.failure.is_some() && options.show_submission_errors {
                div role="alert"
                    class="text-sm text-red-700 bg-red-100 border border-red-300 rounded-md p-3 text-center" {
                    (FAILURE_MESSAGE)
                }
            }
        }
    }
}

/// Full HTML document wrapping the form
pub fn page(form: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Contact Us" }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body {
                main class="min-h-screen bg-emerald-50 flex items-center justify-center px-4 py-8" {
                    (form)
                }
            }
        }
    }
}
