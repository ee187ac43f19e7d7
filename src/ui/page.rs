use maud::{html, Markup, DOCTYPE};

use crate::translate::PresetLanguage;

pub const CONFIG_ERROR: &str = "Please provide a Mistral API key";
pub const SUCCESS_NOTICE: &str = "Translation complete!";
pub const LANGUAGE_WARNING: &str = "Please type the target language";

/// Values echoed back into the form after a submit.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub text: String,
    pub language: PresetLanguage,
    pub use_custom: bool,
    pub custom_language: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice success",
            Notice::Warning(_) => "notice warning",
            Notice::Error(_) => "notice error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub model: String,
    /// No server-side key: show the masked key input.
    pub needs_api_key: bool,
    pub form: FormValues,
    pub output: Option<String>,
    pub notice: Option<Notice>,
}

impl PageView {
    fn config_error(&self) -> bool {
        self.needs_api_key && self.form.api_key.trim().is_empty()
    }
}

pub fn render(view: &PageView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Translator with Mistral AI" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                @if view.needs_api_key {
                    aside.sidebar {
                        label for="api_key" { "Mistral API Key" }
                        input #api_key type="password" name="api_key" form="translate-form"
                            autocomplete="off" value=(view.form.api_key);
                        @if view.config_error() {
                            div.notice.error { (CONFIG_ERROR) }
                        }
                    }
                }
                main {
                    h1 { "🌐 Translator with Mistral AI" }
                    p.subtitle { "Translate text into many languages using artificial intelligence" }

                    div.columns {
                        section.column {
                            h3 { "Original text" }
                            form #translate-form method="post" action="/" {
                                label for="text" { "Type the text to translate" }
                                // Browsers drop one newline right after <textarea>.
                                textarea #text name="text" rows="10" { "\n" (view.form.text) }

                                label for="language" { "Select the target language" }
                                select #language name="language" {
                                    @for preset in PresetLanguage::ALL {
                                        option value=(preset.label()) selected[preset == view.form.language] {
                                            (preset.label())
                                        }
                                    }
                                }

                                label.checkbox {
                                    input type="checkbox" name="use_custom" value="on" checked[view.form.use_custom];
                                    " Use another language"
                                }
                                input type="text" name="custom_language"
                                    placeholder="Type the desired language" value=(view.form.custom_language);

                                button.primary type="submit" { "Translate" }
                            }
                        }

                        section.column {
                            h3 { "Translation" }
                            textarea #output readonly rows="10" aria-label="Translated text" {
                                "\n"
                                @if let Some(text) = &view.output { (text) }
                            }
                            @if let Some(notice) = &view.notice {
                                div class=(notice.class()) { (notice.message()) }
                            }
                        }
                    }

                    details {
                        summary { "About the translator" }
                        p {
                            "This translator uses the Mistral AI chat completions API. The model in use is "
                            code { (view.model) }
                            "."
                        }
                        p { "A valid Mistral AI API key is required to use it." }
                    }
                }
            }
        }
    }
}
