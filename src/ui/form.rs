use serde::Deserialize;
use tracing::{debug, info};

use super::page::{FormValues, Notice, PageView, CONFIG_ERROR, LANGUAGE_WARNING, SUCCESS_NOTICE};
use crate::credential::Credential;
use crate::state::AppState;
use crate::translate::{LanguageSelection, PresetLanguage, RequestError, TranslationRequest};

/// Fields posted by the page form. Unchecked checkboxes are simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: PresetLanguage,
    #[serde(default)]
    pub use_custom: Option<String>,
    #[serde(default)]
    pub custom_language: String,
    #[serde(default)]
    pub api_key: String,
}

impl TranslateForm {
    pub fn selection(&self) -> LanguageSelection {
        if self.use_custom.is_some() {
            LanguageSelection::Custom(self.custom_language.clone())
        } else {
            LanguageSelection::Preset(self.language)
        }
    }

    fn values(&self) -> FormValues {
        FormValues {
            text: self.text.clone(),
            language: self.language,
            use_custom: self.use_custom.is_some(),
            custom_language: self.custom_language.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

pub fn empty_view(state: &AppState) -> PageView {
    PageView {
        model: state.translator.model().to_string(),
        needs_api_key: !state.has_server_credential(),
        form: FormValues::default(),
        output: None,
        notice: None,
    }
}

/// Run one form submission. Guards that fail never reach the provider.
pub async fn process(state: &AppState, form: TranslateForm) -> PageView {
    let mut view = empty_view(state);
    view.form = form.values();

    let selection = form.selection();
    let credential = Credential::pick(state.credential.as_ref(), Some(form.api_key.as_str()));
    let request = match TranslationRequest::new(
        form.text,
        selection.resolve().unwrap_or_default(),
        credential,
    ) {
        Ok(request) => request,
        Err(RequestError::EmptyText) => {
            debug!("Empty source text; nothing to translate");
            return view;
        }
        Err(RequestError::EmptyLanguage) => {
            view.notice = Some(Notice::Warning(LANGUAGE_WARNING.to_string()));
            return view;
        }
        Err(RequestError::MissingCredential) => {
            info!("Translate requested without an API key");
            view.notice = Some(Notice::Error(CONFIG_ERROR.to_string()));
            return view;
        }
    };

    match state.translator.translate(&request).await {
        Ok(text) => {
            view.output = Some(text);
            view.notice = Some(Notice::Success(SUCCESS_NOTICE.to_string()));
        }
        Err(e) => {
            view.notice = Some(Notice::Error(format!("Error while translating: {}", e)));
        }
    }
    view
}
