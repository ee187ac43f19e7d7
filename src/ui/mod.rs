pub mod form;
pub mod page;

use axum::extract::State;
use axum::Form;
use maud::Markup;

use crate::state::AppState;
use form::TranslateForm;

pub async fn index(State(state): State<AppState>) -> Markup {
    page::render(&form::empty_view(&state))
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<TranslateForm>) -> Markup {
    page::render(&form::process(&state, form).await)
}
