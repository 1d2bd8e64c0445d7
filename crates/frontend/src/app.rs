use crate::usecases::u101_generate_reports::view::GenerateReportsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! { <GenerateReportsPage /> }
}
