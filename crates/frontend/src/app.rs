use crate::costing::view::CostingForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <h1>"Ball Cost Estimation"</h1>
            <CostingForm />
        </main>
    }
}
