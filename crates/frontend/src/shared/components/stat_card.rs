use leptos::prelude::*;

/// Small metric card: a label on top, one formatted value below.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Pre-formatted value string
    value: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
        </div>
    }
}
