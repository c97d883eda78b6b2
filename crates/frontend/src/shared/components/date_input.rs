use leptos::prelude::*;

/// Date input backed by the native browser date picker.
/// The browser displays the date per its locale; the value callbacks
/// always use yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            class="date-input"
            type="date"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
