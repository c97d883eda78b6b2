use crate::dashboards::sales_overview::coordinator::RequestCoordinator;
use crate::shared::data_context::DataContext;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Upload page: pick a sales CSV and hand it to the dashboard.
///
/// Selecting a file stores the handle in the shared context and
/// immediately fetches metrics for the currently selected filter, so the
/// dashboard is populated right after the upload.
#[component]
pub fn UploadSalesCsvPage() -> impl IntoView {
    let data = use_context::<DataContext>().expect("DataContext not provided in context");
    let coordinator =
        use_context::<RequestCoordinator>().expect("RequestCoordinator not provided in context");

    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    set_selected_file_name.set(Some(file.name()));
                    data.uploaded_file.set(Some(file));
                    coordinator.apply_current();
                }
            }
        }
    };

    view! {
        <div class="page page--usecase">
            <div class="page__header">
                <h2 class="page__title">"Upload sales CSV"</h2>
                <p class="page__subtitle">
                    "The file is sent to the backend, which parses it and computes the metrics."
                </p>
            </div>

            <div class="upload__drop">
                <input type="file" accept=".csv" on:change=handle_file_select />
                {move || {
                    selected_file_name
                        .get()
                        .map(|name| view! { <div class="upload__file-name">{name}</div> })
                }}
            </div>
        </div>
    }
}
