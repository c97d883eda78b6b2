use crate::dashboards::sales_overview::coordinator::RequestCoordinator;
use crate::dashboards::sales_overview::ui::dashboard::SalesOverviewDashboard;
use crate::shared::data_context::DataContext;
use crate::shared::toast::{ToastService, Toaster};
use crate::usecases::upload_sales_csv::ui::UploadSalesCsvPage;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Upload,
    Dashboard,
}

#[component]
pub fn App() -> impl IntoView {
    let data = DataContext::new();
    let toast = ToastService::new();

    provide_context(data);
    provide_context(toast);
    // One coordinator for the whole app: the dashboard holds a single
    // outstanding dataset, so request sequencing must be shared between
    // the upload flow and the filter bar.
    provide_context(RequestCoordinator::new(data, toast));

    let (page, set_page) = signal(Page::Upload);

    let nav_class = move |target: Page| {
        if page.get() == target {
            "app-nav__link app-nav__link--active"
        } else {
            "app-nav__link"
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-header__title">"Sales Insights"</h1>
                <nav class="app-nav">
                    <button class=move || nav_class(Page::Upload) on:click=move |_| set_page.set(Page::Upload)>
                        "Upload"
                    </button>
                    <button class=move || nav_class(Page::Dashboard) on:click=move |_| set_page.set(Page::Dashboard)>
                        "Dashboard"
                    </button>
                </nav>
            </header>

            <main class="app-main">
                {move || match page.get() {
                    Page::Upload => view! { <UploadSalesCsvPage /> }.into_any(),
                    Page::Dashboard => view! { <SalesOverviewDashboard /> }.into_any(),
                }}
            </main>

            <Toaster />
        </div>
    }
}
