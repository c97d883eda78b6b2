use leptos::prelude::*;

/// How long a toast stays on screen, in milliseconds.
#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Default,
    Destructive,
}

#[derive(Debug, Clone)]
struct ToastMessage {
    id: u64,
    title: String,
    message: String,
    severity: ToastSeverity,
}

/// Service for transient, fire-and-forget notifications.
///
/// Usage:
/// ```rust,ignore
/// let toast = use_context::<ToastService>().unwrap();
/// toast.notify("Notice", "No CSV file has been uploaded.", ToastSeverity::Default);
/// ```
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastMessage>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a toast and schedule its dismissal. No acknowledgement is
    /// required or reported back to the caller.
    pub fn notify(&self, title: &str, message: &str, severity: ToastSeverity) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(ToastMessage {
                id,
                title: title.to_string(),
                message: message.to_string(),
                severity,
            })
        });

        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    // Dismissal timers need the browser event loop; host builds keep
    // toasts until they are read.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}

    /// Titles of the currently visible toasts.
    #[cfg(test)]
    pub(crate) fn active_titles(&self) -> Vec<String> {
        self.toasts
            .with(|toasts| toasts.iter().map(|toast| toast.title.clone()).collect())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Host component rendering the active toast stack. Mounted once by the
/// app shell.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toaster">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.severity {
                            ToastSeverity::Default => "toast",
                            ToastSeverity::Destructive => "toast toast--destructive",
                        };
                        view! {
                            <div class=class>
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__message">{toast.message}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
