use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    /// Banner text; the banner is hidden while this is `None`.
    pub message: Option<String>,
}

/// Inline error banner. Load failures and threshold validation errors both
/// land here; the previous chart stays on screen underneath it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    log::warn!("Displaying error to user: {}", message);

    html! {
        <div class="alert alert-error my-4" role="alert">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <div class="flex flex-col gap-2">
                <span class="font-semibold">{"Something went wrong"}</span>
                <span class="text-sm">{message}</span>
            </div>
        </div>
    }
}
