use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let on_toggle_dark_mode = Callback::from(|_| {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());

        if let Some(body) = body {
            match body.class_list().toggle("dark-mode") {
                Ok(enabled) => log::debug!("Dark mode toggled: {}", enabled),
                Err(e) => log::error!("Failed to toggle dark mode: {:?}", e),
            }
        }
    });

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input id="theme-toggle" type="checkbox" onclick={on_toggle_dark_mode} />
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
            </div>
        </div>
    }
}
