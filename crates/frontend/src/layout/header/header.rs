use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content" style="display: flex; flex-direction: column; line-height: 1.1;">
                <h1 class="header__title">{title}</h1>
                <span class="header__subtitle">"Happy Shopping"</span>
            </div>
            <div class="header__actions header-user">
                <span>"Profile"</span>
                <div class="header-avatar">"A"</div>
            </div>
        </header>
    }
}
