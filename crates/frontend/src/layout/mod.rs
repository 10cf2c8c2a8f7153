pub mod center;
pub mod global_context;
pub mod right;

use leptos::prelude::*;

/// Chat screen with the right information column.
///
/// ```text
/// +------------------------------+-------------+
/// |            Center            |    Right    |
/// |          (chat area)         |  (header +  |
/// |                              |   screen)   |
/// +------------------------------+-------------+
/// ```
#[component]
pub fn Shell<C, R>(center: C, right: R) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div class="app-main">
                    {center()}
                </div>
                <right::Right>
                    {right()}
                </right::Right>
            </div>
        </div>
    }
}
