use crate::shared::i18n::lang;
use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    text: Signal<String>,
    #[prop(into)]
    confirm_label: Signal<String>,
    #[prop(optional, into)]
    confirm_is_destructive: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <p class="confirm-dialog__text">{move || text.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            {lang("Cancel")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            <span class:confirm-dialog__destructive=move || confirm_is_destructive.get()>
                                {move || confirm_label.get()}
                            </span>
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
