use leptos::prelude::*;

/// Labeled text input.
///
/// The value is bound as a DOM property, so clearing the signal clears the
/// field even after the user has typed into it.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Enter handler; when set, Enter's default action is suppressed
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// `maxlength` attribute (document numbers, RUC)
    #[prop(optional)]
    max_length: Option<u32>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                maxlength=max_length.map(|n| n.to_string())
                autocomplete="off"
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() != "Enter" {
                        return;
                    }
                    if let Some(handler) = on_enter {
                        ev.prevent_default();
                        handler.run(());
                    }
                }
            />
        </div>
    }
}
