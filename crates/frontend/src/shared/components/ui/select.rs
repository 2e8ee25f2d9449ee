use leptos::prelude::*;

/// Labeled select over a fixed list of codes; each code is its own label
/// (FACTURA, BOLETA, EFECTIVO, ...)
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    options: &'static [&'static str],
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .iter()
                    .map(|&code| {
                        let is_selected = move || value.get() == code;
                        view! { <option value=code selected=is_selected>{code}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
