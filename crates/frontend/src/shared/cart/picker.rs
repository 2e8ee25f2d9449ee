use super::view_model::CartVm;
use crate::shared::cart::product_cache::filter_options;
use crate::shared::components::ui::Button;
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::prelude::*;

/// Searchable product list over the cached options.
///
/// Typing filters; Enter or "+" adds the highlighted hit, a click adds the
/// clicked one. The query is cleared after every add.
#[component]
pub fn ProductPicker(vm: CartVm) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let highlighted = RwSignal::new(0usize);
    let limit = vm.picker_limit();

    let hits = Memo::new(move |_| {
        let q = query.get();
        vm.options.with(|opts| {
            filter_options(opts, &q, limit)
                .into_iter()
                .map(|o| (o.id, o.text.clone()))
                .collect::<Vec<_>>()
        })
    });

    let choose = move |id: ProductId| {
        vm.add_product(id);
        query.set(String::new());
        highlighted.set(0);
    };

    let choose_highlighted = move || {
        if query.with_untracked(|q| q.trim().is_empty()) {
            return;
        }
        let current = highlighted.get_untracked();
        let pick = hits.with_untracked(|h| h.get(current).or(h.first()).map(|(id, _)| *id));
        if let Some(id) = pick {
            choose(id);
        }
    };

    let is_disabled = move || vm.products_loading.get();

    view! {
        <div class="product-picker">
            <div class="product-picker__bar">
                <input
                    type="search"
                    class="form__input product-picker__query"
                    placeholder="Buscar producto (nombre, categoría o código)"
                    autocomplete="off"
                    prop:value=move || query.get()
                    disabled=is_disabled
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        highlighted.set(0);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            choose_highlighted();
                        }
                        "ArrowDown" => {
                            ev.prevent_default();
                            let count = hits.with(Vec::len);
                            if count > 0 {
                                highlighted.update(|h| *h = (*h + 1).min(count - 1));
                            }
                        }
                        "ArrowUp" => {
                            ev.prevent_default();
                            highlighted.update(|h| *h = h.saturating_sub(1));
                        }
                        "Escape" => query.set(String::new()),
                        _ => {}
                    }
                />
                <Button
                    title="Agregar"
                    disabled=Signal::derive(is_disabled)
                    on_click=Callback::new(move |_| choose_highlighted())
                >
                    "+"
                </Button>
            </div>
            <Show when=move || query.with(|q| !q.trim().is_empty())>
                <ul class="product-picker__list">
                    <For
                        each=move || hits.get().into_iter().enumerate()
                        key=|(i, (id, _))| (*i, *id)
                        children=move |(i, (id, text))| {
                            let class = move || {
                                if highlighted.get() == i {
                                    "product-picker__item product-picker__item--active"
                                } else {
                                    "product-picker__item"
                                }
                            };
                            view! {
                                <li
                                    class=class
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        choose(id);
                                    }
                                >
                                    {text}
                                </li>
                            }
                        }
                    />
                    <Show when=move || hits.with(Vec::is_empty)>
                        <li class="product-picker__empty">"Sin resultados"</li>
                    </Show>
                </ul>
            </Show>
        </div>
    }
}
