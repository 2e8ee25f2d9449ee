use super::cart::LineEdit;
use super::policy::RateSource;
use super::view_model::{CartVm, LineRow};
use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::number_format::{format_amount, format_money};
use leptos::prelude::*;
use thaw::*;

/// Cart lines with inline quantity (and, when allowed, rate) editing plus
/// the totals footer.
///
/// Inputs are bound once per row build; typing only reaches the cart
/// through `CartVm::apply_edit`, which never rebuilds rows.
#[component]
pub fn CartTable(vm: CartVm) -> impl IntoView {
    let policy = vm.policy();
    let rate_editable = policy.rate_editable;
    let tax_rate = policy.tax_rate;
    let quantity_min = policy.quantity_floor.unwrap_or(0.0);
    let currency = StoredValue::new(vm.currency());
    let rate_label = match policy.rate_source {
        RateSource::PurchaseCost => "Costo unit.",
        RateSource::SalePrice => "Precio",
    };

    view! {
        <form class="cart-lines" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Producto"</TableHeaderCell>
                        <TableHeaderCell>{rate_label}</TableHeaderCell>
                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.rows.get()
                        key=LineRow::key
                        children=move |row| view! {
                            <CartRow vm=vm row=row rate_editable=rate_editable quantity_min=quantity_min currency=currency />
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || vm.rows.with(Vec::is_empty)>
                <p class="cart-lines__empty">"No hay productos en la lista"</p>
            </Show>
            <CartTotals vm=vm tax_rate=tax_rate currency=currency />
        </form>
    }
}

#[component]
fn CartRow(
    vm: CartVm,
    row: LineRow,
    rate_editable: bool,
    quantity_min: f64,
    currency: StoredValue<String>,
) -> impl IntoView {
    let index = row.index;
    let subtotal = move || vm.subtotals.with(|v| v.get(index).copied().unwrap_or(0.0));

    let rate_cell = if rate_editable {
        view! {
            <input
                type="number"
                step="0.01"
                min="0"
                class="form__input cart-lines__rate"
                prop:value=format_amount(row.rate)
                on:input=move |ev| vm.apply_edit(LineEdit::Rate { index, raw: event_target_value(&ev) })
            />
        }
        .into_any()
    } else {
        view! {
            <span class="cart-lines__rate">{format_money(&currency.get_value(), row.rate)}</span>
        }
        .into_any()
    };

    view! {
        <TableRow>
            <TableCell>{row.name}</TableCell>
            <TableCell>{rate_cell}</TableCell>
            <TableCell>
                <input
                    type="number"
                    step="any"
                    min=quantity_min.to_string()
                    class="form__input cart-lines__quantity"
                    prop:value=row.quantity.to_string()
                    on:input=move |ev| vm.apply_edit(LineEdit::Quantity { index, raw: event_target_value(&ev) })
                />
            </TableCell>
            <TableCell class="text-right">
                {move || format_money(&currency.get_value(), subtotal())}
            </TableCell>
            <TableCell>
                <Button
                    variant=ButtonVariant::Danger
                    title="Quitar"
                    on_click=Callback::new(move |_| vm.remove_line(index))
                >
                    "✕"
                </Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn CartTotals(vm: CartVm, tax_rate: Option<f64>, currency: StoredValue<String>) -> impl IntoView {
    let money = move |value: f64| format_money(&currency.get_value(), value);

    let tax_rows = tax_rate.map(|rate| {
        let label = format!("IGV ({}%)", (rate * 100.0).round());
        view! {
            <div class="cart-totals__row">
                <span>"Op. gravada"</span>
                <span>{move || {
                    vm.total.track();
                    money(vm.with_cart(|c| c.tax_exclusive(rate)))
                }}</span>
            </div>
            <div class="cart-totals__row">
                <span>{label}</span>
                <span>{move || {
                    vm.total.track();
                    money(vm.with_cart(|c| c.tax_amount(rate)))
                }}</span>
            </div>
        }
    });

    view! {
        <div class="cart-totals">
            {tax_rows}
            <div class="cart-totals__row cart-totals__row--total">
                <span>"Total"</span>
                <span>{move || money(vm.total.get())}</span>
            </div>
        </div>
    }
}
