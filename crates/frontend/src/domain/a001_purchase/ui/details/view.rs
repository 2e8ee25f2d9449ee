use super::view_model::PurchaseDetailsVm;
use crate::shared::cart::{CartTable, ProductPicker};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::config::Config;
use crate::shared::date_utils::{format_date, today};
use crate::shared::notice::NoticeService;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_ENTRY};
use contracts::domain::a002_purchase::aggregate::PURCHASE_DOCUMENT_TYPES;
use leptos::prelude::*;

#[component]
pub fn PurchaseDetails() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not provided in context");
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let vm = PurchaseDetailsVm::new(&config, notices);
    vm.load();

    let save_disabled = vm.is_save_disabled();

    view! {
        <PageFrame page_id="a001_purchase--entry" category=PAGE_CAT_ENTRY title="Nueva compra">
            <form class="document-header" on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.save();
            }>
                <div class="document-header__row">
                    <Select
                        label="Tipo de comprobante"
                        id="tipoComprobante"
                        value=vm.document_type
                        on_change=Callback::new(move |v| vm.document_type.set(v))
                        options=PURCHASE_DOCUMENT_TYPES
                    />
                    <Input
                        label="Serie"
                        id="serie"
                        value=vm.series
                        on_input=Callback::new(move |v| vm.series.set(v))
                        max_length=4
                    />
                    <Input
                        label="Número"
                        id="numero"
                        value=vm.number
                        on_input=Callback::new(move |v| vm.number.set(v))
                        max_length=8
                    />
                    <div class="form__group">
                        <span class="form__label">"Fecha de emisión"</span>
                        <span class="form__static">{format_date(today())}</span>
                    </div>
                </div>
                <div class="document-header__row">
                    <Input
                        label="RUC proveedor"
                        id="proveedorRuc"
                        value=vm.supplier_tax_id
                        on_input=Callback::new(move |v| vm.supplier_tax_id.set(v))
                        max_length=11
                    />
                    <Input
                        label="Razón social"
                        id="proveedorRazon"
                        value=vm.supplier_name
                        on_input=Callback::new(move |v| vm.supplier_name.set(v))
                    />
                </div>
            </form>

            <ProductPicker vm=vm.cart />
            <CartTable vm=vm.cart />

            <div class="page__actions">
                <Button disabled=save_disabled on_click=Callback::new(move |_| vm.save())>
                    "Guardar compra"
                </Button>
            </div>
        </PageFrame>
    }
}
