use super::view_model::{loading_finished, SaleDetailsVm, SCAN_INPUT_ID};
use crate::shared::cart::{CartTable, ProductPicker};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::config::Config;
use crate::shared::keyboard_nav;
use crate::shared::notice::NoticeService;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_ENTRY};
use contracts::domain::a003_sale::aggregate::{PAYMENT_METHODS, PAYMENT_TERMS, SALE_DOCUMENT_TYPES};
use leptos::prelude::*;

#[component]
pub fn SaleDetails() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not provided in context");
    let notices = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let vm = SaleDetailsVm::new(&config, notices);
    vm.load();

    let submit_disabled = vm.is_submit_disabled();
    let doc_label = vm.client_doc_label();

    // The scanner is disabled while products load, so the page autofocus
    // cannot land on it; hand it focus once the list is in
    Effect::new(move |previous: Option<bool>| {
        let loading = vm.cart.products_loading.get();
        if loading_finished(previous, loading) {
            request_animation_frame(|| keyboard_nav::focus_by_id(SCAN_INPUT_ID));
        }
        loading
    });

    view! {
        <PageFrame page_id="a002_sale--entry" category=PAGE_CAT_ENTRY title="Nueva venta">
            <div class="scan-bar">
                <Input
                    label="Código de barras"
                    id=SCAN_INPUT_ID
                    class="scan-bar__input"
                    placeholder="Escanee o escriba el código y presione Enter"
                    value=vm.scan_code
                    on_input=Callback::new(move |v| vm.scan_code.set(v))
                    on_enter=Callback::new(move |_| vm.scan())
                    disabled=vm.cart.products_loading
                />
            </div>

            <ProductPicker vm=vm.cart />

            <form class="document-header" on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit();
            }>
                <div class="document-header__row">
                    <Select
                        label="Comprobante"
                        id="tipoComprobante"
                        value=vm.document_type
                        on_change=Callback::new(move |v| vm.document_type.set(v))
                        options=SALE_DOCUMENT_TYPES
                    />
                    <Input
                        label=Signal::derive(move || doc_label.get().to_string())
                        id="clienteDoc"
                        value=vm.client_doc
                        on_input=Callback::new(move |v| vm.client_doc.set(v))
                        max_length=11
                    />
                    <Input
                        label="Cliente"
                        id="clienteNombre"
                        placeholder="CLIENTE VARIOS"
                        value=vm.client_name
                        on_input=Callback::new(move |v| vm.client_name.set(v))
                    />
                </div>
                <div class="document-header__row">
                    <Input
                        label="Dirección"
                        id="clienteDireccion"
                        value=vm.client_address
                        on_input=Callback::new(move |v| vm.client_address.set(v))
                    />
                    <Select
                        label="Forma de pago"
                        id="formaPago"
                        value=vm.payment_terms
                        on_change=Callback::new(move |v| vm.payment_terms.set(v))
                        options=PAYMENT_TERMS
                    />
                    <Select
                        label="Método de pago"
                        id="metodoPago"
                        value=vm.payment_method
                        on_change=Callback::new(move |v| vm.payment_method.set(v))
                        options=PAYMENT_METHODS
                    />
                </div>
            </form>

            <CartTable vm=vm.cart />

            <div class="page__actions">
                <Button disabled=submit_disabled on_click=Callback::new(move |_| vm.submit())>
                    "Procesar venta"
                </Button>
            </div>
        </PageFrame>
    }
}
