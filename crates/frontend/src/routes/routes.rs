use crate::domain::a001_purchase::ui::details::PurchaseDetails;
use crate::domain::a002_sale::ui::details::SaleDetails;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_INFO};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

pub const PURCHASE_PATH: &str = "/compras/nueva";
pub const SALE_PATH: &str = "/ventas/nueva";

#[component]
fn TopNav() -> impl IntoView {
    view! {
        <nav class="top-nav">
            <A href=SALE_PATH>"Ventas"</A>
            <A href=PURCHASE_PATH>"Compras"</A>
        </nav>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--info" category=PAGE_CAT_INFO title="Página no encontrada">
            <p>"Elija Ventas o Compras en el menú superior."</p>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <TopNav />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/compras/nueva") view=PurchaseDetails />
                    <Route path=path!("/ventas/nueva") view=SaleDetails />
                </Routes>
            </main>
        </Router>
    }
}
