use utoipa::OpenApi;

use crate::handlers::{catalog, customers, dashboard, health};

#[derive(OpenApi)]
#[openapi(
    info(title = "Northwind customer browser"),
    paths(
        health::health,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        catalog::list_orders,
        catalog::get_order,
        catalog::list_products,
        catalog::get_product,
        dashboard::dashboard,
        dashboard::fuel_reimbursement,
    ),
    components(schemas(
        customers::CustomerResponse,
        customers::CreateCustomerRequest,
        customers::CustomerPageResponse,
        customers::OrderSummaryResponse,
        customers::CustomerDetailsResponse,
        catalog::OrderResponse,
        catalog::OrderLineResponse,
        catalog::ProductResponse,
        dashboard::DashboardResponse,
        dashboard::FuelReimbursementResponse,
    )),
    tags(
        (name = "customers", description = "Paged customer listing and details"),
        (name = "orders", description = "Raw orders with line items"),
        (name = "products", description = "Product lookups"),
    )
)]
pub struct ApiDoc;
