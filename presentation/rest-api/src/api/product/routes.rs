use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::validation::ProductInput;
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Option<ProductId> {
    raw.parse::<ProductId>().ok()
}

/// Blank values count as absent; anything else must be a finite number.
fn parse_price_bound(raw: Option<&str>) -> Result<Option<f64>, ()> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(Some(price)),
            _ => Err(()),
        },
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, searching, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Validates the payload and stores a new product in the catalog.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let payload = match ProductInput::from(body.0).validate() {
            Ok(payload) => payload,
            Err(errors) => {
                let (_, json) = errors.into_error_response();
                return CreateProductResponse::UnprocessableEntity(json);
            }
        };

        match self
            .create_use_case
            .execute(CreateProductParams { payload })
            .await
        {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// List all products
    ///
    /// Returns every product in the catalog, in storage order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductListResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ProductListResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductListResponse::InternalError(json)
            }
        }
    }

    /// Search products
    ///
    /// Filters by a case-insensitive text match on name or description and by
    /// an inclusive price range. Every parameter is optional.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        q: Query<Option<String>>,
        min_price: Query<Option<String>>,
        max_price: Query<Option<String>>,
    ) -> ProductListResponse {
        let (Ok(min_price), Ok(max_price)) = (
            parse_price_bound(min_price.0.as_deref()),
            parse_price_bound(max_price.0.as_deref()),
        ) else {
            return ProductListResponse::BadRequest(Json(ErrorResponse::invalid_parameters()));
        };

        let params = SearchProductsParams {
            query: q.0,
            min_price,
            max_price,
        };

        match self.search_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ProductListResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductListResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Some(id) = parse_id(&id.0) else {
            return GetProductByIdResponse::BadRequest(Json(ErrorResponse::invalid_parameters()));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the name, description and price of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateProductResponse::BadRequest(Json(ErrorResponse::invalid_parameters()));
        };

        let payload = match ProductInput::from(body.0).validate() {
            Ok(payload) => payload,
            Err(errors) => {
                let (_, json) = errors.into_error_response();
                return UpdateProductResponse::UnprocessableEntity(json);
            }
        };

        match self
            .update_use_case
            .execute(UpdateProductParams { id, payload })
            .await
        {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product from the catalog. Deleting an id that
    /// does not exist (including one already deleted) returns 404.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return DeleteProductResponse::BadRequest(Json(ErrorResponse::invalid_parameters()));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(_err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(Json(ErrorResponse::invalid_parameters()))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "list_bad_request")]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn list_bad_request(_err: poem::Error) -> ProductListResponse {
    ProductListResponse::BadRequest(Json(ErrorResponse::invalid_parameters()))
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(_err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(Json(ErrorResponse::invalid_parameters()))
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use persistence::product::in_memory::InMemoryProductRepository;

    use super::*;
    use crate::setup::dependency_injection::DependencyContainer;
    use crate::setup::server::Server;

    fn client() -> TestClient<Route> {
        let container = DependencyContainer::new(Arc::new(InMemoryProductRepository::new()));
        TestClient::new(Server::routes(container, "http://localhost"))
    }

    async fn create(cli: &TestClient<Route>, name: &str, description: &str, price: f64) {
        cli.post("/products")
            .body_json(&json!({ "name": name, "description": description, "price": price }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
    }

    async fn seed_catalog(cli: &TestClient<Route>) {
        create(cli, "Monitor", "Monitor IPS de 27 Polegadas", 960.0).await;
        create(cli, "Placa mãe B650M", "Plataforma AM5", 750.0).await;
    }

    #[tokio::test]
    async fn should_create_product_and_return_201() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({
                "name": "Monitor",
                "description": "Monitor IPS de 27 Polegadas",
                "price": 960.0
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let product = json.value().object();
        product.get("id").assert_i64(1);
        product.get("name").assert_string("Monitor");
        product
            .get("description")
            .assert_string("Monitor IPS de 27 Polegadas");
        product.get("price").assert_f64(960.0);
    }

    #[tokio::test]
    async fn should_reject_invalid_fields_with_422() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({
                "name": "",
                "description": "Gabinete Gamer com 6 fans",
                "price": 0.0
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("message").assert_string("Invalid field(s)");
        let errors = body.get("errors").object();
        errors
            .get("name")
            .assert_string("The 'name' field is required");
        errors
            .get("price")
            .assert_string("The price must be greater than zero");

        cli.get("/products")
            .send()
            .await
            .json()
            .await
            .value()
            .array()
            .assert_is_empty();
    }

    #[tokio::test]
    async fn should_report_missing_fields_with_422() {
        let cli = client();

        let resp = cli.post("/products").body_json(&json!({})).send().await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = resp.json().await;
        let errors = json.value().object().get("errors").object();
        errors
            .get("description")
            .assert_string("The 'description' field is required");
        errors
            .get("price")
            .assert_string("The 'price' field is required");
    }

    #[tokio::test]
    async fn should_reject_undecodable_body_with_400() {
        let cli = client();

        let resp = cli
            .post("/products")
            .body_json(&json!({ "name": "Mouse", "description": "Wireless", "price": "cheap" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Invalid parameters");
    }

    #[tokio::test]
    async fn should_get_product_by_id() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli.get("/products/2").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let product = json.value().object();
        product.get("id").assert_i64(2);
        product.get("name").assert_string("Placa mãe B650M");
        product.get("price").assert_f64(750.0);
    }

    #[tokio::test]
    async fn should_return_404_with_message_for_unknown_id() {
        let cli = client();

        let resp = cli.get("/products/1").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Product with id 1 not found");
    }

    #[tokio::test]
    async fn should_return_400_for_malformed_id() {
        let cli = client();

        let resp = cli.get("/products/any").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Invalid parameters");
    }

    #[tokio::test]
    async fn should_list_every_product() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli.get("/products").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_search_by_text_and_price_range() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli
            .get("/products/search?q=ips&min_price=0&max_price=999")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let products = json.value().array();
        products.assert_len(1);
        products
            .get(0)
            .object()
            .get("name")
            .assert_string("Monitor");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_search_matches_nothing() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli
            .get("/products/search?q=any&min_price=500&max_price=999")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_is_empty();
    }

    #[tokio::test]
    async fn should_list_everything_when_search_has_no_criteria() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli.get("/products/search?min_price=").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_return_400_for_malformed_price_bound() {
        let cli = client();

        let resp = cli.get("/products/search?min_price=cheap").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Invalid parameters");
    }

    #[tokio::test]
    async fn should_update_existing_product() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli
            .put("/products/1")
            .body_json(&json!({
                "name": "Gabinete",
                "description": "Gabinete Gamer com 6 fans",
                "price": 250.0
            }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let product = json.value().object();
        product.get("id").assert_i64(1);
        product.get("name").assert_string("Gabinete");

        let resp = cli.get("/products/1").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let stored = json.value().object();
        stored
            .get("description")
            .assert_string("Gabinete Gamer com 6 fans");
        stored.get("price").assert_f64(250.0);
    }

    #[tokio::test]
    async fn should_return_404_when_updating_unknown_product() {
        let cli = client();

        let resp = cli
            .put("/products/1")
            .body_json(&json!({
                "name": "Gabinete",
                "description": "Gabinete Gamer com 6 fans",
                "price": 250.0
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Product with id 1 not found");
    }

    #[tokio::test]
    async fn should_validate_update_payload() {
        let cli = client();
        seed_catalog(&cli).await;

        let resp = cli
            .put("/products/1")
            .body_json(&json!({ "name": "Monitor", "description": " ", "price": -5.0 }))
            .send()
            .await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_delete_once_then_return_404() {
        let cli = client();
        seed_catalog(&cli).await;

        cli.delete("/products/1")
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        cli.get("/products/1")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let resp = cli.delete("/products/1").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("Product with id 1 not found");
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let cli = client();

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("status")
            .assert_string("healthy");
    }

    #[test]
    fn should_parse_numeric_ids_only() {
        assert_eq!(parse_id("1"), Some(ProductId::new(1)));
        assert_eq!(parse_id("any"), None);
        assert_eq!(parse_id("1.5"), None);
    }

    #[test]
    fn should_treat_blank_price_bound_as_absent() {
        assert_eq!(parse_price_bound(None), Ok(None));
        assert_eq!(parse_price_bound(Some("")), Ok(None));
        assert_eq!(parse_price_bound(Some("  ")), Ok(None));
    }

    #[test]
    fn should_parse_price_bounds() {
        assert_eq!(parse_price_bound(Some("0")), Ok(Some(0.0)));
        assert_eq!(parse_price_bound(Some("999.90")), Ok(Some(999.9)));
    }

    #[test]
    fn should_reject_malformed_price_bounds() {
        assert_eq!(parse_price_bound(Some("cheap")), Err(()));
        assert_eq!(parse_price_bound(Some("NaN")), Err(()));
        assert_eq!(parse_price_bound(Some("inf")), Err(()));
    }
}
