use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};
use serde_json::Value;

use business::domain::sale::model::SalesDimension;
use business::domain::sale::use_cases::first_record::FirstRecordUseCase;
use business::domain::sale::use_cases::search::{SearchSalesParams, SearchSalesUseCase};
use business::domain::sale::use_cases::totals::{SalesTotalsParams, SalesTotalsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::sale::dto::{SalesSummaryResponse, sale_record_json};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct SaleApi {
    search_use_case: Arc<dyn SearchSalesUseCase>,
    totals_use_case: Arc<dyn SalesTotalsUseCase>,
    first_record_use_case: Arc<dyn FirstRecordUseCase>,
}

impl SaleApi {
    pub fn new(
        search_use_case: Arc<dyn SearchSalesUseCase>,
        totals_use_case: Arc<dyn SalesTotalsUseCase>,
        first_record_use_case: Arc<dyn FirstRecordUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            totals_use_case,
            first_record_use_case,
        }
    }

    async fn search(
        &self,
        auth: &FirebaseBearer,
        dimension: SalesDimension,
        key: String,
        start_date: String,
        end_date: String,
    ) -> SearchSalesResponse {
        tracing::debug!(uid = %auth.0.uid, %dimension, "Sales search requested");

        let params = SearchSalesParams {
            dimension,
            key,
            start_date,
            end_date,
        };

        match self.search_use_case.execute(params).await {
            Ok(sales) => {
                SearchSalesResponse::Ok(Json(sales.into_iter().map(sale_record_json).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchSalesResponse::BadRequest(json),
                    404 => SearchSalesResponse::NotFound(json),
                    _ => SearchSalesResponse::InternalError(json),
                }
            }
        }
    }

    async fn totals(
        &self,
        auth: &FirebaseBearer,
        dimension: SalesDimension,
        key: String,
    ) -> SalesTotalsResponse {
        tracing::debug!(uid = %auth.0.uid, %dimension, "Sales totals requested");

        match self
            .totals_use_case
            .execute(SalesTotalsParams { dimension, key })
            .await
        {
            Ok(summary) => SalesTotalsResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SalesTotalsResponse::NotFound(json),
                    _ => SalesTotalsResponse::InternalError(json),
                }
            }
        }
    }
}

/// Sales datamart API
///
/// Read-only queries over the sales loaded at startup. Every endpoint needs a
/// Firebase ID token.
#[OpenApi]
impl SaleApi {
    /// Sales by employee
    ///
    /// Sales of one employee between two dates, both inclusive.
    #[oai(path = "/sales/employee", method = "get", tag = "ApiTags::Sales")]
    async fn sales_by_employee(
        &self,
        auth: FirebaseBearer,
        key_employee: Query<String>,
        start_date: Query<String>,
        end_date: Query<String>,
    ) -> SearchSalesResponse {
        self.search(
            &auth,
            SalesDimension::Employee,
            key_employee.0,
            start_date.0,
            end_date.0,
        )
        .await
    }

    /// Sales by product
    ///
    /// Sales of one product between two dates, both inclusive.
    #[oai(path = "/sales/product", method = "get", tag = "ApiTags::Sales")]
    async fn sales_by_product(
        &self,
        auth: FirebaseBearer,
        key_product: Query<String>,
        start_date: Query<String>,
        end_date: Query<String>,
    ) -> SearchSalesResponse {
        self.search(
            &auth,
            SalesDimension::Product,
            key_product.0,
            start_date.0,
            end_date.0,
        )
        .await
    }

    /// Sales by store
    ///
    /// Sales of one store between two dates, both inclusive.
    #[oai(path = "/sales/store", method = "get", tag = "ApiTags::Sales")]
    async fn sales_by_store(
        &self,
        auth: FirebaseBearer,
        key_store: Query<String>,
        start_date: Query<String>,
        end_date: Query<String>,
    ) -> SearchSalesResponse {
        self.search(
            &auth,
            SalesDimension::Store,
            key_store.0,
            start_date.0,
            end_date.0,
        )
        .await
    }

    /// Store totals
    #[oai(path = "/sales/store/total_avg", method = "get", tag = "ApiTags::Sales")]
    async fn store_totals(
        &self,
        auth: FirebaseBearer,
        key_store: Query<String>,
    ) -> SalesTotalsResponse {
        self.totals(&auth, SalesDimension::Store, key_store.0).await
    }

    /// Product totals
    #[oai(path = "/sales/product/total_avg", method = "get", tag = "ApiTags::Sales")]
    async fn product_totals(
        &self,
        auth: FirebaseBearer,
        key_product: Query<String>,
    ) -> SalesTotalsResponse {
        self.totals(&auth, SalesDimension::Product, key_product.0)
            .await
    }

    /// Employee totals
    #[oai(path = "/sales/employee/total_avg", method = "get", tag = "ApiTags::Sales")]
    async fn employee_totals(
        &self,
        auth: FirebaseBearer,
        key_employee: Query<String>,
    ) -> SalesTotalsResponse {
        self.totals(&auth, SalesDimension::Employee, key_employee.0)
            .await
    }

    /// First record
    ///
    /// Returns the first row of the datamart, handy for discovering valid keys.
    #[oai(path = "/sales/first_record", method = "get", tag = "ApiTags::Sales")]
    async fn first_record(&self, auth: FirebaseBearer) -> FirstRecordResponse {
        tracing::debug!(uid = %auth.0.uid, "First record requested");

        match self.first_record_use_case.execute().await {
            Ok(record) => FirstRecordResponse::Ok(Json(sale_record_json(record))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FirstRecordResponse::NotFound(json),
                    _ => FirstRecordResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchSalesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<Value>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SalesTotalsResponse {
    #[oai(status = 200)]
    Ok(Json<SalesSummaryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FirstRecordResponse {
    #[oai(status = 200)]
    Ok(Json<Value>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
