//! # 상품 카탈로그 서비스 구현
//!
//! 상품 생성/조회/수정/삭제를 담당합니다. 생성/수정/삭제는 관리자 라우트에서만 호출됩니다.
//!
//! ## 상품명 중복 처리
//!
//! 상품명은 앞뒤 공백을 제거한 값으로 비교합니다. 먼저 같은 이름의 상품을 조회해
//! 409를 반환하고, 조회와 삽입 사이에 끼어든 요청은 `products.title` 유니크 인덱스가
//! 막아 역시 409가 됩니다. 설명도 같은 방식으로 앞뒤 공백을 제거해 저장합니다.

use mongodb::bson::DateTime;
use singleton_macro::service;
use validator::Validate;
use crate::{
    domain::{
        dto::products::{CreateProductRequest, ProductResponse, UpdateProductRequest},
        entities::products::product::Product,
    },
    errors::{AppError, AppResult, ErrorLogging},
    repositories::stores::ProductStoreHandle,
    utils::{id_utils::parse_object_id, string_utils::validate_required_string},
};

const LOG_LABEL: &str = "PRODUCT-SERVICE";

#[service(name = "product")]
pub struct ProductService {
    products: ProductStoreHandle,
}

impl ProductService {
    pub fn with_store(products: ProductStoreHandle) -> Self {
        Self { products }
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> AppResult<ProductResponse> {
        request.validate().map_err(AppError::from).log_with(LOG_LABEL)?;
        let title = validate_required_string(&request.title, "title").log_with(LOG_LABEL)?;

        if self.products.find_by_title(&title).await.log_with(LOG_LABEL)?.is_some() {
            return Err(AppError::ConflictError("Product already exists".to_string()))
                .log_with(LOG_LABEL);
        }

        let description = request.description.trim().to_string();
        let product = Product::new(title, description, request.price, request.quantity);
        let created = self.products.insert(product).await.log_with(LOG_LABEL)?;

        log::info!("🛒 상품 등록: {}", created.title);
        Ok(ProductResponse::from(created))
    }

    pub async fn get_product_by_id(&self, id: &str) -> AppResult<ProductResponse> {
        self.find_product(id).await.map(ProductResponse::from)
    }

    pub async fn list_products(&self) -> AppResult<Vec<ProductResponse>> {
        let products = self.products.find_all().await.log_with(LOG_LABEL)?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// 요청에 값이 있는 필드만 덮어쓴 뒤 문서 전체를 교체합니다.
    pub async fn update_product(&self, id: &str, request: UpdateProductRequest) -> AppResult<ProductResponse> {
        request.validate().map_err(AppError::from).log_with(LOG_LABEL)?;

        let mut product = self.find_product(id).await?;

        if let Some(title) = request.title {
            let title = validate_required_string(&title, "title").log_with(LOG_LABEL)?;

            if title != product.title {
                let owner = self.products.find_by_title(&title).await.log_with(LOG_LABEL)?;
                if owner.is_some_and(|other| other.id != product.id) {
                    return Err(AppError::ConflictError("Product already exists".to_string()))
                        .log_with(LOG_LABEL);
                }
            }
            product.title = title;
        }
        if let Some(description) = request.description {
            product.description = description.trim().to_string();
        }
        if let Some(price) = request.price {
            product.price = price;
        }
        if let Some(quantity) = request.quantity {
            product.quantity = quantity;
        }
        product.updated_at = DateTime::now();

        let replaced = self.products.replace(&product).await.log_with(LOG_LABEL)?;
        if !replaced {
            return Err(Self::not_found(id)).log_with(LOG_LABEL);
        }

        Ok(ProductResponse::from(product))
    }

    /// 삭제된 상품을 반환합니다.
    pub async fn delete_product(&self, id: &str) -> AppResult<ProductResponse> {
        let object_id = parse_object_id(id, "product").log_with(LOG_LABEL)?;

        let deleted = self.products
            .delete(&object_id)
            .await
            .log_with(LOG_LABEL)?
            .ok_or_else(|| Self::not_found(id))
            .log_with(LOG_LABEL)?;

        log::info!("🗑️ 상품 삭제: {}", deleted.title);
        Ok(ProductResponse::from(deleted))
    }

    async fn find_product(&self, id: &str) -> AppResult<Product> {
        let object_id = parse_object_id(id, "product").log_with(LOG_LABEL)?;

        self.products
            .find_by_id(&object_id)
            .await
            .log_with(LOG_LABEL)?
            .ok_or_else(|| Self::not_found(id))
            .log_with(LOG_LABEL)
    }

    fn not_found(id: &str) -> AppError {
        AppError::NotFound(format!("Product with ID {} not found", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use mongodb::bson::oid::ObjectId;
    use crate::repositories::memory::MemoryProductStore;

    fn service() -> (Arc<MemoryProductStore>, ProductService) {
        let (store, handle) = MemoryProductStore::handle();
        (store, ProductService::with_store(handle))
    }

    fn create_request(title: &str) -> CreateProductRequest {
        CreateProductRequest {
            title: title.to_string(),
            description: "Mechanical keyboard".to_string(),
            price: 49.5,
            quantity: 10,
        }
    }

    #[actix_web::test]
    async fn test_create_product_trims_title() {
        let (_, service) = service();

        let created = service.create_product(create_request("  Keyboard  ")).await.unwrap();

        assert_eq!(created.title, "Keyboard");
        assert!(!created.id.is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_title_conflicts_without_new_document() {
        let (store, service) = service();
        service.create_product(create_request("Keyboard")).await.unwrap();

        let result = service.create_product(create_request(" Keyboard ")).await;

        assert!(matches!(result, Err(AppError::ConflictError(ref m)) if m == "Product already exists"));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_description_is_trimmed_on_create_and_update() {
        let (_, service) = service();
        let mut request = create_request("Keyboard");
        request.description = "  Mechanical keyboard \n".to_string();

        let created = service.create_product(request).await.unwrap();
        assert_eq!(created.description, "Mechanical keyboard");

        let update = UpdateProductRequest {
            description: Some("\t Wireless ".to_string()),
            ..Default::default()
        };
        let updated = service.update_product(&created.id, update).await.unwrap();
        assert_eq!(updated.description, "Wireless");
    }

    #[actix_web::test]
    async fn test_get_missing_product_is_not_found() {
        let (_, service) = service();

        let result = service.get_product_by_id(&ObjectId::new().to_hex()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_validation_error() {
        let (_, service) = service();

        let result = service.get_product_by_id("not-an-object-id").await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_update_then_get_reflects_new_values() {
        let (_, service) = service();
        let created = service.create_product(create_request("Keyboard")).await.unwrap();

        let update = UpdateProductRequest {
            title: Some("Wireless Keyboard".to_string()),
            price: Some(59.0),
            ..Default::default()
        };
        service.update_product(&created.id, update).await.unwrap();

        let fetched = service.get_product_by_id(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Wireless Keyboard");
        assert_eq!(fetched.price, 59.0);
        assert_eq!(fetched.quantity, 10);
        assert_eq!(fetched.description, "Mechanical keyboard");
    }

    #[actix_web::test]
    async fn test_update_to_existing_title_conflicts() {
        let (_, service) = service();
        service.create_product(create_request("Keyboard")).await.unwrap();
        let mouse = service.create_product(create_request("Mouse")).await.unwrap();

        let update = UpdateProductRequest {
            title: Some("Keyboard".to_string()),
            ..Default::default()
        };
        let result = service.update_product(&mouse.id, update).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_missing_product_is_not_found() {
        let (_, service) = service();

        let result = service
            .update_product(&ObjectId::new().to_hex(), UpdateProductRequest::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let (_, service) = service();
        let created = service.create_product(create_request("Keyboard")).await.unwrap();

        let deleted = service.delete_product(&created.id).await.unwrap();
        assert_eq!(deleted.title, "Keyboard");

        let result = service.get_product_by_id(&created.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let again = service.delete_product(&created.id).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_products() {
        let (_, service) = service();
        service.create_product(create_request("Keyboard")).await.unwrap();
        service.create_product(create_request("Mouse")).await.unwrap();

        let titles: Vec<String> = service
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["Keyboard", "Mouse"]);
    }

    #[actix_web::test]
    async fn test_invalid_create_request_is_rejected() {
        let (store, service) = service();
        let mut request = create_request("Keyboard");
        request.price = -1.0;

        let result = service.create_product(request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.len(), 0);
    }
}
