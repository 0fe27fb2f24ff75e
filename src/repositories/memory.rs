//! 테스트용 메모리 저장소
//!
//! MongoDB 리포지토리와 같은 store trait을 구현하며, 유니크 제약도 동일하게 흉내 냅니다.

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::domain::entities::{
    carts::cart::Cart,
    orders::order::Order,
    products::product::Product,
    users::user::User,
};
use crate::errors::{AppError, AppResult};
use crate::repositories::stores::{
    CartStore, CartStoreHandle, OrderStore, OrderStoreHandle, ProductStore, ProductStoreHandle,
    UserStore, UserStoreHandle,
};

#[derive(Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn handle() -> (Arc<Self>, ProductStoreHandle) {
        let store = Arc::new(Self::default());
        (store.clone(), ProductStoreHandle::new(store))
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.title == title).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn insert(&self, mut product: Product) -> AppResult<Product> {
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.title == product.title) {
            return Err(AppError::ConflictError("Product already exists".to_string()));
        }

        product.id = Some(ObjectId::new());
        products.push(product.clone());
        Ok(product)
    }

    async fn replace(&self, product: &Product) -> AppResult<bool> {
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.title == product.title && p.id != product.id) {
            return Err(AppError::ConflictError("Product already exists".to_string()));
        }

        match products.iter_mut().find(|p| p.id == product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<Product>> {
        let mut products = self.products.lock().unwrap();
        let position = products.iter().position(|p| p.id.as_ref() == Some(id));
        Ok(position.map(|index| products.remove(index)))
    }
}

#[derive(Default)]
pub struct MemoryCartStore {
    carts: Mutex<Vec<Cart>>,
}

impl MemoryCartStore {
    pub fn handle() -> (Arc<Self>, CartStoreHandle) {
        let store = Arc::new(Self::default());
        (store.clone(), CartStoreHandle::new(store))
    }

    pub fn len(&self) -> usize {
        self.carts.lock().unwrap().len()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Option<Cart>> {
        let carts = self.carts.lock().unwrap();
        Ok(carts.iter().find(|c| &c.user_id == user_id).cloned())
    }

    async fn save(&self, mut cart: Cart) -> AppResult<Cart> {
        let mut carts = self.carts.lock().unwrap();
        match carts.iter_mut().find(|c| c.user_id == cart.user_id) {
            Some(stored) => {
                cart.id = stored.id;
                *stored = cart.clone();
            }
            None => {
                cart.id = Some(ObjectId::new());
                carts.push(cart.clone());
            }
        }
        Ok(cart)
    }
}

#[derive(Default)]
pub struct MemoryOrderStore {
    orders: Mutex<Vec<Order>>,
}

impl MemoryOrderStore {
    pub fn handle() -> (Arc<Self>, OrderStoreHandle) {
        let store = Arc::new(Self::default());
        (store.clone(), OrderStoreHandle::new(store))
    }

    pub fn len(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, mut order: Order) -> AppResult<Order> {
        order.id = Some(ObjectId::new());
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn handle() -> (Arc<Self>, UserStoreHandle) {
        let store = Arc::new(Self::default());
        (store.clone(), UserStoreHandle::new(store))
    }

    pub fn get(&self, id: &ObjectId) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.id.as_ref() == Some(id)).cloned()
    }

    fn update<F: FnOnce(&mut User)>(&self, id: &ObjectId, apply: F) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id.as_ref() == Some(id))
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        apply(user);
        user.updated_at = DateTime::now();
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn record_login(&self, id: &ObjectId, refresh_token_hash: &str) -> AppResult<()> {
        self.update(id, |user| {
            user.refresh_token_hash = Some(refresh_token_hash.to_string());
            user.last_login_at = Some(DateTime::now());
        })
    }

    async fn set_refresh_token_hash(&self, id: &ObjectId, refresh_token_hash: Option<&str>) -> AppResult<()> {
        self.update(id, |user| {
            user.refresh_token_hash = refresh_token_hash.map(str::to_string);
        })
    }
}
