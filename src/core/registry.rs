//! # 서비스 레지스트리
//!
//! `#[service]`, `#[repository]` 매크로가 `inventory`로 제출한 등록 정보를 모아
//! 타입 기반으로 싱글톤 인스턴스를 찾아주는 의존성 주입 컨테이너입니다.
//!
//! ## 인스턴스 해석 규칙
//!
//! 1. `ServiceLocator::set()`으로 직접 등록된 인스턴스 (예: `Database`, `RedisClient`)
//! 2. 타입 이름이 `...Repository`로 끝나면 리포지토리 등록 정보에서 검색
//! 3. 타입 이름이 `...Service`로 끝나면 서비스 등록 정보에서 검색
//!
//! 등록 이름은 매크로의 `name` 인자에서 `_service`/`_repository` 접미사를 뗀 값입니다.
//! 예를 들어 `#[service(name = "token")]`은 `TokenService` 타입으로 조회됩니다.
//!
//! ## 초기화 순서
//!
//! ```text
//! main()
//!   ├─ ServiceLocator::set(Arc<Database>)
//!   ├─ ServiceLocator::set(Arc<RedisClient>)
//!   └─ ServiceLocator::initialize_all()
//!        ├─ Step 1: 모든 Repository 생성
//!        └─ Step 2: 모든 Service 생성
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;

/// 서비스 계층 컴포넌트가 구현하는 trait (매크로가 자동 구현)
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 계층 컴포넌트가 구현하는 trait (매크로가 자동 구현)
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 제출하는 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 제출하는 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    debug!("Service cache: {} entries loaded", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    debug!("Repository cache: {} entries loaded", cache.len());
    cache
});

fn extract_clean_name_static(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 기반 싱글톤 저장소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입에 해당하는 싱글톤 인스턴스를 반환합니다.
    ///
    /// 아직 생성되지 않은 서비스/리포지토리는 등록 정보의 생성자로 만들어 캐시합니다.
    ///
    /// # Panics
    ///
    /// * 순환 의존성이 감지된 경우
    /// * 등록되지 않은 타입을 요청한 경우
    ///
    /// 두 경우 모두 부트스트랩 단계의 배선 오류이므로 즉시 실패합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자가 다른 의존성을 조회할 수 있으므로 잠금 없이 생성합니다.
        let created = Self::construct(type_name);

        LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner()).remove(&type_id);

        let boxed = match created {
            Some(boxed) => boxed,
            None => panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            ),
        };

        let instance = match boxed.downcast::<Arc<T>>() {
            Ok(arc_instance) => *arc_instance,
            Err(_) => panic!("Type mismatch in ServiceLocator for {}", type_name),
        };

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().unwrap_or(instance)
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&type_id)
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct(type_name: &str) -> Option<Box<dyn Any + Send + Sync>> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            return REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| (registration.constructor)());
        }

        if let Some(entity) = clean_type_name.strip_suffix("Service") {
            return SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| (registration.constructor)());
        }

        None
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 외부에서 생성한 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 만들 수 없는 인프라 컴포넌트(`Database`, `RedisClient`)에 사용됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        info!("→ Step 1: Creating Repository instances");
        for registration in repo_registrations {
            let _instance = (registration.constructor)();
            info!("   ├─ {}: ✓ Created", registration.name);
        }
        info!("✓ Step 1: Repository instances created ({} items)", repo_count);

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        info!("→ Step 2: Creating Service instances");
        for registration in service_registrations {
            let _instance = (registration.constructor)();
            info!("   ├─ {}: ✓ Created", registration.name);
        }
        info!("✓ Step 2: Service instances created ({} items)", service_count);

        info!(
            "🎉 SERVICE REGISTRY INITIALIZED - 📦 Repositories: {}, 🔧 Services: {}",
            repo_count, service_count
        );

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
