//! 订单全流程集成测试
//!
//! 使用内存数据库跑完整的下单 → 厨房 → 上菜链路，
//! 以及并发状态更新的冲突处理。

use rust_decimal::Decimal;

use ladle_server::db::DbService;
use ladle_server::db::models::{MenuCategory, MenuItem, MenuItemCreate};
use ladle_server::db::repository::MenuItemRepository;
use ladle_server::orders::OrderLifecycle;
use ladle_server::utils::AppError;
use shared::client::{CreateOrderLine, CreateOrderRequest};
use shared::order::OrderStatus;
use shared::role::Role;

async fn seed_item(
    repo: &MenuItemRepository,
    name: &str,
    price: &str,
    category: MenuCategory,
) -> MenuItem {
    repo.create(MenuItemCreate {
        name: name.to_string(),
        description: String::new(),
        price: price.parse().unwrap(),
        category,
        prep_minutes: 10,
        allergens: Vec::new(),
        image: None,
    })
    .await
    .expect("seed menu item")
}

fn line(item: &MenuItem, quantity: i32) -> CreateOrderLine {
    CreateOrderLine {
        menu_item: item.id.as_ref().unwrap().to_string(),
        quantity,
        note: None,
    }
}

/// 完整服务流程：下单 25 美元，厨房备餐、出餐，服务员上菜。
#[tokio::test]
async fn full_service_flow() {
    let db = DbService::memory().await.expect("open db");
    let menu = MenuItemRepository::new(db.db.clone());
    let lifecycle = OrderLifecycle::new(db.db.clone());

    let burger = seed_item(&menu, "Burger", "10.00", MenuCategory::Main).await;
    let fries = seed_item(&menu, "Fries", "5.00", MenuCategory::Side).await;

    let created = lifecycle
        .create(
            CreateOrderRequest {
                table_number: 5,
                lines: vec![line(&burger, 2), line(&fries, 1)],
                customer_name: None,
            },
            None,
        )
        .await
        .expect("create order");

    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(created.total, Decimal::new(2500, 2));
    let order_id = created.id.as_ref().unwrap().to_string();

    // 厨房接单
    let order = lifecycle
        .transition(&order_id, OrderStatus::Preparing, Role::Chef)
        .await
        .expect("chef starts preparing");
    assert_eq!(order.status, OrderStatus::Preparing);

    // 备餐中的订单不能再取消
    let err = lifecycle
        .transition(&order_id, OrderStatus::Cancelled, Role::Waiter)
        .await
        .expect_err("cancel after preparing must fail");
    assert!(matches!(err, AppError::IllegalTransition(_)), "{err:?}");

    let order = lifecycle
        .transition(&order_id, OrderStatus::Ready, Role::Chef)
        .await
        .expect("chef marks ready");
    assert_eq!(order.status, OrderStatus::Ready);

    let order = lifecycle
        .transition(&order_id, OrderStatus::Served, Role::Waiter)
        .await
        .expect("waiter serves");
    assert_eq!(order.status, OrderStatus::Served);

    // 金额快照全程不变
    assert_eq!(order.total, Decimal::new(2500, 2));
    assert_eq!(order.lines.len(), 2);

    // 列表查询能看到这份已上菜的订单
    let all = lifecycle.repository().find_all().await.expect("list orders");
    assert_eq!(all.len(), 1);
    let served = lifecycle
        .repository()
        .find_by_status(OrderStatus::Served)
        .await
        .expect("list by status");
    assert_eq!(served.len(), 1);
    assert!(
        lifecycle
            .repository()
            .find_by_status(OrderStatus::Pending)
            .await
            .expect("list by status")
            .is_empty()
    );
}

/// 并发更新同一订单：恰好一方成功，另一方拿到冲突错误。
#[tokio::test]
async fn concurrent_transition_single_winner() {
    let db = DbService::memory().await.expect("open db");
    let menu = MenuItemRepository::new(db.db.clone());
    let lifecycle = OrderLifecycle::new(db.db.clone());

    let soup = seed_item(&menu, "Soup", "8.00", MenuCategory::Appetizer).await;
    let created = lifecycle
        .create(
            CreateOrderRequest {
                table_number: 2,
                lines: vec![line(&soup, 1)],
                customer_name: None,
            },
            None,
        )
        .await
        .expect("create order");
    let order_id = created.id.as_ref().unwrap().to_string();

    // 厨房开始备餐的同时服务员尝试取消
    let (prepare, cancel) = tokio::join!(
        lifecycle.transition(&order_id, OrderStatus::Preparing, Role::Chef),
        lifecycle.transition(&order_id, OrderStatus::Cancelled, Role::Waiter),
    );

    let wins = [prepare.is_ok(), cancel.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(wins, 1, "exactly one concurrent transition may commit");

    let loser = if prepare.is_ok() { cancel } else { prepare };
    let err = loser.expect_err("loser must see a conflict");
    assert!(
        matches!(
            err,
            AppError::StaleState(_) | AppError::IllegalTransition(_)
        ),
        "{err:?}"
    );

    // 落库状态是胜者写入的那一个
    let stored = lifecycle
        .repository()
        .find_by_id(&order_id)
        .await
        .expect("fetch")
        .expect("order exists");
    assert!(matches!(
        stored.status,
        OrderStatus::Preparing | OrderStatus::Cancelled
    ));
}

/// 下架商品不可下单。
#[tokio::test]
async fn unavailable_item_rejected() {
    let db = DbService::memory().await.expect("open db");
    let menu = MenuItemRepository::new(db.db.clone());
    let lifecycle = OrderLifecycle::new(db.db.clone());

    let special = seed_item(&menu, "Soup of the Day", "6.00", MenuCategory::Appetizer).await;
    let id = special.id.as_ref().unwrap().to_string();
    menu.set_availability(&id, false).await.expect("set unavailable");

    let err = lifecycle
        .create(
            CreateOrderRequest {
                table_number: 1,
                lines: vec![line(&special, 1)],
                customer_name: None,
            },
            None,
        )
        .await
        .expect_err("unavailable item must be rejected");
    assert!(matches!(err, AppError::Validation(_)), "{err:?}");
}

/// 条件更新：前置状态不匹配时不写入，返回 None。
#[tokio::test]
async fn conditional_update_misses_on_wrong_from() {
    let db = DbService::memory().await.expect("open db");
    let menu = MenuItemRepository::new(db.db.clone());
    let lifecycle = OrderLifecycle::new(db.db.clone());

    let tea = seed_item(&menu, "Tea", "3.00", MenuCategory::Drink).await;
    let created = lifecycle
        .create(
            CreateOrderRequest {
                table_number: 7,
                lines: vec![line(&tea, 1)],
                customer_name: None,
            },
            None,
        )
        .await
        .expect("create order");
    let id = created.id.clone().unwrap();

    // 订单仍是 PENDING，以 PREPARING 为前置条件的写入应落空
    let missed = lifecycle
        .repository()
        .update_status_if(&id, OrderStatus::Preparing, OrderStatus::Ready)
        .await
        .expect("query ok");
    assert!(missed.is_none());

    let stored = lifecycle
        .repository()
        .find_by_id(&id.to_string())
        .await
        .expect("fetch")
        .expect("order exists");
    assert_eq!(stored.status, OrderStatus::Pending);
}
