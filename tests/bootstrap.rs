mod common;

use std::fs;

#[tokio::test]
async fn bootstrap_seeds_exactly_one_admin_and_is_idempotent() {
    let path = common::temp_db_path("bootstrap");

    let first = common::state_at(&path).await;
    drop(first);

    // second run against the same file must not re-seed or raise
    let second = common::state_at(&path).await;

    let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers WHERE username = ?")
        .bind("admin")
        .fetch_one(&*second)
        .await
        .expect("query failed");
    assert_eq!(admins, 1);

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
        .fetch_one(&*second)
        .await
        .expect("query failed");
    assert_eq!(total, 1);

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn seeded_password_is_hashed_not_plaintext() {
    let path = common::temp_db_path("bootstrap-hash");
    let state = common::state_at(&path).await;

    let stored: String = sqlx::query_scalar("SELECT password FROM teachers WHERE username = ?")
        .bind("admin")
        .fetch_one(&*state)
        .await
        .expect("query failed");

    assert_ne!(stored, "admin123");
    assert!(stored.starts_with("$2"), "not a bcrypt hash: {stored}");

    let _ = fs::remove_file(&path);
}
