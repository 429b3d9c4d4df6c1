//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID string for use as a primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates an organization, an active cycle in it, and two employees.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((cycle, giver, receiver))` - The cycle and the two users, both in the cycle's
///   organization
/// - `Err(DbErr)` - Database error during creation
pub async fn create_cycle_with_participants(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::feedback_cycle::Model,
        entity::user::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let org = crate::factory::organization::create_organization(db).await?;
    let cycle = crate::factory::cycle::create_cycle(db, &org.id).await?;
    let giver = crate::factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    let receiver = crate::factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;

    Ok((cycle, giver, receiver))
}

/// Creates a feedback record with every row it depends on.
///
/// This is a convenience method that creates:
/// 1. Organization
/// 2. Active feedback cycle
/// 3. Giver and receiver users
/// 4. Feedback (peer review, draft) with its content row
///
/// # Returns
/// - `Ok((cycle, giver, receiver, feedback))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_feedback_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::feedback_cycle::Model,
        entity::user::Model,
        entity::user::Model,
        entity::feedback::Model,
    ),
    DbErr,
> {
    let (cycle, giver, receiver) = create_cycle_with_participants(db).await?;
    let feedback =
        crate::factory::feedback::create_feedback(db, &cycle.id, &giver.id, &receiver.id).await?;

    Ok((cycle, giver, receiver, feedback))
}
