use super::*;

/// Tests that a goal created with only a title receives the defaults.
///
/// Expected: medium priority, not started, zero progress, due at the cycle's end
#[tokio::test]
async fn stores_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, _giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await?;

    let goal = GoalRepository::new(db)
        .create(NewGoal::with_defaults(
            params(&feedback.id, "Mentor a new hire"),
            cycle.end_date,
        ))
        .await?;

    assert_eq!(goal.feedback_id, feedback.id);
    assert_eq!(goal.title, "Mentor a new hire");
    assert_eq!(goal.priority, "medium");
    assert_eq!(goal.status, "not_started");
    assert_eq!(goal.progress, 0);
    assert_eq!(goal.target_date, Some(cycle.end_date));

    Ok(())
}

/// Tests that a goal created as completed records full progress.
///
/// Expected: progress 100 regardless of the requested value
#[tokio::test]
async fn completed_goal_has_full_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, _giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await?;

    let mut params = params(&feedback.id, "Ship the migration");
    params.status = Some(GoalStatus::Completed);
    params.progress = Some(40);

    let goal = GoalRepository::new(db)
        .create(NewGoal::with_defaults(params, cycle.end_date))
        .await?;

    assert_eq!(goal.status, "completed");
    assert_eq!(goal.progress, 100);

    Ok(())
}
