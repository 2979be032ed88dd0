//! Repository-level tests for match pair uniqueness and lifecycle
//! transitions.

use arena_core::match_state::{STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};
use arena_db::models::matches::NewMatch;
use arena_db::models::user::CreateUser;
use arena_db::repositories::{MatchRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
    .id
}

fn new_match(user_a: i64, user_b: i64, score: i32) -> NewMatch {
    NewMatch {
        user_a_id: user_a,
        user_b_id: user_b,
        compatibility_score: Some(score),
        ai_reasoning: Some("test reasoning".to_string()),
        strengths: Some("test strengths".to_string()),
        risks: Some("test risks".to_string()),
    }
}

fn assert_active_pair_violation(err: sqlx::Error) {
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(
                db_err.constraint(),
                Some(arena_db::repositories::match_repo::ACTIVE_PAIR_CONSTRAINT)
            );
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Pair uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_pending_match_for_pair_is_blocked(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap();
    let err = MatchRepo::create(&pool, &new_match(a, b, 81)).await.unwrap_err();
    assert_active_pair_violation(err);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reversed_pair_is_still_the_same_pair(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap();
    // The other user discovering the same pair must hit the same index.
    let err = MatchRepo::create(&pool, &new_match(b, a, 80)).await.unwrap_err();
    assert_active_pair_violation(err);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn accepted_match_still_blocks_regeneration(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    let m = MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap();
    MatchRepo::transition_from_pending(&pool, m.id, STATUS_ACCEPTED)
        .await
        .unwrap()
        .expect("transition should apply");

    let err = MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap_err();
    assert_active_pair_violation(err);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_pair_can_be_regenerated(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    let m = MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap();
    MatchRepo::transition_from_pending(&pool, m.id, STATUS_REJECTED)
        .await
        .unwrap()
        .expect("transition should apply");

    // Rejected rows are history and no longer block the pair.
    let regenerated = MatchRepo::create(&pool, &new_match(b, a, 65)).await.unwrap();
    assert_eq!(regenerated.status, STATUS_PENDING);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn has_active_for_pair_ignores_order_and_rejected(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    assert!(!MatchRepo::has_active_for_pair(&pool, a, b).await.unwrap());

    let m = MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap();
    assert!(MatchRepo::has_active_for_pair(&pool, a, b).await.unwrap());
    assert!(MatchRepo::has_active_for_pair(&pool, b, a).await.unwrap());

    MatchRepo::transition_from_pending(&pool, m.id, STATUS_REJECTED)
        .await
        .unwrap();
    assert!(!MatchRepo::has_active_for_pair(&pool, a, b).await.unwrap());
}

// ---------------------------------------------------------------------------
// Lifecycle transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn transition_applies_once_and_only_once(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;
    let m = MatchRepo::create(&pool, &new_match(a, b, 80)).await.unwrap();

    let accepted = MatchRepo::transition_from_pending(&pool, m.id, STATUS_ACCEPTED)
        .await
        .unwrap()
        .expect("first transition should win");
    assert_eq!(accepted.status, STATUS_ACCEPTED);

    // A conflicting second response loses: the row is no longer pending.
    let second = MatchRepo::transition_from_pending(&pool, m.id, STATUS_REJECTED)
        .await
        .unwrap();
    assert!(second.is_none());

    let current = MatchRepo::find_by_id(&pool, m.id).await.unwrap().unwrap();
    assert_eq!(current.status, STATUS_ACCEPTED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn transition_preserves_score_and_rationale(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;
    let m = MatchRepo::create(&pool, &new_match(a, b, 73)).await.unwrap();

    let updated = MatchRepo::transition_from_pending(&pool, m.id, STATUS_ACCEPTED)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.compatibility_score, Some(73));
    assert_eq!(updated.ai_reasoning.as_deref(), Some("test reasoning"));
    assert_eq!(updated.strengths.as_deref(), Some("test strengths"));
    assert_eq!(updated.risks.as_deref(), Some("test risks"));
}

// ---------------------------------------------------------------------------
// Recommendation ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn recommended_orders_pending_by_score_then_accepted(pool: PgPool) {
    let me = seed_user(&pool, "me@example.com").await;
    let u1 = seed_user(&pool, "u1@example.com").await;
    let u2 = seed_user(&pool, "u2@example.com").await;
    let u3 = seed_user(&pool, "u3@example.com").await;
    let u4 = seed_user(&pool, "u4@example.com").await;

    let low = MatchRepo::create(&pool, &new_match(me, u1, 40)).await.unwrap();
    let high = MatchRepo::create(&pool, &new_match(me, u2, 90)).await.unwrap();
    let accepted = MatchRepo::create(&pool, &new_match(u3, me, 70)).await.unwrap();
    MatchRepo::transition_from_pending(&pool, accepted.id, STATUS_ACCEPTED)
        .await
        .unwrap();
    let rejected = MatchRepo::create(&pool, &new_match(me, u4, 99)).await.unwrap();
    MatchRepo::transition_from_pending(&pool, rejected.id, STATUS_REJECTED)
        .await
        .unwrap();

    let recommended = MatchRepo::list_recommended(&pool, me).await.unwrap();
    let ids: Vec<i64> = recommended.iter().map(|m| m.id).collect();
    // Pending sorted by score descending, then accepted; rejected excluded.
    assert_eq!(ids, vec![high.id, low.id, accepted.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recommended_includes_matches_where_user_is_candidate(pool: PgPool) {
    let initiator = seed_user(&pool, "init@example.com").await;
    let candidate = seed_user(&pool, "cand@example.com").await;
    MatchRepo::create(&pool, &new_match(initiator, candidate, 55))
        .await
        .unwrap();

    let seen_by_candidate = MatchRepo::list_recommended(&pool, candidate).await.unwrap();
    assert_eq!(seen_by_candidate.len(), 1);
    assert_eq!(seen_by_candidate[0].user_b_id, candidate);
}
