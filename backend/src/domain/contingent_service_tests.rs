//! Tests for the contingent service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use pagination::Pager;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{MockContingentRepository, MockContingentWriteHook};
use crate::domain::{
    Attributes, ContingentName, ContingentParts, ContingentPayload, ErrorCode, UserId,
};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn caller() -> UserId {
    UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid user id")
}

fn payload(name: Option<&str>) -> ContingentPayload {
    let mut attributes = Attributes::new();
    attributes.insert("leader".to_owned(), json!("Kim"));
    ContingentPayload {
        name: name.map(str::to_owned),
        attributes,
    }
}

fn stored(id: i64, draft: &ContingentDraft, created_by: UserId) -> Contingent {
    Contingent::from_parts(ContingentParts {
        id: ContingentId::new(id),
        name: draft.name.clone(),
        attributes: draft.attributes.clone(),
        created_at: fixture_timestamp(),
        created_by,
    })
}

fn service(
    repo: MockContingentRepository,
    hook: MockContingentWriteHook,
) -> ContingentService<MockContingentRepository> {
    ContingentService::new(
        Arc::new(repo),
        Arc::new(hook),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
}

fn silent_hook() -> MockContingentWriteHook {
    let mut hook = MockContingentWriteHook::new();
    hook.expect_contingents_changed().times(0);
    hook
}

fn expect_hook(write: ContingentWrite) -> MockContingentWriteHook {
    let mut hook = MockContingentWriteHook::new();
    hook.expect_contingents_changed()
        .withf(move |observed| *observed == write)
        .times(1)
        .return_const(());
    hook
}

#[rstest]
#[tokio::test]
async fn create_stamps_clock_and_caller(caller: UserId) {
    let mut repo = MockContingentRepository::new();
    repo.expect_insert()
        .withf(move |record| {
            record.created_at == fixture_timestamp()
                && record.created_by == caller
                && record.draft.name.as_str() == "Alpha"
        })
        .times(1)
        .returning(|record| Ok(stored(17, &record.draft, record.created_by)));

    let outcome = service(repo, expect_hook(ContingentWrite::Created(ContingentId::new(17))))
        .create(CreateContingentRequest {
            payload: payload(Some("Alpha")),
            created_by: caller,
        })
        .await
        .expect("create succeeds");

    let CommandOutcome::Completed(created) = outcome else {
        panic!("expected completed outcome, got {outcome:?}");
    };
    assert_eq!(created.id(), ContingentId::new(17));
    assert_eq!(created.created_at(), fixture_timestamp());
    assert_eq!(created.attributes().get("leader"), Some(&json!("Kim")));
}

#[rstest]
#[case(None, "name must not be null")]
#[case(Some(" "), "name must not be blank")]
#[tokio::test]
async fn create_rejects_invalid_payload_without_touching_store(
    caller: UserId,
    #[case] name: Option<&'static str>,
    #[case] message: &str,
) {
    let mut repo = MockContingentRepository::new();
    repo.expect_insert().times(0);

    let outcome = service(repo, silent_hook())
        .create(CreateContingentRequest {
            payload: payload(name),
            created_by: caller,
        })
        .await
        .expect("rejection is not a failure");

    let CommandOutcome::Rejected(violation) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(violation.message(), message);
}

#[rstest]
#[case(
    ContingentRepositoryError::connection("refused"),
    ErrorCode::ServiceUnavailable
)]
#[case(ContingentRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_repository_failures(
    caller: UserId,
    #[case] failure: ContingentRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockContingentRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(repo, silent_hook())
        .create(CreateContingentRequest {
            payload: payload(Some("Alpha")),
            created_by: caller,
        })
        .await
        .expect_err("repository failure surfaces");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn update_targets_path_id(caller: UserId) {
    let mut repo = MockContingentRepository::new();
    repo.expect_update()
        .withf(|id, changes| *id == ContingentId::new(5) && changes.name.as_str() == "Beta")
        .times(1)
        .returning(move |id, changes| Ok(Some(stored(id.get(), changes, caller))));

    let outcome = service(repo, expect_hook(ContingentWrite::Updated(ContingentId::new(5))))
        .update(UpdateContingentRequest {
            id: ContingentId::new(5),
            payload: payload(Some("Beta")),
        })
        .await
        .expect("update succeeds");

    let CommandOutcome::Completed(updated) = outcome else {
        panic!("expected completed outcome, got {outcome:?}");
    };
    assert_eq!(updated.id(), ContingentId::new(5));
    assert_eq!(updated.name(), &ContingentName::new("Beta").expect("valid name"));
}

#[rstest]
#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let mut repo = MockContingentRepository::new();
    repo.expect_update().times(1).returning(|_, _| Ok(None));

    let outcome = service(repo, silent_hook())
        .update(UpdateContingentRequest {
            id: ContingentId::new(42),
            payload: payload(Some("Beta")),
        })
        .await
        .expect("missing record is not a failure");

    assert_eq!(outcome, CommandOutcome::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_validates_before_writing() {
    let mut repo = MockContingentRepository::new();
    repo.expect_update().times(0);

    let outcome = service(repo, silent_hook())
        .update(UpdateContingentRequest {
            id: ContingentId::new(5),
            payload: payload(None),
        })
        .await
        .expect("rejection is not a failure");

    let CommandOutcome::Rejected(violation) = outcome else {
        panic!("expected a rejection, got {outcome:?}");
    };
    assert_eq!(violation.field(), "name");
    assert_eq!(violation.message(), "name must not be null");
}

#[rstest]
#[case(true, DeleteOutcome::Deleted(ContingentId::new(42)))]
#[case(false, DeleteOutcome::NotFound)]
#[tokio::test]
async fn delete_reports_whether_a_row_existed(
    #[case] existed: bool,
    #[case] expected: DeleteOutcome,
) {
    let mut repo = MockContingentRepository::new();
    repo.expect_delete()
        .withf(|id| *id == ContingentId::new(42))
        .times(1)
        .return_once(move |_| Ok(existed));
    let hook = if existed {
        expect_hook(ContingentWrite::Deleted(ContingentId::new(42)))
    } else {
        silent_hook()
    };

    let outcome = service(repo, hook)
        .delete(ContingentId::new(42))
        .await
        .expect("delete succeeds");

    assert_eq!(outcome, expected);
}

#[rstest]
#[tokio::test]
async fn page_counts_with_the_same_filter(caller: UserId) {
    let filter = NameFilter::new(Some("Al".to_owned()));
    let draft = ContingentDraft {
        name: ContingentName::new("Alpha").expect("valid name"),
        attributes: Attributes::new(),
    };
    let row = stored(3, &draft, caller);

    let mut repo = MockContingentRepository::new();
    let expected_filter = filter.clone();
    repo.expect_page()
        .withf(move |observed, pager| *observed == expected_filter && pager.size() == 2)
        .times(1)
        .return_once(move |_, _| Ok(vec![row]));
    let expected_filter = filter.clone();
    repo.expect_count()
        .withf(move |observed| *observed == expected_filter)
        .times(1)
        .returning(|_| Ok(7));

    let page = service(repo, silent_hook())
        .page(PageContingentsRequest {
            filter,
            pager: Pager::try_new(1, 2).expect("valid pager"),
        })
        .await
        .expect("page succeeds");

    assert_eq!(page.total, 7);
    assert_eq!(page.items.len(), 1);
}

#[rstest]
#[tokio::test]
async fn get_returns_none_for_missing_record() {
    let mut repo = MockContingentRepository::new();
    repo.expect_find_by_id().times(1).returning(|_| Ok(None));

    let found = service(repo, silent_hook())
        .get(ContingentId::new(1))
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn list_maps_connection_failure_to_service_unavailable() {
    let mut repo = MockContingentRepository::new();
    repo.expect_list()
        .times(1)
        .returning(|_| Err(ContingentRepositoryError::connection("down")));

    let error = service(repo, silent_hook())
        .list(NameFilter::all())
        .await
        .expect_err("list fails");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.message().contains("down"));
}
