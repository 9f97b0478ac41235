//! End-to-end pipeline tests: file bytes through ingestion, partitioning,
//! and submission against a real SQLite store.

use roster_import::{IngestError, SubmitError, parse, submit_valid};
use roster_model::{CandidateUser, Role};
use roster_persistence::backends::sqlite::SqliteStore;
use roster_persistence::core::UserStore;

const HEADER: &str = "First Name,Last Name,Contact,Email,Address,Password";

fn store() -> SqliteStore {
    let store = SqliteStore::in_memory().unwrap();
    store.init_schema().unwrap();
    store
}

#[tokio::test]
async fn test_scenario_all_valid() {
    let store = store();
    let file = format!(
        "{HEADER}\n\
         Ada,Lovelace,9876543210,ada@gmail.com,London,Engine@42\n\
         Grace,Hopper,9876543211,grace@gmail.com,NYC,Cobol#77x"
    );

    let partitioned = parse(file.as_bytes()).unwrap();
    let report = submit_valid(&store, partitioned, Role::Admin).await.unwrap();

    assert_eq!(report.successful.len(), 2);
    assert_eq!(report.failed.len(), 0);
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.success, 2);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_scenario_mixed_with_duplicate() {
    let store = store();
    // "dup@gmail.com" already exists, so it is valid in isolation but
    // conflicts at the store.
    store
        .create(
            CandidateUser::new("Old", "Timer", "9999999999", "dup@gmail.com", "x", "Seed@123"),
            Role::User,
        )
        .await
        .unwrap();

    // Row 3 has a 5-digit contact and fails validation; rows 2 and 4 are
    // submitted; row 4 rejects as a duplicate.
    let file = format!(
        "{HEADER}\n\
         Ada,Lovelace,9876543210,ada@gmail.com,London,Engine@42\n\
         Bad,Contact,12345,bad@gmail.com,Nowhere,Engine@42\n\
         Dup,Licate,9876543212,dup@gmail.com,There,Engine@42"
    );

    let partitioned = parse(file.as_bytes()).unwrap();
    assert_eq!(partitioned.valid.len(), 2);
    assert_eq!(partitioned.invalid.len(), 1);
    assert_eq!(partitioned.invalid[0].row.row, 3);
    assert_eq!(
        partitioned.invalid[0].errors,
        vec!["Contact must be exactly 10 digits"]
    );

    let report = submit_valid(&store, partitioned, Role::Admin).await.unwrap();

    assert_eq!(report.successful.len(), 1);
    assert_eq!(report.successful[0].row, 2);
    assert_eq!(report.failed.len(), 2);
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.success, 1);
    assert_eq!(report.summary.failed, 2);

    // Store reject (row 4) precedes the validation reject (row 3).
    assert_eq!(report.failed[0].row, 4);
    assert_eq!(report.failed[0].errors, vec!["Email already exists"]);
    assert_eq!(report.failed[1].row, 3);
}

#[tokio::test]
async fn test_no_valid_rows_means_no_insert() {
    let store = store();
    let file = format!("{HEADER}\nAda,,12345,nope,,");

    let partitioned = parse(file.as_bytes()).unwrap();
    assert!(partitioned.valid.is_empty());

    let report = submit_valid(&store, partitioned, Role::Admin).await.unwrap();
    assert_eq!(report.successful.len(), 0);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_non_admin_is_refused_before_any_insert() {
    let store = store();
    let file = format!("{HEADER}\nAda,Lovelace,9876543210,ada@gmail.com,London,Engine@42");

    let partitioned = parse(file.as_bytes()).unwrap();
    let err = submit_valid(&store, partitioned, Role::User).await.unwrap_err();

    assert!(matches!(err, SubmitError::Forbidden { .. }));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_rerunning_the_same_file_rejects_accepted_rows_as_duplicates() {
    // The core has no submission memory: re-ingesting the same file after a
    // successful run re-submits every row, and the store rejects them all.
    let store = store();
    let file = format!("{HEADER}\nAda,Lovelace,9876543210,ada@gmail.com,London,Engine@42");

    let first = submit_valid(&store, parse(file.as_bytes()).unwrap(), Role::Admin)
        .await
        .unwrap();
    assert_eq!(first.summary.success, 1);

    let second = submit_valid(&store, parse(file.as_bytes()).unwrap(), Role::Admin)
        .await
        .unwrap();
    assert_eq!(second.summary.success, 0);
    assert_eq!(second.summary.failed, 1);
    assert_eq!(second.failed[0].errors, vec!["Email already exists"]);
}

#[test]
fn test_schema_error_reports_missing_columns() {
    let err = parse("First Name,Last Name\nAda,Lovelace".as_bytes()).unwrap_err();
    match err {
        IngestError::MissingColumns(missing) => {
            assert_eq!(missing, vec!["Contact", "Email", "Address", "Password"]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}
