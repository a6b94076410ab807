//! Integration tests for `SqliteStore` against an in-memory database.

use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Duration, TimeZone, Utc};
use portal_core::{
  Error as CoreError, ListingService, RawFields, SubmissionService,
  entity::{Contact, ContactId, Course, EntityKind, Registration, RegistrationId},
  store::{RecordStore, SortOrder},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn base_time() -> DateTime<Utc> { Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap() }

fn contact(n: i64, created_at: DateTime<Utc>) -> Contact {
  Contact {
    id: ContactId::new(),
    name: format!("Visitor {n}"),
    email: format!("visitor{n}@example.com"),
    subject: format!("Subject {n}"),
    message: "Hello!".into(),
    created_at,
  }
}

fn registration(n: i64, created_at: DateTime<Utc>) -> Registration {
  Registration {
    id: RegistrationId::new(),
    full_name: format!("Student {n}"),
    email: format!("student{n}@example.com"),
    phone: "555-0100".into(),
    course: Course::Data,
    experience: "Spreadsheets".into(),
    created_at,
  }
}

fn fields(pairs: &[(&str, &str)]) -> RawFields {
  pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn valid_contact_fields() -> RawFields {
  fields(&[
    ("name", "Test User"),
    ("email", "a@b.co"),
    ("subject", "Test Subject"),
    ("message", "Test message"),
  ])
}

fn valid_registration_fields(course: &str) -> RawFields {
  fields(&[
    ("full_name", "Grace Hopper"),
    ("email", "grace@example.com"),
    ("phone", "555-0199"),
    ("course", course),
    ("experience", "Compilers"),
  ])
}

// ─── Record store ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_scan_contact_roundtrip() {
  let s = store().await;
  let original = contact(1, base_time() + Duration::microseconds(123_456));

  let id = s.insert_contact(original.clone()).await.unwrap();
  assert_eq!(id, original.id);

  let rows = s.scan_contacts(SortOrder::NewestFirst, 0, 10).await.unwrap();
  assert_eq!(rows, vec![original]);
  assert_eq!(s.count(EntityKind::Contact).await.unwrap(), 1);
  assert_eq!(s.count(EntityKind::Registration).await.unwrap(), 0);
}

#[tokio::test]
async fn insert_and_scan_registration_roundtrip() {
  let s = store().await;
  let mut original = registration(1, base_time());
  original.course = Course::Mobile;

  s.insert_registration(original.clone()).await.unwrap();

  let rows = s.scan_registrations(SortOrder::NewestFirst, 0, 10).await.unwrap();
  assert_eq!(rows, vec![original]);
}

#[tokio::test]
async fn scans_order_by_created_at_then_insertion() {
  let s = store().await;
  // Inserted out of time order; 2 and 3 share a timestamp.
  let t = base_time();
  s.insert_contact(contact(1, t + Duration::minutes(5))).await.unwrap();
  s.insert_contact(contact(2, t)).await.unwrap();
  s.insert_contact(contact(3, t)).await.unwrap();
  s.insert_contact(contact(4, t + Duration::minutes(10))).await.unwrap();

  let newest: Vec<_> = s
    .scan_contacts(SortOrder::NewestFirst, 0, 10)
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
  assert_eq!(newest, ["Visitor 4", "Visitor 1", "Visitor 3", "Visitor 2"]);

  let oldest: Vec<_> = s
    .scan_contacts(SortOrder::OldestFirst, 0, 10)
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
  assert_eq!(oldest, ["Visitor 2", "Visitor 3", "Visitor 1", "Visitor 4"]);
}

#[tokio::test]
async fn scan_offset_and_limit() {
  let s = store().await;
  for n in 0..6 {
    s.insert_registration(registration(n, base_time() + Duration::seconds(n)))
      .await
      .unwrap();
  }

  let window: Vec<_> = s
    .scan_registrations(SortOrder::NewestFirst, 2, 3)
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.full_name)
    .collect();
  assert_eq!(window, ["Student 3", "Student 2", "Student 1"]);

  let beyond = s.scan_registrations(SortOrder::NewestFirst, 50, 10).await.unwrap();
  assert!(beyond.is_empty());
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
  let s = store().await;
  let first = contact(1, base_time());
  let mut second = contact(2, base_time());
  second.id = first.id;

  s.insert_contact(first).await.unwrap();
  assert!(s.insert_contact(second).await.is_err());
  assert_eq!(s.count(EntityKind::Contact).await.unwrap(), 1);
}

#[tokio::test]
async fn concurrent_inserts_are_all_kept() {
  let s = store().await;
  let mut handles = Vec::new();
  for n in 0..32 {
    let s = s.clone();
    handles.push(tokio::spawn(async move {
      s.insert_contact(contact(n, base_time())).await
    }));
  }

  let mut ids = HashSet::new();
  for h in handles {
    ids.insert(h.await.unwrap().unwrap());
  }

  assert_eq!(ids.len(), 32);
  assert_eq!(s.count(EntityKind::Contact).await.unwrap(), 32);
}

#[tokio::test]
async fn rows_survive_reopening_the_file() {
  let path = std::env::temp_dir().join(format!("portal-test-{}.db", Uuid::new_v4()));

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert_contact(contact(1, base_time())).await.unwrap()
  };

  let reopened = SqliteStore::open(&path).await.unwrap();
  let rows = reopened.scan_contacts(SortOrder::NewestFirst, 0, 10).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].id, id);

  drop(reopened);
  for suffix in ["", "-wal", "-shm"] {
    let mut p = path.clone().into_os_string();
    p.push(suffix);
    let _ = std::fs::remove_file(p);
  }
}

// ─── Submission service over SQLite ──────────────────────────────────────────

#[tokio::test]
async fn valid_contact_submission_is_listed_with_matching_fields() {
  let s = Arc::new(store().await);
  let submit = SubmissionService::new(Arc::clone(&s));
  let listing = ListingService::new(Arc::clone(&s));

  let id = submit.submit_contact(&valid_contact_fields()).await.unwrap();

  let recent = listing.recent_contacts(5).await.unwrap();
  assert_eq!(recent.len(), 1);
  let row = &recent[0];
  assert_eq!(row.id, id);
  assert_eq!(row.name, "Test User");
  assert_eq!(row.email, "a@b.co");
  assert_eq!(row.subject, "Test Subject");
  assert_eq!(row.message, "Test message");
  assert_eq!(listing.count_contacts().await.unwrap(), 1);
}

#[tokio::test]
async fn invalid_contact_submitted_twice_creates_no_rows() {
  let s = Arc::new(store().await);
  let submit = SubmissionService::new(Arc::clone(&s));
  let mut raw = valid_contact_fields();
  raw.remove("name");

  let first = submit.submit_contact(&raw).await.unwrap_err();
  let second = submit.submit_contact(&raw).await.unwrap_err();

  match (first, second) {
    (CoreError::Validation(a), CoreError::Validation(b)) => {
      assert_eq!(a, b);
      assert!(a.contains("name"));
    }
    other => panic!("expected two validation errors, got {other:?}"),
  }
  assert_eq!(s.count(EntityKind::Contact).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_course_submission_creates_no_row() {
  let s = Arc::new(store().await);
  let submit = SubmissionService::new(Arc::clone(&s));

  for code in ["blockchain", "WEB", "Ai"] {
    let err = submit
      .submit_registration(&valid_registration_fields(code))
      .await
      .unwrap_err();
    assert!(err.field_errors().unwrap().contains("course"));
  }
  assert_eq!(s.count(EntityKind::Registration).await.unwrap(), 0);

  for code in ["web", "data", "ai", "mobile", "cloud"] {
    submit
      .submit_registration(&valid_registration_fields(code))
      .await
      .unwrap();
  }
  assert_eq!(s.count(EntityKind::Registration).await.unwrap(), 5);
}

#[tokio::test]
async fn not_an_email_is_rejected_for_both_kinds() {
  let s = Arc::new(store().await);
  let submit = SubmissionService::new(Arc::clone(&s));

  let mut contact_raw = valid_contact_fields();
  contact_raw.insert("email".into(), "not-an-email".into());
  let err = submit.submit_contact(&contact_raw).await.unwrap_err();
  assert!(err.field_errors().unwrap().contains("email"));

  let mut registration_raw = valid_registration_fields("web");
  registration_raw.insert("email".into(), "not-an-email".into());
  let err = submit.submit_registration(&registration_raw).await.unwrap_err();
  assert!(err.field_errors().unwrap().contains("email"));

  registration_raw.insert("email".into(), "a@b.co".into());
  submit.submit_registration(&registration_raw).await.unwrap();
}

// ─── Listing service over SQLite ─────────────────────────────────────────────

#[tokio::test]
async fn fifteen_registrations_over_two_pages() {
  let s = Arc::new(store().await);
  for n in 0..15 {
    s.insert_registration(registration(n, base_time() + Duration::minutes(n)))
      .await
      .unwrap();
  }
  let listing = ListingService::new(Arc::clone(&s));

  let page1 = listing.list_registrations(1, 10).await.unwrap();
  assert_eq!(page1.items.len(), 10);
  assert!(page1.has_next);
  assert!(!page1.has_prev);
  assert_eq!(page1.total_count, 15);
  assert_eq!(page1.items[0].full_name, "Student 14");

  let page2 = listing.list_registrations(2, 10).await.unwrap();
  assert_eq!(page2.items.len(), 5);
  assert!(!page2.has_next);
  assert!(page2.has_prev);
  assert_eq!(page2.items[4].full_name, "Student 0");

  let page3 = listing.list_registrations(3, 10).await.unwrap();
  assert!(page3.items.is_empty());
  assert!(!page3.has_next);
}

#[tokio::test]
async fn recent_contacts_returns_five_newest_of_eight() {
  let s = Arc::new(store().await);
  for n in 0..8 {
    s.insert_contact(contact(n, base_time() + Duration::hours(n)))
      .await
      .unwrap();
  }
  let listing = ListingService::new(Arc::clone(&s));

  let recent = listing.recent_contacts(5).await.unwrap();
  let names: Vec<_> = recent.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, [
    "Visitor 7",
    "Visitor 6",
    "Visitor 5",
    "Visitor 4",
    "Visitor 3"
  ]);
  assert!(recent.windows(2).all(|w| w[0].created_at > w[1].created_at));
}

#[tokio::test]
async fn non_positive_page_size_never_reaches_the_store() {
  let s = Arc::new(store().await);
  let listing = ListingService::new(s);
  assert!(matches!(
    listing.list_registrations(1, 0).await,
    Err(CoreError::InvalidArgument(_))
  ));
}
