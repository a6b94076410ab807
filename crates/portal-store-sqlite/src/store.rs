//! [`SqliteStore`], the SQLite implementation of [`RecordStore`].

use std::path::Path;

use portal_core::{
  entity::{Contact, ContactId, EntityKind, Registration, RegistrationId},
  store::{RecordStore, SortOrder},
};

use crate::{
  Result,
  encode::{
    CONTACT_COLUMNS, REGISTRATION_COLUMNS, RawContact, RawRegistration, encode_dt,
    encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Portal record store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every
/// statement runs on the connection's dedicated thread, one at a time, so
/// concurrent inserts are serialised rather than lost.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn order_clause(order: SortOrder) -> &'static str {
  match order {
    SortOrder::NewestFirst => "ORDER BY created_at DESC, seq DESC",
    SortOrder::OldestFirst => "ORDER BY created_at ASC, seq ASC",
  }
}

/// SQLite binds integers as `i64`; anything larger is effectively unbounded.
fn sql_int(n: u64) -> i64 { i64::try_from(n).unwrap_or(i64::MAX) }

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  async fn insert_contact(&self, contact: Contact) -> Result<ContactId> {
    let id = contact.id;
    let id_str = encode_uuid(id.0);
    let at_str = encode_dt(contact.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (id, name, email, subject, message, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            contact.name,
            contact.email,
            contact.subject,
            contact.message,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(contact_id = %id, "inserted contact row");
    Ok(id)
  }

  async fn insert_registration(&self, registration: Registration) -> Result<RegistrationId> {
    let id = registration.id;
    let id_str = encode_uuid(id.0);
    let at_str = encode_dt(registration.created_at);
    let course = registration.course.code();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO registrations (
             id, full_name, email, phone, course, experience, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            registration.full_name,
            registration.email,
            registration.phone,
            course,
            registration.experience,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(registration_id = %id, "inserted registration row");
    Ok(id)
  }

  async fn scan_contacts(
    &self,
    order: SortOrder,
    offset: u64,
    limit: u64,
  ) -> Result<Vec<Contact>> {
    let sql = format!(
      "SELECT {CONTACT_COLUMNS} FROM contacts {} LIMIT ?1 OFFSET ?2",
      order_clause(order)
    );
    let (limit, offset) = (sql_int(limit), sql_int(offset));

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn scan_registrations(
    &self,
    order: SortOrder,
    offset: u64,
    limit: u64,
  ) -> Result<Vec<Registration>> {
    let sql = format!(
      "SELECT {REGISTRATION_COLUMNS} FROM registrations {} LIMIT ?1 OFFSET ?2",
      order_clause(order)
    );
    let (limit, offset) = (sql_int(limit), sql_int(offset));

    let raws: Vec<RawRegistration> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], RawRegistration::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRegistration::into_registration).collect()
  }

  async fn count(&self, kind: EntityKind) -> Result<u64> {
    let sql = match kind {
      EntityKind::Contact => "SELECT COUNT(*) FROM contacts",
      EntityKind::Registration => "SELECT COUNT(*) FROM registrations",
    };

    let n: i64 = self
      .conn
      .call(move |conn| Ok(conn.query_row(sql, [], |row| row.get(0))?))
      .await?;

    Ok(u64::try_from(n).unwrap_or_default())
  }
}
