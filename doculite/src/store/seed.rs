use chrono::Utc;
use im::OrdMap;

use crate::collection::{Collection, Document};
use crate::common::{DB_ADMIN, DB_CONFIG, DB_LOCAL, DB_TEST};
use crate::store::Database;
use crate::{doc, ID_GENERATOR};

/// Assigns a generated id to a seed document.
fn seeded(mut doc: Document) -> Document {
    doc.set_id(&ID_GENERATOR.next_id());
    doc
}

/// Builds the fixed catalog of built-in databases a new store starts with.
///
/// The catalog mirrors the administrative bootstrap collections of a real
/// document-database engine: `admin` (version and user records), `config`
/// (an empty sessions collection), `local` (a startup log entry), and the
/// `TESTDB` playground with two sample documents.
pub(crate) fn seed_catalog() -> OrdMap<String, Database> {
    let now = Utc::now().to_rfc3339();

    let admin = Database::new()
        .with_collection(
            "system_version",
            Collection::from_documents([seeded(doc! {
                version: "5.0.0",
                gitVersion: "1184f004a99660de6f5e745573419bda8a28c0e9",
            })]),
        )
        .with_collection(
            "system_users",
            Collection::from_documents([seeded(doc! {
                user: "admin",
                db: "admin",
                roles: [{ role: "root", db: "admin" }],
            })]),
        );

    let config = Database::new().with_collection("system_sessions", Collection::new());

    let local = Database::new().with_collection(
        "startup_log",
        Collection::from_documents([seeded(doc! {
            hostname: "localhost",
            startTime: (now.clone()),
            pid: 12345,
        })]),
    );

    let testdb = Database::new().with_collection(
        "tested_collection",
        Collection::from_documents([
            seeded(doc! {
                name: "Test Document 1",
                value: 100,
                tags: ["test", "sample"],
                createdAt: (now.clone()),
            }),
            seeded(doc! {
                name: "Test Document 2",
                value: 200,
                tags: ["test", "demo"],
                createdAt: (now.clone()),
            }),
        ]),
    );

    [
        (DB_ADMIN.to_string(), admin),
        (DB_CONFIG.to_string(), config),
        (DB_LOCAL.to_string(), local),
        (DB_TEST.to_string(), testdb),
    ]
    .into_iter()
    .collect()
}
