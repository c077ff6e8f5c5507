use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use crate::access::StudentDirectory;
use crate::store::{memory::MemoryStudentStore, StudentStore};
use crate::students::{dto::NewStudent, repo_types::StudentRecord, services::register_students};

/// Store holding the demo students plus one record whose payment data is
/// incomplete (20003), one overpaid record (20004) and one record half a
/// unit short (20005).
pub async fn seeded_store() -> MemoryStudentStore {
    let store = MemoryStudentStore::default();
    let seeds: Vec<NewStudent> = serde_json::from_value(json!([
        { "studentId": "20000", "name": "Kate", "password": "KT123",
          "payment": { "amountToBePaid": 5000, "paidAmount": 5000 } },
        { "studentId": "20001", "name": "John", "password": "password123",
          "payment": { "amountToBePaid": 6000, "paidAmount": 5500 } },
        { "studentId": "20002", "name": "Emily", "password": "emily123",
          "payment": { "amountToBePaid": 7000, "paidAmount": 6000 } },
        { "studentId": "20004", "name": "Ravi", "password": "ravi123",
          "payment": { "amountToBePaid": 3000, "paidAmount": 3500 } },
        { "studentId": "20005", "name": "Asha", "password": "asha123",
          "payment": { "amountToBePaid": 5000, "paidAmount": 4999.5 } }
    ]))
    .expect("seed json");
    register_students(&store, seeds).await.expect("seed students");

    let incomplete = StudentRecord {
        student_id: "20003".into(),
        name: "Nimal".into(),
        password_hash: crate::auth::password::hash_password("nimal123").expect("hash"),
        payment: None,
    };
    store.insert(&[incomplete]).await.expect("seed incomplete");
    store
}

pub async fn seeded_directory() -> StudentDirectory {
    StudentDirectory::new(Arc::new(seeded_store().await), Duration::from_secs(1))
}
