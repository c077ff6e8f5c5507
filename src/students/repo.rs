use sqlx::{PgPool, Postgres, Transaction};

use crate::students::repo_types::{StudentRecord, StudentRow};

impl StudentRow {
    /// Find a student by their public identifier.
    pub async fn find_by_student_id(
        db: &PgPool,
        student_id: &str,
    ) -> Result<Option<StudentRow>, sqlx::Error> {
        sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, student_id, name, password_hash,
                   amount_to_be_paid, paid_amount, created_at
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(db)
        .await
    }
}

/// Insert one student within a transaction.
pub async fn insert_student_tx(
    tx: &mut Transaction<'_, Postgres>,
    record: &StudentRecord,
) -> Result<(), sqlx::Error> {
    let (amount_to_be_paid, paid_amount) = match record.payment {
        Some(p) => (Some(p.amount_to_be_paid), Some(p.paid_amount)),
        None => (None, None),
    };
    sqlx::query(
        r#"
        INSERT INTO students (student_id, name, password_hash, amount_to_be_paid, paid_amount)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&record.student_id)
    .bind(&record.name)
    .bind(&record.password_hash)
    .bind(amount_to_be_paid)
    .bind(paid_amount)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Insert all students or none of them.
pub async fn insert_many(db: &PgPool, records: &[StudentRecord]) -> Result<(), sqlx::Error> {
    let mut tx = db.begin().await?;
    for r in records {
        insert_student_tx(&mut tx, r).await?;
    }
    tx.commit().await?;
    Ok(())
}
