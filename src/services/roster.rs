//! Roster import: student records from a CSV export of the school roster.

use std::path::Path;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::Deserialize;

use crate::db::entities::students;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    sex: String,
    #[serde(default)]
    year: String,
}

/// Insert one student per roster row, skipping names that already exist.
/// A missing file is a no-op. Returns the number of students inserted.
pub async fn import_students_from_csv(db: &DatabaseConnection, path: &Path) -> Result<u64> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err.into()),
    };

    let txn = db.begin().await?;
    let mut inserted = 0;
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    for row in reader.deserialize::<RosterRow>() {
        let row = row?;
        let exists = students::Entity::find()
            .filter(students::Column::Name.eq(row.name.as_str()))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            continue;
        }
        students::ActiveModel {
            name: Set(row.name),
            sex: Set(row.sex),
            year: Set(row.year),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        inserted += 1;
    }
    txn.commit().await?;

    Ok(inserted)
}

/// Last whitespace-separated word of a name, used to order student
/// pick-lists. A presentation helper, deliberately not entity behavior.
pub fn last_name(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn last_name_takes_final_word() {
        assert_eq!(last_name("Tristan Kuhse"), "Kuhse");
        assert_eq!(last_name("Alex Mohlis-Alloway"), "Mohlis-Alloway");
        assert_eq!(last_name("  Cher  "), "Cher");
        assert_eq!(last_name(""), "");
    }
}
