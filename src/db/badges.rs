use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::models::badge::BadgeUnlock;

use super::Database;

impl Database {
    /// Insert an unlock unless its key is already present.
    /// Returns `true` only when this call created the row.
    pub fn insert_unlock_if_absent(&self, u: &BadgeUnlock) -> Result<bool> {
        let count = self.conn.execute(
            "INSERT OR IGNORE INTO badge_unlocks (key, chain_id, milestone, unlocked_at, value_snapshot)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                u.key,
                u.chain_id,
                u.milestone,
                u.unlocked_at.to_rfc3339(),
                u.value_snapshot,
            ],
        )?;
        Ok(count > 0)
    }

    pub fn list_unlocks(&self) -> Result<Vec<BadgeUnlock>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, chain_id, milestone, unlocked_at, value_snapshot
             FROM badge_unlocks ORDER BY unlocked_at, chain_id, milestone",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, u32>(4)?,
            ))
        })?;

        let mut unlocks = Vec::new();
        for row in rows {
            let (key, chain_id, milestone, unlocked_at, value_snapshot) = row?;
            let unlocked_at: DateTime<Utc> =
                DateTime::parse_from_rfc3339(&unlocked_at)?.with_timezone(&Utc);
            unlocks.push(BadgeUnlock {
                key,
                chain_id,
                milestone,
                unlocked_at,
                value_snapshot,
            });
        }
        Ok(unlocks)
    }
}
