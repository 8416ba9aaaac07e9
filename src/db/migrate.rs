use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS exercise_logs (
            id           TEXT PRIMARY KEY,
            date         TEXT NOT NULL,
            exercise     TEXT NOT NULL,
            muscle_group TEXT NOT NULL DEFAULT '',
            sets         INTEGER NOT NULL,
            reps         INTEGER NOT NULL,
            weight       REAL,
            duration_min REAL,
            note         TEXT,
            created_at   TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_exercise_logs_date ON exercise_logs(date);

        CREATE TABLE IF NOT EXISTS meal_logs (
            id         TEXT PRIMARY KEY,
            date       TEXT NOT NULL,
            food       TEXT NOT NULL,
            meal_type  TEXT NOT NULL,
            calories   REAL NOT NULL,
            protein    REAL NOT NULL DEFAULT 0,
            carbs      REAL NOT NULL DEFAULT 0,
            fat        REAL NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_meal_logs_date ON meal_logs(date);

        CREATE TABLE IF NOT EXISTS reminders (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            category    TEXT NOT NULL,
            frequency   TEXT NOT NULL,
            repeat_days TEXT,
            start_date  TEXT NOT NULL,
            end_date    TEXT,
            active      INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reminder_logs (
            id          TEXT PRIMARY KEY,
            reminder_id TEXT NOT NULL,
            date        TEXT NOT NULL,
            status      TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_reminder_logs_date ON reminder_logs(date);

        CREATE TABLE IF NOT EXISTS personal_records (
            exercise       TEXT NOT NULL,
            record_type    TEXT NOT NULL,
            value          REAL NOT NULL,
            reps           INTEGER,
            achieved_on    TEXT NOT NULL,
            previous_value REAL,
            source_log_id  TEXT NOT NULL,
            PRIMARY KEY (exercise, record_type)
        );

        CREATE TABLE IF NOT EXISTS badge_unlocks (
            key            TEXT PRIMARY KEY,
            chain_id       TEXT NOT NULL,
            milestone      INTEGER NOT NULL,
            unlocked_at    TEXT NOT NULL,
            value_snapshot INTEGER NOT NULL
        );",
    )?;
    Ok(())
}
