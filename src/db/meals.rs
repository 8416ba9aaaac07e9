use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::params;

use crate::models::MealLog;

use super::Database;

struct MealRow {
    id: String,
    date: String,
    food: String,
    meal_type: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    created_at: String,
}

fn row_to_meal(r: MealRow) -> Result<MealLog> {
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(MealLog {
        id: r.id,
        date: r.date.parse()?,
        food: r.food,
        meal_type: r.meal_type.parse()?,
        calories: r.calories,
        protein: r.protein,
        carbs: r.carbs,
        fat: r.fat,
        created_at,
    })
}

impl Database {
    pub fn insert_meal(&self, m: &MealLog) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meal_logs (id, date, food, meal_type, calories, protein, carbs, fat, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                m.id,
                m.date.to_string(),
                m.food,
                m.meal_type.to_string(),
                m.calories,
                m.protein,
                m.carbs,
                m.fat,
                m.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn meals_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<MealLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, food, meal_type, calories, protein, carbs, fat, created_at
             FROM meal_logs WHERE date >= ?1 AND date <= ?2 ORDER BY date, created_at",
        )?;
        let rows = stmt.query_map(params![from.to_string(), to.to_string()], |row| {
            Ok(MealRow {
                id: row.get(0)?,
                date: row.get(1)?,
                food: row.get(2)?,
                meal_type: row.get(3)?,
                calories: row.get(4)?,
                protein: row.get(5)?,
                carbs: row.get(6)?,
                fat: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row_to_meal(row?)?);
        }
        Ok(meals)
    }

    pub fn distinct_meal_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT date FROM meal_logs ORDER BY date DESC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut dates = Vec::new();
        for row in rows {
            dates.push(row?.parse()?);
        }
        Ok(dates)
    }
}
