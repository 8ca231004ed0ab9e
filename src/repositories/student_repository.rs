use crate::models::{NewStudent, ServiceError, Student};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, ServiceError>;
    async fn create(&self, student: &NewStudent) -> Result<Student, ServiceError>;
}

pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const STUDENT_COLUMNS: &str = "id, name, roll_no, department, email, year, password, team_lead_name, team_lead_roll_no, project_name, created_at";

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM users WHERE id = ?",
            STUDENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, ServiceError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM users WHERE email = ?",
            STUDENT_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn create(&self, student: &NewStudent) -> Result<Student, ServiceError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (name, roll_no, department, email, year, password, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&student.name)
        .bind(&student.roll_no)
        .bind(&student.department)
        .bind(&student.email)
        .bind(student.year)
        .bind(&student.password)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Student {
            id: result.last_insert_rowid(),
            name: student.name.clone(),
            roll_no: student.roll_no.clone(),
            department: student.department.clone(),
            email: student.email.clone(),
            year: student.year,
            password: student.password.clone(),
            team_lead_name: None,
            team_lead_roll_no: None,
            project_name: None,
            created_at,
        })
    }
}
