use crate::models::{NewStudent, RegisterForm, ServiceError, Student};
use crate::repositories::StudentRepository;
use std::sync::Arc;

pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<Student, ServiceError> {
        if form.name.trim().is_empty()
            || form.roll_no.trim().is_empty()
            || form.department.trim().is_empty()
            || form.email.trim().is_empty()
        {
            return Err(ServiceError::ValidationError(
                "Please fill in all required fields.".to_string(),
            ));
        }

        if form.password != form.confirm_password {
            return Err(ServiceError::ValidationError(
                "Passwords do not match!".to_string(),
            ));
        }

        let student = NewStudent {
            name: form.name.clone(),
            roll_no: form.roll_no.clone(),
            department: form.department.clone(),
            email: form.email.clone(),
            year: form.year,
            password: Some(form.password.clone()),
        };

        match self.repository.create(&student).await {
            Ok(created) => {
                tracing::info!("Registered student {} ({})", created.name, created.roll_no);
                Ok(created)
            }
            Err(ServiceError::DatabaseError(msg)) => Err(Self::friendly_registration_error(msg)),
            Err(e) => Err(e),
        }
    }

    /// Map the backing store's constraint errors to the messages shown to
    /// applicants, with a generic fallback when the pattern is unrecognized.
    fn friendly_registration_error(msg: String) -> ServiceError {
        if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
            if msg.contains("roll_no") {
                ServiceError::Conflict(
                    "This roll number is already registered. Please use a different roll number or sign in instead.".to_string(),
                )
            } else if msg.contains("email") {
                ServiceError::Conflict(
                    "This email is already registered. Please use a different email or sign in instead.".to_string(),
                )
            } else {
                ServiceError::Conflict(
                    "This information is already in use. Please check your details and try again.".to_string(),
                )
            }
        } else if msg.contains("NOT NULL constraint failed") || msg.contains("null value") {
            ServiceError::ValidationError("Please fill in all required fields.".to_string())
        } else {
            tracing::error!("Registration failed: {}", msg);
            ServiceError::InternalError(
                "Failed to create account. Please try again.".to_string(),
            )
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Student, ServiceError> {
        let student = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                ServiceError::AuthenticationError(
                    "No account found with this email. Please create an account first.".to_string(),
                )
            })?;

        // Passwords are stored as entered; accounts predating the password
        // column accept anything.
        if let Some(stored) = &student.password {
            if stored != password {
                return Err(ServiceError::AuthenticationError(
                    "Invalid password. Please try again.".to_string(),
                ));
            }
        }

        Ok(student)
    }
}
