//! Client-side form validation. Each form validates into the typed request
//! body; a `ClientError::Validation` here blocks submission before any
//! network call is made.

use bytes::Bytes;

use crate::errors::ClientError;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::models::candidate::NewApplication;
use crate::models::role::RoleDraft;

const MIN_PASSWORD_LEN: usize = 8;

fn required(value: &str, field: &str) -> Result<String, ClientError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ClientError::Validation(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}

fn valid_email(value: &str) -> Result<String, ClientError> {
    let email = required(value, "Email")?;
    if email.contains('@') {
        Ok(email)
    } else {
        Err(ClientError::Validation(
            "Email address is not valid".to_string(),
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ClientError> {
        Ok(LoginRequest {
            email: valid_email(&self.email)?,
            password: required(&self.password, "Password")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ClientError> {
        let full_name = required(&self.name, "Full name")?;
        let email = valid_email(&self.email)?;
        let company_name = required(&self.company, "Company")?;
        let password = required(&self.password, "Password")?;

        if password.len() < MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(ClientError::Validation(
                "Passwords do not match".to_string(),
            ));
        }

        Ok(RegisterRequest {
            email,
            password,
            full_name,
            company_name,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleForm {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub salary: Option<String>,
}

impl RoleForm {
    pub fn validate(&self) -> Result<RoleDraft, ClientError> {
        Ok(RoleDraft {
            title: required(&self.title, "Title")?,
            description: required(&self.description, "Description")?,
            requirements: required(&self.requirements, "Requirements")?,
            department: self.department.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            salary: self.salary.clone(),
            status: None,
        })
    }
}

/// CV application form. The CV must be attached and must be a PDF — the
/// upload widget filters on extension, and the backend rejects anything
/// else anyway.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub role_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cv_file_name: Option<String>,
    pub cv: Option<Bytes>,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<NewApplication, ClientError> {
        let role_id = required(&self.role_id, "Role")?;
        let name = required(&self.name, "Name")?;
        let email = valid_email(&self.email)?;

        let (cv_file_name, cv) = match (&self.cv_file_name, &self.cv) {
            (Some(file_name), Some(cv)) if !cv.is_empty() => (file_name.clone(), cv.clone()),
            _ => {
                return Err(ClientError::Validation(
                    "Please attach a CV file".to_string(),
                ))
            }
        };
        if !cv_file_name.to_lowercase().ends_with(".pdf") {
            return Err(ClientError::Validation(
                "Only PDF files are accepted".to_string(),
            ));
        }

        let phone = self.phone.trim();
        Ok(NewApplication {
            role_id,
            name,
            email,
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            },
            cv_file_name,
            cv,
        })
    }
}
