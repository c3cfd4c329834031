use serde::{Deserialize, Serialize};
use super::RecordId;

/// Body of `POST /api/login/`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Optional employee record created together with the user account
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EmployeeProfile {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub company: Option<RecordId>,
    pub department: Option<RecordId>,
    /// `YYYY-MM-DD`, straight from the date input
    pub date_hired: String,
    /// Decimal kept as text so the backend does the parsing
    pub salary: String,
}

impl EmployeeProfile {
    /// True when the user left every profile field empty
    pub fn is_blank(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.address,
            &self.date_hired,
            &self.salary,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
            && self.company.is_none()
            && self.department.is_none()
    }
}

/// Body of `POST /api/register/`
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Compared against `password` by the server only
    pub password_confirmation: String,
    #[serde(flatten)]
    pub profile: Option<EmployeeProfile>,
}

/// Everything the register form holds
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub profile: EmployeeProfile,
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            profile: (!self.profile.is_blank()).then(|| self.profile.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> RegisterForm {
        RegisterForm {
            username: "jdoe".into(),
            email: "jdoe@acme.com".into(),
            password: "secret".into(),
            password_confirmation: "different".into(),
            profile: EmployeeProfile::default(),
        }
    }

    #[test]
    fn login_body() {
        let request = LoginRequest {
            username: "u".into(),
            password: "p".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"username": "u", "password": "p"})
        );
    }

    #[test]
    fn register_without_profile_sends_four_fields() {
        let body = serde_json::to_value(credentials().to_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "jdoe",
                "email": "jdoe@acme.com",
                "password": "secret",
                "password_confirmation": "different"
            })
        );
    }

    #[test]
    fn register_with_profile_flattens_employee_fields() {
        let mut form = credentials();
        form.profile.first_name = "John".into();
        form.profile.company = Some(2);
        form.profile.salary = "4200.50".into();

        let body = serde_json::to_value(form.to_request()).unwrap();
        assert_eq!(body["username"], "jdoe");
        assert_eq!(body["first_name"], "John");
        assert_eq!(body["company"], 2);
        assert_eq!(body["department"], serde_json::Value::Null);
        assert_eq!(body["salary"], "4200.50");
        assert!(body.get("profile").is_none());
    }

    #[test]
    fn whitespace_only_profile_is_blank() {
        let profile = EmployeeProfile {
            first_name: "  ".into(),
            ..EmployeeProfile::default()
        };
        assert!(profile.is_blank());
        assert!(!EmployeeProfile {
            department: Some(1),
            ..EmployeeProfile::default()
        }
        .is_blank());
    }
}
