use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Subject must be between 1 and 100 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,
}

impl ContactForm {
    /// Trims every field so whitespace-only input fails validation.
    pub fn normalized(self) -> Self {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MailtoResponse {
    pub mailto: String,
    pub message: &'static str,
}
