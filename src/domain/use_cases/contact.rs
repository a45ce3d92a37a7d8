use validator::Validate;

use crate::{
    entities::contact::{ContactForm, MailtoResponse},
    errors::AppError,
};

const SUBJECT_PREFIX: &str = "[Portfolio]";

/// Validates the form and builds the `mailto:` link the visitor's mail client
/// opens. Nothing is stored or sent by the site itself.
pub fn submit(form: ContactForm, recipient: Option<&str>) -> Result<MailtoResponse, AppError> {
    let form = form.normalized();
    form.validate()?;

    let recipient = recipient
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::NotFound("No contact address is configured".to_string()))?;

    Ok(MailtoResponse {
        mailto: compose_mailto(recipient, &form),
        message: "Your email client will open with the message ready to send.",
    })
}

pub fn compose_mailto(recipient: &str, form: &ContactForm) -> String {
    let subject = format!("{} {}", SUBJECT_PREFIX, form.subject);
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        form.name, form.email, form.message
    );

    // `@` is legal in the address part; everything else reserved is escaped.
    let recipient = urlencoding::encode(recipient).replace("%40", "@");

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            subject: "Hello & welcome".into(),
            message: "Line one\nLine two".into(),
        }
    }

    #[test]
    fn encodes_subject_and_body() {
        let response = submit(form(), Some("me@example.com")).unwrap();
        assert!(response.mailto.starts_with("mailto:me@example.com?subject="));
        assert!(response.mailto.contains("subject=%5BPortfolio%5D%20Hello%20%26%20welcome"));
        assert!(response.mailto.contains("&body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com"));
        assert!(response.mailto.ends_with("Line%20one%0ALine%20two"));
    }

    #[test]
    fn invalid_form_is_rejected() {
        let mut bad = form();
        bad.email = "not-an-email".into();
        bad.message = "   ".into();

        match submit(bad, Some("me@example.com")) {
            Err(AppError::ValidationError(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["email", "message"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn recipient_reserved_characters_are_escaped() {
        let mailto = compose_mailto("me+blog@example.com?cc=x&y z", &form().normalized());
        assert!(mailto.starts_with("mailto:me%2Bblog@example.com%3Fcc%3Dx%26y%20z?subject="));
        assert_eq!(mailto.matches('?').count(), 1);
    }

    #[test]
    fn missing_recipient_is_not_found() {
        assert!(matches!(submit(form(), None), Err(AppError::NotFound(_))));
        assert!(matches!(submit(form(), Some(" ")), Err(AppError::NotFound(_))));
    }
}
