use quick_xml::escape::escape;

use crate::api::mailer::OutboundEmail;
use crate::handlers::contact_handlers::ContactSubmission;
use crate::locale::Locale;

pub fn contact_email(submission: &ContactSubmission) -> OutboundEmail {
    let not_provided = match submission.locale {
        Locale::En => "(not provided)",
        Locale::Es => "(sin nombre)",
    };
    let display_name = submission.name.as_deref().unwrap_or(not_provided);
    let from_label = submission.name.as_deref().unwrap_or(&submission.email);

    let subject = format!(
        "New inquiry from {} [{}]",
        from_label,
        submission.locale.code().to_ascii_uppercase()
    );

    // escape first so the <br> we insert survives
    let message = escape(submission.message.as_str())
        .replace("\r\n", "\n")
        .replace('\n', "<br>");

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
  <body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; color: #111;">
    <h2 style="margin: 0 0 16px;">New contact request</h2>
    <table cellpadding="6" style="border-collapse: collapse;">
      <tr><td><strong>Name</strong></td><td>{name}</td></tr>
      <tr><td><strong>Email</strong></td><td>{email}</td></tr>
      <tr><td><strong>Language</strong></td><td>{lang}</td></tr>
    </table>
    <h3 style="margin: 24px 0 8px;">Message</h3>
    <p style="white-space: normal; line-height: 1.5;">{message}</p>
  </body>
</html>
"#,
        lang = submission.locale.code(),
        name = escape(display_name),
        email = escape(submission.email.as_str()),
        message = message,
    );

    OutboundEmail {
        subject,
        html,
        reply_to: submission.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: Option<&str>, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.map(str::to_string),
            email: "ana@example.com".to_string(),
            message: message.to_string(),
            locale: Locale::Es,
        }
    }

    #[test]
    fn submitted_fields_are_escaped() {
        let email = contact_email(&submission(
            Some("<b>Ana</b>"),
            "<script>alert('x')</script> & more",
        ));
        assert!(!email.html.contains("<script>"));
        assert!(!email.html.contains("<b>Ana</b>"));
        assert!(email.html.contains("&lt;script&gt;"));
        assert!(email.html.contains("&amp; more"));
        assert!(email.html.contains("&lt;b&gt;Ana&lt;/b&gt;"));
    }

    #[test]
    fn line_breaks_become_br() {
        let email = contact_email(&submission(None, "first line\r\nsecond line\nthird"));
        assert!(email.html.contains("first line<br>second line<br>third"));
    }

    #[test]
    fn subject_and_reply_to_identify_the_visitor() {
        let email = contact_email(&submission(None, "We need a new website."));
        assert_eq!(email.subject, "New inquiry from ana@example.com [ES]");
        assert_eq!(email.reply_to, "ana@example.com");
        assert!(email.html.contains("(sin nombre)"));

        let named = contact_email(&submission(Some("Ana"), "We need a new website."));
        assert_eq!(named.subject, "New inquiry from Ana [ES]");
    }
}
