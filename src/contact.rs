use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Contact form fields. The form never posts anywhere: the browser opens a
/// pre-filled draft in the visitor's mail client.
#[derive(Debug, Default, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn subject(&self) -> String {
        if self.name.trim().is_empty() {
            "Website enquiry".to_string()
        } else {
            format!("Website enquiry from {}", self.name.trim())
        }
    }

    pub fn body(&self) -> String {
        if self.email.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n\n{}", self.message, self.email)
        }
    }

    pub fn mailto_href(&self, recipient: &str) -> String {
        let mut href = format!(
            "mailto:{}?subject={}",
            recipient,
            utf8_percent_encode(&self.subject(), URI_COMPONENT)
        );
        let body = self.body();
        if !body.is_empty() {
            href.push_str("&body=");
            href.extend(utf8_percent_encode(&body, URI_COMPONENT));
        }
        href
    }
}

/// Browser-side twin of [`ContactDraft::mailto_href`], attached to the
/// contact form's submit event. Empty fields are dropped the same way.
pub fn compose_script(recipient: &str) -> String {
    format!(
        r#"<script>
document.getElementById("contact-form").addEventListener("submit", (e) => {{
    e.preventDefault();
    const form = e.currentTarget;
    const name = form.elements["name"].value.trim();
    const email = form.elements["email"].value;
    const message = form.elements["message"].value;
    const subject = name ? "Website enquiry from " + name : "Website enquiry";
    const body = email ? message + "\n\n" + email : message;
    let href = "mailto:{recipient}?subject=" + encodeURIComponent(subject);
    if (body) {{
        href += "&body=" + encodeURIComponent(body);
    }}
    window.location.href = href;
}});
</script>"#
    )
}
