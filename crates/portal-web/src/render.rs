//! HTML rendering.
//!
//! Plain functions returning `String`s. Every piece of user-supplied text is
//! passed through [`esc`] before it reaches the page.

use std::fmt::Write as _;

use portal_core::{
  Dashboard, FieldErrors, RawFields,
  entity::{Contact, Course, Registration},
};
use quick_xml::escape::escape;

/// HTML-escape `s` for use in element content and quoted attributes.
fn esc(s: &str) -> String { escape(s).into_owned() }

/// Wrap `body` in the shared page chrome.
pub fn layout(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
     <body>\n\
     <nav><a href=\"/contact\">Contact</a> | <a href=\"/form\">Register</a> | \
     <a href=\"/dashboard\">Dashboard</a></nav>\n\
     <main>\n<h1>{title}</h1>\n{body}</main>\n\
     </body>\n\
     </html>\n",
    title = esc(title),
  )
}

// ─── Form pieces ──────────────────────────────────────────────────────────────

fn value<'a>(values: &'a RawFields, name: &str) -> &'a str {
  values.get(name).map(String::as_str).unwrap_or("")
}

fn field_errors(out: &mut String, errors: &FieldErrors, name: &str) {
  let messages = errors.get(name);
  if messages.is_empty() {
    return;
  }
  out.push_str("<ul class=\"errors\">");
  for m in messages {
    let _ = write!(out, "<li>{}</li>", esc(m));
  }
  out.push_str("</ul>\n");
}

fn input(
  out: &mut String,
  values: &RawFields,
  errors: &FieldErrors,
  name: &str,
  label: &str,
  kind: &str,
) {
  let _ = writeln!(
    out,
    "<p><label for=\"{name}\">{label}</label>\
     <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{}\"></p>",
    esc(value(values, name)),
  );
  field_errors(out, errors, name);
}

fn textarea(out: &mut String, values: &RawFields, errors: &FieldErrors, name: &str, label: &str) {
  let _ = writeln!(
    out,
    "<p><label for=\"{name}\">{label}</label>\
     <textarea id=\"{name}\" name=\"{name}\">{}</textarea></p>",
    esc(value(values, name)),
  );
  field_errors(out, errors, name);
}

fn course_select(out: &mut String, values: &RawFields, errors: &FieldErrors) {
  let chosen = value(values, "course").trim();
  out.push_str(
    "<p><label for=\"course\">Course</label><select id=\"course\" name=\"course\">\
     <option value=\"\">Select a course</option>",
  );
  for course in Course::all() {
    let selected = if course.code() == chosen { " selected" } else { "" };
    let _ = write!(
      out,
      "<option value=\"{}\"{selected}>{}</option>",
      course.code(),
      esc(course.label()),
    );
  }
  out.push_str("</select></p>\n");
  field_errors(out, errors, "course");
}

// ─── Pages ────────────────────────────────────────────────────────────────────

/// The contact form, refilled with `values` and annotated with `errors`.
/// `sent` adds the thank-you notice shown after a successful submission.
pub fn contact_page(values: &RawFields, errors: &FieldErrors, sent: bool) -> String {
  let mut body = String::new();
  if sent {
    body.push_str("<p class=\"notice\">Thanks for your message. We'll be in touch soon.</p>\n");
  }
  body.push_str("<form method=\"post\" action=\"/contact\">\n");
  input(&mut body, values, errors, "name", "Name", "text");
  input(&mut body, values, errors, "email", "Email", "email");
  input(&mut body, values, errors, "subject", "Subject", "text");
  textarea(&mut body, values, errors, "message", "Message");
  body.push_str("<button type=\"submit\">Send</button>\n</form>\n");
  layout("Contact Us", &body)
}

/// The course registration form.
pub fn registration_page(values: &RawFields, errors: &FieldErrors) -> String {
  let mut body = String::from("<form method=\"post\" action=\"/form\">\n");
  input(&mut body, values, errors, "full_name", "Full name", "text");
  input(&mut body, values, errors, "email", "Email", "email");
  input(&mut body, values, errors, "phone", "Phone", "tel");
  course_select(&mut body, values, errors);
  textarea(&mut body, values, errors, "experience", "Experience");
  body.push_str("<button type=\"submit\">Register</button>\n</form>\n");
  layout("Course Registration", &body)
}

pub fn success_page() -> String {
  layout(
    "Registration Received",
    "<p>Thank you for registering. We'll contact you with course details.</p>\n\
     <p><a href=\"/form\">Register someone else</a></p>\n",
  )
}

fn registration_row(out: &mut String, r: &Registration) {
  let _ = writeln!(
    out,
    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
    esc(&r.full_name),
    esc(&r.email),
    esc(&r.phone),
    esc(r.course.label()),
    esc(&r.experience),
    r.created_at.format("%Y-%m-%d %H:%M"),
  );
}

fn contact_item(out: &mut String, c: &Contact) {
  let _ = writeln!(
    out,
    "<li><strong>{}</strong> &lt;{}&gt; {}<br>{}<br><small>{}</small></li>",
    esc(&c.name),
    esc(&c.email),
    esc(&c.subject),
    esc(&c.message),
    c.created_at.format("%Y-%m-%d %H:%M"),
  );
}

pub fn dashboard_page(dashboard: &Dashboard) -> String {
  let page = &dashboard.registrations;
  let mut body = String::new();

  let _ = writeln!(
    body,
    "<p class=\"totals\">Registrations: {} | Contacts: {}</p>",
    dashboard.total_registrations, dashboard.total_contacts,
  );

  body.push_str("<h2>Registrations</h2>\n");
  if page.items.is_empty() {
    body.push_str("<p>No registrations yet.</p>\n");
  } else {
    body.push_str(
      "<table>\n<tr><th>Name</th><th>Email</th><th>Phone</th><th>Course</th>\
       <th>Experience</th><th>Registered</th></tr>\n",
    );
    for r in &page.items {
      registration_row(&mut body, r);
    }
    body.push_str("</table>\n");
  }

  body.push_str("<nav class=\"pages\">");
  if let Some(prev) = page.prev_page() {
    let _ = write!(body, "<a href=\"/dashboard?page={prev}\">Previous</a> ");
  }
  let _ = write!(body, "Page {} of {}", page.page, page.num_pages);
  if let Some(next) = page.next_page() {
    let _ = write!(body, " <a href=\"/dashboard?page={next}\">Next</a>");
  }
  body.push_str("</nav>\n");

  body.push_str("<h2>Recent Contacts</h2>\n");
  if dashboard.recent_contacts.is_empty() {
    body.push_str("<p>No messages yet.</p>\n");
  } else {
    body.push_str("<ul>\n");
    for c in &dashboard.recent_contacts {
      contact_item(&mut body, c);
    }
    body.push_str("</ul>\n");
  }

  layout("Dashboard", &body)
}

pub fn error_page(title: &str, message: &str) -> String {
  layout(title, &format!("<p>{}</p>\n", esc(message)))
}
