use crate::models::user::User;
use crate::view::page::{escape_html, render_document};
use std::fmt::Write;

/// Render the users page for an already loaded list
///
/// Rows keep the order of `users` and carry the user id in `data-key`.
/// An empty list renders the heading with an empty `<ul>`.
pub fn render_users_page(users: &[User]) -> String {
    let mut body = String::with_capacity(128 + users.len() * 48);

    body.push_str("<main class=\"p-4\">");
    body.push_str("<h1 class=\"text-2xl font-bold\">Users</h1>");
    body.push_str("<ul class=\"mt-2 list-disc pl-5\">");

    for user in users {
        let _ = write!(
            body,
            "<li data-key=\"{id}\">{id}. {name}</li>",
            id = user.id,
            name = escape_html(&user.name)
        );
    }

    body.push_str("</ul></main>");

    render_document("Users", &body)
}
