//! Plain-text views of users and the list page.

use std::fmt::Write;

use crate::search::{filter_users, summary};
use crate::store::UserState;
use crate::user::User;

/// Compact card used in the list.
pub fn user_card(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  #{:<14} {}  @{}", user.id, user.name, user.username);
    let _ = writeln!(out, "  {:15} email    {}", "", user.email);
    let _ = writeln!(out, "  {:15} phone    {}", "", user.phone);
    let _ = writeln!(out, "  {:15} website  {}", "", user.website);
    let _ = writeln!(out, "  {:15} city     {}", "", user.address.city);
    out
}

/// Full record, as shown by `/view`.
pub fn user_details(user: &User) -> String {
    let a = &user.address;
    let c = &user.company;
    let mut out = String::new();
    let _ = writeln!(out, "  User Details");
    let _ = writeln!(out, "  ────────────");
    let _ = writeln!(out, "  {}  @{}", user.name, user.username);
    let _ = writeln!(out, "  avatar   {}", user.avatar_url(200));
    let _ = writeln!(out);
    let _ = writeln!(out, "  Email    {}", user.email);
    let _ = writeln!(out, "  Phone    {}", user.phone);
    let _ = writeln!(out, "  Website  {}", user.website);
    let _ = writeln!(out, "  Address  {}, {}", a.suite, a.street);
    let _ = writeln!(out, "           {}, {}", a.city, a.zipcode);
    let _ = writeln!(out, "  Company  {}", c.name);
    let _ = writeln!(out, "           \"{}\"", c.catch_phrase);
    let _ = writeln!(out, "           {}", c.bs);
    out
}

/// Fetch error panel.
pub fn error_panel(message: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  ✗ Error");
    let _ = writeln!(out, "    {message}");
    let _ = writeln!(out, "    type /reload to Try Again");
    out
}

/// The list page: loading line, error panel, or the filtered cards.
pub fn user_list(state: &UserState, term: &str) -> String {
    if state.loading {
        return "  loading users...\n".to_string();
    }
    if let Some(error) = &state.error {
        return error_panel(error);
    }

    let shown = filter_users(&state.users, term);
    let mut out = String::new();
    let _ = writeln!(out, "  {}", summary(shown.len(), state.users.len()));
    let _ = writeln!(out);

    if shown.is_empty() {
        let _ = writeln!(out, "  No users found");
        if term.is_empty() {
            let _ = writeln!(out, "  Get started by adding your first user.");
            let _ = writeln!(out, "  type /add to Add User");
        } else {
            let _ = writeln!(out, "  No users match your search criteria.");
        }
        return out;
    }

    for user in shown {
        out.push_str(&user_card(user));
        out.push('\n');
    }
    out
}

/// Confirmation text for deleting `user`.
pub fn delete_prompt(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  ⚠ Delete User");
    let _ = writeln!(out, "  {}  @{}", user.name, user.username);
    let _ = writeln!(
        out,
        "  Are you sure you want to delete this user? This action cannot be undone."
    );
    out
}
