//! Case-insensitive search over the user list.

use crate::user::User;

/// Users whose name, email, or username contains `term` (any case).
/// An empty term matches everyone. Order is preserved.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.to_lowercase();
    users.iter().filter(|u| matches(u, &term)).collect()
}

fn matches(user: &User, lowered_term: &str) -> bool {
    user.name.to_lowercase().contains(lowered_term)
        || user.email.to_lowercase().contains(lowered_term)
        || user.username.to_lowercase().contains(lowered_term)
}

/// "Showing 3 of 10 users".
pub fn summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} users")
}
