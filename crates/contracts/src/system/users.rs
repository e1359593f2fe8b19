use crate::shared::list_utils::Choice;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    Manager,
    User,
    Viewer,
}

impl Role {
    pub fn all() -> [Role; 4] {
        [Role::Administrator, Role::Manager, Role::User, Role::Viewer]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Manager => "Manager",
            Role::User => "User",
            Role::Viewer => "Viewer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn all() -> [UserStatus; 2] {
        [UserStatus::Active, UserStatus::Inactive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }
}

/// Read-only user directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub last_login: NaiveDateTime,
    pub status: UserStatus,
}

impl User {
    pub fn last_login_display(&self) -> String {
        self.last_login.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Admin users tab filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserFilter {
    pub role: Choice<Role>,
    pub department: Choice<String>,
    pub status: Choice<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        self.role.admits(&user.role)
            && self.department.admits(&user.department)
            && self.status.admits(&user.status)
    }
}

pub fn filter_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    users.iter().filter(|u| filter.matches(u)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sample_data::sample_users;

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_filter_users_by_role_and_status() {
        let users = sample_users();
        let filter = UserFilter {
            role: Choice::Only(Role::User),
            ..Default::default()
        };
        assert_eq!(names(&filter_users(&users, &filter)), vec!["Bob Wilson", "Alice Johnson"]);

        let filter = UserFilter {
            role: Choice::Only(Role::User),
            status: Choice::Only(UserStatus::Active),
            ..Default::default()
        };
        assert_eq!(names(&filter_users(&users, &filter)), vec!["Bob Wilson"]);
    }

    #[test]
    fn test_filter_users_by_department() {
        let users = sample_users();
        let filter = UserFilter {
            department: Choice::Only("HR".to_string()),
            ..Default::default()
        };
        assert!(filter_users(&users, &filter).is_empty());
        assert_eq!(filter_users(&users, &UserFilter::default()), users);
    }

    #[test]
    fn test_last_login_display() {
        let users = sample_users();
        assert_eq!(users[0].last_login_display(), "2024-01-20 10:30");
    }
}
