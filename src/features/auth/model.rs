use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::accounts::models::Role;

/// Identity attached to the request by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_coordinator(&self) -> bool {
        self.role == Role::Coordinator
    }

    pub fn is_department(&self) -> bool {
        self.role == Role::Department
    }
}

/// Claims carried in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Which surface a session lands on after login. Every role that is not
/// coordinator, department, or admin goes to reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Workflow {
    Coordination,
    Operations,
    Administration,
    Reporting,
}

impl Workflow {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Coordinator => Workflow::Coordination,
            Role::Department => Workflow::Operations,
            Role::Admin => Workflow::Administration,
            Role::User => Workflow::Reporting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_dispatch_by_role() {
        assert_eq!(Workflow::for_role(Role::Coordinator), Workflow::Coordination);
        assert_eq!(Workflow::for_role(Role::Department), Workflow::Operations);
        assert_eq!(Workflow::for_role(Role::Admin), Workflow::Administration);
        assert_eq!(Workflow::for_role(Role::User), Workflow::Reporting);
    }
}
