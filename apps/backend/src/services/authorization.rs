//! Resource-level authorization decisions.

use std::fmt;

use crate::repos::{Restaurant, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceOperation::Create => "create",
            ResourceOperation::Read => "read",
            ResourceOperation::Update => "update",
            ResourceOperation::Delete => "delete",
        };
        f.write_str(s)
    }
}

/// The authenticated user an operation runs on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub role: Role,
}

pub trait AuthorizationPolicy: Send + Sync {
    fn authorize(&self, actor: &Actor, restaurant: &Restaurant, operation: ResourceOperation)
        -> bool;
}

/// Anyone may create or read; only the creator may update or delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerPolicy;

impl AuthorizationPolicy for OwnerPolicy {
    fn authorize(
        &self,
        actor: &Actor,
        restaurant: &Restaurant,
        operation: ResourceOperation,
    ) -> bool {
        match operation {
            ResourceOperation::Create | ResourceOperation::Read => true,
            ResourceOperation::Update | ResourceOperation::Delete => {
                restaurant.created_by_id == Some(actor.id)
            }
        }
    }
}

/// Allows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthorizationPolicy for AllowAll {
    fn authorize(&self, _: &Actor, _: &Restaurant, _: ResourceOperation) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(created_by_id: Option<i32>) -> Restaurant {
        Restaurant {
            id: 1,
            name: "Bistro".into(),
            description: None,
            category: None,
            has_delivery: false,
            contact_email: None,
            contact_number: None,
            city: "Krakow".into(),
            street: "Dluga 1".into(),
            postal_code: None,
            created_by_id,
        }
    }

    const OWNER: Actor = Actor {
        id: 7,
        role: Role::Manager,
    };
    const STRANGER: Actor = Actor {
        id: 8,
        role: Role::Admin,
    };

    #[test]
    fn owner_may_modify_own_restaurant() {
        let r = restaurant(Some(7));
        for op in [
            ResourceOperation::Read,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            assert!(OwnerPolicy.authorize(&OWNER, &r, op), "{op}");
        }
    }

    #[test]
    fn others_may_only_read() {
        let r = restaurant(Some(7));
        assert!(OwnerPolicy.authorize(&STRANGER, &r, ResourceOperation::Read));
        assert!(!OwnerPolicy.authorize(&STRANGER, &r, ResourceOperation::Update));
        assert!(!OwnerPolicy.authorize(&STRANGER, &r, ResourceOperation::Delete));
    }

    #[test]
    fn orphaned_restaurants_cannot_be_modified() {
        let r = restaurant(None);
        assert!(!OwnerPolicy.authorize(&OWNER, &r, ResourceOperation::Delete));
        assert!(AllowAll.authorize(&OWNER, &r, ResourceOperation::Delete));
    }
}
