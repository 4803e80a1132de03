use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use loco_rs::prelude::*;
use tracing::debug;

use crate::models::users;

/// Content tagged with this group is visible to everyone.
pub const PUBLIC_GROUP: &str = "public";
/// Content tagged with this group is visible to any authenticated user.
pub const LOGGED_IN_GROUP: &str = "loggedin";
/// Members of this group may see and manage everything.
pub const ADMIN_GROUP: &str = "admin";

/// The caller of a request: an authenticated user plus their group
/// memberships, or the anonymous viewer with neither.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub user: Option<users::Model>,
    pub group_names: Vec<String>,
}

impl Viewer {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a viewer for a user, loading their group memberships
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn for_user(db: &DatabaseConnection, user: users::Model) -> Result<Self> {
        let group_names = user.group_names(db).await?;
        Ok(Self {
            user: Some(user),
            group_names,
        })
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.group_names.iter().any(|g| g == ADMIN_GROUP)
    }
}

/// What a content item declares about who may see it: its group tags and,
/// for comments, the user who wrote it.
#[derive(Debug, Clone, Default, derive_more::Constructor)]
pub struct Visibility {
    pub group_names: Vec<String>,
    pub owner_id: Option<i32>,
}

impl Visibility {
    /// Decides whether `viewer` may see the item, in this order:
    /// "public" tag, "loggedin" tag for authenticated viewers, ownership,
    /// and finally group-set intersection. A viewer without any group
    /// affiliation is denied at that last step.
    ///
    /// Admin membership is itself just a group; callers that let admins
    /// bypass the per-item check use [`Viewer::is_admin`] before calling.
    #[must_use]
    pub fn allows(&self, viewer: &Viewer) -> bool {
        if self.group_names.iter().any(|g| g == PUBLIC_GROUP) {
            return true;
        }
        if viewer.is_authenticated() && self.group_names.iter().any(|g| g == LOGGED_IN_GROUP) {
            return true;
        }
        if let (Some(owner_id), Some(user)) = (self.owner_id, viewer.user.as_ref()) {
            if owner_id == user.id {
                return true;
            }
        }
        if viewer.group_names.is_empty() {
            return false;
        }
        self.group_names
            .iter()
            .any(|g| viewer.group_names.contains(g))
    }
}

/// Optional-auth extractor: a valid bearer token yields the authenticated
/// viewer with loaded groups, anything else degrades to anonymous instead
/// of rejecting the request.
impl FromRequestParts<AppContext> for Viewer {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Ok(jwt) = auth::JWT::from_request_parts(parts, ctx).await else {
            return Ok(Self::anonymous());
        };
        let Ok(user) = users::Model::find_by_pid(&ctx.db, &jwt.claims.pid).await else {
            debug!("bearer token carried an unknown pid, treating as anonymous");
            return Ok(Self::anonymous());
        };
        Self::for_user(&ctx.db, user).await
    }
}
