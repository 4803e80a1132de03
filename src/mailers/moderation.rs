// notifications for the site owner
#![allow(non_upper_case_globals)]

use loco_rs::prelude::*;
use serde_json::json;

use crate::common::settings::Settings;
use crate::common::visibility::ADMIN_GROUP;
use crate::models::{comments, users};

static account_created: Dir<'_> = include_dir!("src/mailers/moderation/account_created");
static comment_posted: Dir<'_> = include_dir!("src/mailers/moderation/comment_posted");

pub struct ModerationMailer {}
impl Mailer for ModerationMailer {}
impl ModerationMailer {
    /// Notifies the configured address that an account was created
    ///
    /// # Errors
    ///
    /// When email sending fails
    pub async fn account_created(ctx: &AppContext, user: &users::Model) -> Result<()> {
        let settings = Settings::from_context(ctx);
        Self::mail_template(
            ctx,
            &account_created,
            mailer::Args {
                to: settings.notify_email,
                locals: json!({
                  "id": user.id,
                  "name": user.name,
                  "email": user.email,
                  "wantNewsletter": user.want_newsletter,
                }),
                ..Default::default()
            },
        )
        .await?;
        Ok(())
    }

    /// Notifies the configured address about a new comment. An "admin"
    /// visibility is reported as "private".
    ///
    /// # Errors
    ///
    /// When email sending fails
    pub async fn comment_posted(
        ctx: &AppContext,
        comment: &comments::Model,
        visibility: &str,
    ) -> Result<()> {
        let settings = Settings::from_context(ctx);
        let audience = if visibility == ADMIN_GROUP {
            "private"
        } else {
            visibility
        };
        let parent = match (comment.post_id, comment.photo_id) {
            (Some(post_id), _) => format!("post {post_id}"),
            (_, Some(photo_id)) => format!("photo {photo_id}"),
            _ => "nothing".to_string(),
        };
        Self::mail_template(
            ctx,
            &comment_posted,
            mailer::Args {
                to: settings.notify_email,
                locals: json!({
                  "id": comment.id,
                  "author": comment.author,
                  "text": comment.text,
                  "audience": audience,
                  "parent": parent,
                }),
                ..Default::default()
            },
        )
        .await?;
        Ok(())
    }
}
