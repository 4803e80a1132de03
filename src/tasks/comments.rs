use loco_rs::prelude::*;
use sea_orm::ModelTrait;
use tracing::info;

use crate::common::visibility::Viewer;
use crate::models::{comments, posts, users};

fn print_comment(comment: &comments::Model) {
    let short_text: String = comment.text.chars().take(40).collect();
    let ellipsis = if comment.text.chars().count() > 40 {
        "..."
    } else {
        ""
    };
    println!(
        "#{} by '{}': '{short_text}{ellipsis}'",
        comment.id, comment.author
    );
}

pub struct ListComments;
#[async_trait]
impl Task for ListComments {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "comments:list".to_string(),
            detail: "print all comments, or those a user may see on recent posts (email:..)"
                .to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, vars: &task::Vars) -> Result<()> {
        let Ok(email) = vars.cli_arg("email") else {
            for comment in comments::Entity::find().all(&ctx.db).await? {
                print_comment(&comment);
            }
            return Ok(());
        };

        let user = users::Model::find_by_email(&ctx.db, email).await?;
        let viewer = Viewer::for_user(&ctx.db, user).await?;
        for post in posts::Entity::find_recent(&ctx.db).await? {
            for comment in post.find_related(comments::Entity).all(&ctx.db).await? {
                let visibility = comment.visibility(&ctx.db).await?;
                if viewer.is_admin() || visibility.allows(&viewer) {
                    print_comment(&comment);
                }
            }
        }
        Ok(())
    }
}

pub struct DeleteComment;
#[async_trait]
impl Task for DeleteComment {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "comments:delete".to_string(),
            detail: "delete a comment by id (id:..)".to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, vars: &task::Vars) -> Result<()> {
        let id: i32 = vars
            .cli_arg("id")?
            .parse()
            .map_err(|_| Error::Message("id must be an integer".to_string()))?;
        let result = comments::Entity::delete_by_id(id).exec(&ctx.db).await?;
        if result.rows_affected == 0 {
            println!("no comment with id {id}");
        } else {
            info!("deleted comment {id}");
        }
        Ok(())
    }
}
