use super::Context;
use crate::cli::ProfileCommand;
use oxy_client::{Attachment, ProfileApi};
use shared::models::{ProfileUpdate, ProfileView};

fn print_profile(view: &ProfileView) {
    let details = view.profile.clone().unwrap_or_default();
    println!("Username:  {}", view.username.as_deref().unwrap_or("-"));
    println!("Email:     {}", view.email.as_deref().unwrap_or("-"));
    println!("Full name: {}", details.full_name.as_deref().unwrap_or("-"));
    println!("Bio:       {}", details.bio.as_deref().unwrap_or("-"));
    println!("Image:     {}", view.image_path().unwrap_or("-"));
}

pub async fn run(ctx: &mut Context, command: ProfileCommand) -> anyhow::Result<()> {
    let route = ctx.own_route("/profile")?;
    ctx.authorize(&route)?;

    let view = match command {
        ProfileCommand::Show => ctx.client.profile().await?,
        ProfileCommand::Update { full_name, bio } => {
            let view = ctx
                .client
                .update_profile(&ProfileUpdate { full_name, bio })
                .await?;
            audit_log!(ctx.user_id(), "update", "profile");
            view
        }
        ProfileCommand::Image { path } => {
            let image = Attachment::from_path(&path).await?;
            if !image.content_type.starts_with("image/") {
                anyhow::bail!("{} is not an image ({})", path.display(), image.content_type);
            }
            let view = ctx.client.upload_profile_image(&image).await?;
            audit_log!(ctx.user_id(), "upload", "profile-image", image.file_name.clone());
            view
        }
    };
    ctx.emit(&view, || print_profile(&view))
}
