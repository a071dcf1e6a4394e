#[cfg(not(target_arch = "wasm32"))]
mod native {
    extern crate communityhub;

    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::Context;
    use clap::Parser;
    use communityhub::auth::SignupForm;
    use communityhub::models::models::Category;
    use communityhub::{App, JsonFileStore, MockDirectory};
    use tracing_subscriber::EnvFilter;

    /// Renders one MyCommunityHub screen to stdout as HTML.
    #[derive(Parser, Debug)]
    #[command(name = "hub-preview", version, about)]
    pub struct Args {
        /// Screen to render, e.g. `/`, `/communities/1`, `/search?q=water`.
        #[arg(default_value = "/")]
        pub route: String,

        /// JSON file standing in for browser storage.
        #[arg(long, default_value = "hub-storage.json")]
        pub storage: PathBuf,

        /// Go straight past the onboarding carousel.
        #[arg(long)]
        pub skip_onboarding: bool,

        /// Sign up a member with this name before rendering.
        #[arg(long)]
        pub sign_up: Option<String>,

        #[arg(long, default_value = "Chennai, Tamil Nadu")]
        pub location: String,

        /// Sign in with the demo Google account before rendering.
        #[arg(long, conflicts_with = "sign_up")]
        pub google: bool,

        /// Publish a post with this text before rendering.
        #[arg(long)]
        pub post: Option<String>,

        #[arg(long, default_value = "Community update")]
        pub title: String,

        /// Category for `--post`: news, event, alert, scheme or weather.
        #[arg(long, default_value = "news")]
        pub category: String,

        /// Like or unlike the post with this id before rendering.
        #[arg(long)]
        pub like: Option<u64>,

        /// Follow the member with this id before rendering.
        #[arg(long)]
        pub follow: Option<String>,

        /// Sign out before rendering.
        #[arg(long)]
        pub logout: bool,
    }

    fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    fn email_for(name: &str) -> String {
        let local: String = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".")
            .to_lowercase();
        format!("{}@example.in", local)
    }

    pub async fn run() -> anyhow::Result<()> {
        init_tracing();
        let args = Args::parse();
        tracing::info!(storage = %args.storage.display(), route = %args.route, "preview");

        let kv = JsonFileStore::new(&args.storage);
        let mut app = App::new(kv, Arc::new(MockDirectory::new()));

        if args.skip_onboarding || args.sign_up.is_some() || args.google {
            app.finish_onboarding();
        }
        if let Some(name) = &args.sign_up {
            let form = SignupForm {
                name: name.clone(),
                email: email_for(name),
                location: args.location.clone(),
                password: "preview".to_string(),
                confirm_password: "preview".to_string(),
            };
            app.navigate("/signup");
            app.signup(form).await.context("sign up failed")?;
        }
        if args.google {
            app.login_with_google().await.context("google sign-in failed")?;
        }
        if let Some(content) = &args.post {
            app.navigate("/create-post");
            let category = Category::from_id(&args.category);
            app.edit_post_form(|form| {
                form.title = args.title.clone();
                form.description = content.clone();
                form.category = Some(category);
            });
            let post = app.submit_post().await.context("could not publish post")?;
            tracing::info!(id = post.id, "published");
        }
        if let Some(id) = args.like {
            app.toggle_like(id)?;
        }
        if let Some(id) = &args.follow {
            app.follow(id)?;
        }
        if args.logout {
            app.logout()?;
        }

        app.navigate(&args.route);
        let html = app.render()?;
        println!("{}", html);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    native::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
