#[cfg(feature = "ssr")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML file with a [badge] table; falls back to the environment
    #[arg(short, long, env = "BADGE_CONFIG")]
    config: Option<std::path::PathBuf>,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use badge_web::app::App;
    use badge_web::config::{BadgeSettings, META_BADGE_CLASS, META_PLAYGROUND_URL};
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tracing::info;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,badge_web=debug".into()),
        )
        .init();

    let args = Args::parse();
    let settings = BadgeSettings::load(args.config.as_deref())?;
    if settings.agent_playground_url.is_none() {
        tracing::warn!("no agent playground URL configured; the badge will open a blank tab");
    }

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let settings = settings.clone();
                move || provide_context(settings.clone())
            },
            {
                let options = leptos_options.clone();
                move || {
                    let playground_meta = settings
                        .agent_playground_url
                        .clone()
                        .map(|url| view! { <meta name=META_PLAYGROUND_URL content=url /> });
                    let class_meta = settings
                        .class_name
                        .clone()
                        .map(|class| view! { <meta name=META_BADGE_CLASS content=class /> });

                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8" />
                                <meta name="viewport" content="width=device-width, initial-scale=1" />
                                {playground_meta}
                                {class_meta}
                                <title>"Build & deploy AI agents with Microsoft Foundry"</title>
                                <link rel="stylesheet" href="/pkg/badge-web.css" />
                                <AutoReload options=options.clone() />
                                <HydrationScripts options=options.clone() />
                            </head>
                            <body>
                                <App />
                            </body>
                        </html>
                    }
                }
            },
        )
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, "listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client code is loaded through `hydrate()` in the library
}
