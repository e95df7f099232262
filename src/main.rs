#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use nightowl::app::{App, shell};
    use tower_http::compression::CompressionLayer;
    use tower_http::trace::TraceLayer;

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("invalid leptos configuration");
    let mut leptos_options = conf.leptos_options;
    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port.parse().expect("invalid PORT");
        let mut addr = leptos_options.site_addr;
        addr.set_port(port);
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "nightowl listening");
    axum::serve(listener, app).await.expect("server failed");
}

// The hydrate build is a cdylib; its entry point is `nightowl::hydrate`.
#[cfg(not(feature = "ssr"))]
fn main() {}
