use dioxus::prelude::*;

mod auth;
mod components;
mod role;
mod routes;

use auth::AuthState;
use role::RoleStore;
use routes::Route;

const THEME_CSS: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .init();

        server::config::load_config();
        if server::config::config().demo.seed {
            server::seed::seed_demo_data(server::store::store());
        }

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(RoleStore::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                components::Loading {}
            },
            Router::<Route> {}
        }
    }
}
