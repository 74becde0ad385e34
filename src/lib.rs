use api::{setup_config, setup_router, setup_state};

pub async fn run() {
    let config = setup_config();
    let state = setup_state(&config).await;

    let listener = tokio::net::TcpListener::bind(config.get_server_url())
        .await
        .expect("bind to port");
    tracing::debug!("listening on http://{}", listener.local_addr().unwrap());

    let router = setup_router(config, state);
    axum::serve(listener, router).await.expect("start server");
}
