use banka_api::Application;
use banka_infra::setup_context;

// Launch the application as a background task
pub async fn spawn_app() -> String {
    let mut ctx = setup_context();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    address
}
