mod application;
mod auth;
mod dto;
mod error;
mod repository;
mod routing;
mod service;

use application::ApplicationEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // .env is optional as long as variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    let _log_guard = application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env).await?;
    let middleware = application::create_middleware(&env, &state);
    let app = application::create_application(state, middleware);

    let served = application::serve_application(env.bind_address, app).await;

    application::close(state_to_close).await;

    served
}
