use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary. Verbosity comes from
/// `RUST_LOG`, optionally set through a `.env` file.
pub fn init_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn signup_errors() -> crate::FieldErrors {
    let mut errors = crate::FieldErrors::new();
    errors.insert("email".to_string(), "email must be provided".to_string());
    errors.insert(
        "password".to_string(),
        "password must be at least 12 characters long".to_string(),
    );
    errors
}
