use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use campusmedia::modules::users::model::{NewUser, Role};
use campusmedia::modules::users::repository::UserRepository;
use campusmedia::router::init_router;
use campusmedia::state::init_app_state;
use campusmedia::utils::password::ensure_hashed;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Seed command, bypasses HTTP entirely
    if args.len() > 1 && args[1] == "create-admin" {
        handle_create_admin(args).await;
        return;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the
                // `axum::rejection` target at TRACE level
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;
    let app = init_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("🚀 Server running on http://localhost:{port}");
    println!("📚 Swagger UI available at http://localhost:{port}/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:{port}/scalar");
    axum::serve(listener, app).await.unwrap();
}

async fn handle_create_admin(args: Vec<String>) {
    if args.len() != 7 {
        eprintln!(
            "Usage: {} create-admin <first_name> <last_name> <email> <register_number> <password>",
            args[0]
        );
        std::process::exit(1);
    }

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let password = match ensure_hashed(&args[6]) {
        Ok(hashed) => hashed,
        Err(e) => {
            eprintln!("❌ Error hashing password: {:?}", e.error);
            std::process::exit(1);
        }
    };

    let new_user = NewUser {
        first_name: args[2].clone(),
        last_name: args[3].clone(),
        email: args[4].clone(),
        register_number: args[5].clone(),
        phone: "0000000000".to_string(),
        role: Role::Admin,
        password,
    };

    match UserRepository::create(&pool, &new_user).await {
        Ok(user) => {
            println!("✅ Admin account created successfully!");
            println!("   Email: {}", user.email);
            println!("   Name: {} {}", user.first_name, user.last_name);
        }
        Err(e) => {
            eprintln!("❌ Error creating admin account: {}", e.error);
            std::process::exit(1);
        }
    }
}
