use clap::Args;
use maanushi_app::{
    auth::SessionSecret,
    context::AppContext,
    database::DEFAULT_MAX_CONNECTIONS,
    domain::admins::data::AdminSignUp,
};

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    /// Admin login email
    #[arg(long)]
    email: String,

    /// Contact phone number
    #[arg(long)]
    phone: String,

    /// Initial password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Session signing key
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    session_secret: String,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    let secret = SessionSecret::new(args.session_secret.into_bytes())
        .map_err(|error| format!("invalid session secret: {error}"))?;

    let app = AppContext::from_database_url(&args.database_url, DEFAULT_MAX_CONNECTIONS, secret)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let admin = app
        .admins
        .sign_up(AdminSignUp {
            email: args.email,
            password: args.password,
            phone_num: args.phone,
        })
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("admin_uuid: {}", admin.uuid);
    println!("admin_email: {}", admin.email);

    Ok(())
}
