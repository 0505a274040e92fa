use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kaios_terminal_backend::config::cli::load_env_file;
use kaios_terminal_backend::utils::logger;
use kaios_terminal_backend::TerminalClient;

#[derive(Parser)]
#[command(name = "terminal_probe")]
#[command(about = "Call a running kaios-terminal-backend from the command line")]
struct ProbeArgs {
    #[arg(long, env = "KAIOS_BACKEND_URL", default_value = "http://localhost:10000")]
    base_url: String,

    #[arg(long, env = "API_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// GET /api/ping
    Ping,
    /// GET /api/brief
    Brief,
    /// POST /api/cmd with the given words as the command line
    Cmd {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

async fn run(args: ProbeArgs) -> kaios_terminal_backend::Result<()> {
    let client = TerminalClient::new(&args.base_url, args.token)?;
    tracing::debug!("Probing {}", client.base_url());

    match args.action {
        Action::Ping => {
            let status = client.ping().await?;
            println!("{} {} @ {}", status.server, status.status, status.ts);
        }
        Action::Brief => {
            let brief = client.brief().await?;
            println!("{}", brief.title);
            for line in &brief.lines {
                println!("{}", line);
            }
        }
        Action::Cmd { words } => {
            let response = client.command(&words.join(" ")).await?;
            println!("{}", response.output);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env_file(None);
    let args = ProbeArgs::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return Err(e).context("probe failed");
    }

    Ok(())
}
