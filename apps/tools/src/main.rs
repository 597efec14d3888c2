use anyhow::Result;
use clap::{Parser, Subcommand};
use relay_client::{
    Inquiry, RelayClient, RelayConfig, DEFAULT_ACCESS_KEY, DEFAULT_ENDPOINT, DEFAULT_SUBJECT,
};
use site_content::Route;
use url::Url;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Post a test inquiry through the form relay and print the receipt.
    SendTest {
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        #[arg(long, default_value = DEFAULT_ACCESS_KEY)]
        access_key: String,
        #[arg(long, default_value = DEFAULT_SUBJECT)]
        subject: String,
        #[arg(long, default_value = "Test Sender")]
        name: String,
        #[arg(long, default_value = "test@example.com")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "Test inquiry, please ignore.")]
        message: String,
    },
    /// List every page path the site serves.
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::SendTest {
            endpoint,
            access_key,
            subject,
            name,
            email,
            phone,
            company,
            message,
        } => {
            let config = RelayConfig {
                endpoint: Url::parse(&endpoint)?,
                access_key,
                subject,
            };
            let client = RelayClient::new(config);
            let inquiry = Inquiry {
                name,
                email,
                phone,
                company,
                message,
            };
            let receipt = client.submit(&inquiry).await?;
            println!("delivered submission_id={}", receipt.submission_id);
            if let Some(note) = receipt.remote_message {
                println!("relay says: {note}");
            }
        }
        Command::Routes => {
            for route in Route::ALL {
                println!("{}  {}", route.as_path(), route.page_title());
            }
        }
    }

    Ok(())
}
