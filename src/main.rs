use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use credcodec::{Credential, encrypt_password, generate_salt, reencrypt_password, verify_password};
mod auth;

#[derive(Debug, Parser)]
#[command(name = "credcodec")]
#[command(
    version,
    about = "Mint, verify, and rotate encrypted credential pairs for the daily-report tracker."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Mints a credential pair for a new account
    New {
        /// Print the pair as JSON instead of plain fields
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Mints a credential pair for the provisioning default password
    Provision {
        /// Default plaintext assigned to accounts created without a password
        #[arg(long, env = "CREDCODEC_DEFAULT_PASSWORD", default_value = "Dev123!")]
        password: String,

        /// Print the pair as JSON instead of plain fields
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Checks a password against a stored credential pair
    #[command(arg_required_else_help = true)]
    Verify {
        /// Stored cipher text in iv:ciphertext hex form
        #[arg(long)]
        cipher: String,

        /// Stored per-user salt (32 hex chars)
        #[arg(long)]
        salt: String,
    },

    /// Rotates a credential: fresh salt and cipher text for a new password
    Rotate {
        /// Print the pair as JSON instead of plain fields
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn print_credential(cred: &Credential, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cred)?);
    } else {
        println!("salt: {}", cred.salt);
        println!("cipherText: {}", cred.cipher_text);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Commands::New { json } => {
            let password = auth::read_new_password()?;
            let salt = generate_salt()?;
            let cipher_text = encrypt_password(&password, &salt)?;
            print_credential(&Credential { cipher_text, salt }, json)?;
        }
        Commands::Provision { password, json } => {
            let cred = reencrypt_password(&password)?;
            print_credential(&cred, json)?;
        }
        Commands::Verify { cipher, salt } => {
            let password = auth::read_password()?;
            if !verify_password(&password, &cipher, &salt) {
                bail!("invalid credentials");
            }
            println!("password verified");
        }
        Commands::Rotate { json } => {
            let password = auth::read_new_password()?;
            let cred = reencrypt_password(&password)?;
            print_credential(&cred, json)?;
        }
    }

    Ok(())
}
