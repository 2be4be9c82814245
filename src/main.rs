use std::error::Error;

use bpaf::{Bpaf, Parser};
use promptpay::{Amount, MerchantId, PayloadBuilder, PaymentInfo};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

mod config;
mod inspect;

#[derive(Clone, Debug, Bpaf)]
enum Command {
    /// Print the payload for a merchant, optionally with a fixed amount
    #[bpaf(command)]
    Generate {
        /// Amount in baht, e.g. 150 or 99.50. Without one the payer enters the amount
        #[bpaf(short, long, argument("AMOUNT"))]
        amount: Option<Amount>,
        /// Mobile number or 13 digit national id. Defaults to the configured merchant
        #[bpaf(positional("IDENTIFIER"))]
        identifier: Option<String>,
    },
    /// Print the fields and payment details of a payload
    #[bpaf(command)]
    Inspect {
        #[bpaf(positional("PAYLOAD"))]
        payload: String,
    },
    /// Check the checksum and structure of a payload
    #[bpaf(command)]
    Verify {
        #[bpaf(positional("PAYLOAD"))]
        payload: String,
    },
    /// Print the CRC-16/CCITT-FALSE checksum of a string
    #[bpaf(command)]
    Crc {
        #[bpaf(positional("INPUT"))]
        input: String,
    },
    /// Show the config file location and contents
    #[bpaf(command)]
    Config,
}

#[derive(Clone, Debug, Bpaf)]
#[bpaf(options, version, descr(env!("CARGO_PKG_DESCRIPTION")))]
struct Cli {
    #[bpaf(external(command))]
    command: Command,
}

/// Resolve the identifier and amount, falling back to the config file
fn generate(identifier: Option<String>, amount: Option<Amount>) -> Result<String, Box<dyn Error>> {
    let (identifier, amount) = match identifier {
        Some(identifier) => (identifier, amount),
        None => {
            let config = Config::load_or_create()?;
            let identifier = config.merchant.identifier.ok_or(
                "no identifier given and no merchant.identifier set in the config file",
            )?;
            debug!("using configured merchant {identifier}");
            (identifier, amount.or(config.merchant.default_amount))
        },
    };

    if identifier.is_empty() {
        return Err("merchant identifier is empty".into());
    }
    let merchant = MerchantId::new(&identifier);
    if merchant.as_str().is_empty() {
        return Err(format!("merchant identifier {identifier:?} contains no digits").into());
    }
    info!("generating payload for {} {merchant}", merchant.kind());

    let mut builder = PayloadBuilder::new(&merchant);
    if let Some(amount) = amount.filter(|a| !a.is_zero()) {
        builder = builder.amount(amount);
    }
    Ok(builder.build()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli().run();
    match cli.command {
        Command::Generate { amount, identifier } => {
            println!("{}", generate(identifier, amount)?);
        },
        Command::Inspect { payload } => {
            print!("{}", inspect::render(payload.trim())?);
        },
        Command::Verify { payload } => {
            let info = PaymentInfo::parse(payload.trim())?;
            println!("checksum ok, pays {} {}", info.merchant.kind(), info.merchant);
        },
        Command::Crc { input } => {
            println!("{}", emv_qr_core::crc16_hex(&input));
        },
        Command::Config => {
            let path = Config::path().ok_or("could not determine config directory")?;
            let config = Config::load_or_create()?;
            println!("config file: {}", path.display());
            println!(
                "identifier:  {}",
                config.merchant.identifier.as_deref().unwrap_or("(unset)")
            );
            match config.merchant.default_amount {
                Some(amount) => println!("amount:      {amount}"),
                None => println!("amount:      (unset)"),
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_from_arguments() {
        let payload = generate(Some("081-234-5678".into()), Some("150".parse().unwrap())).unwrap();
        assert_eq!(
            payload,
            promptpay::generate_payload("0812345678", 150.0).unwrap()
        );
    }

    #[test]
    fn zero_amount_is_omitted() {
        let payload = generate(Some("0812345678".into()), Some(Amount::ZERO)).unwrap();
        assert_eq!(payload, promptpay::generate_payload("0812345678", 0.0).unwrap());
    }

    #[test]
    fn rejects_identifiers_without_digits() {
        assert!(generate(Some("".into()), None).is_err());
        assert!(generate(Some("n/a".into()), None).is_err());
    }

    #[test]
    fn parses_generate_command() {
        let cli = cli()
            .run_inner(&["generate", "-a", "99.5", "0812345678"])
            .unwrap();
        match cli.command {
            Command::Generate { amount, identifier } => {
                assert_eq!(amount, Some(Amount::from_satang(9950)));
                assert_eq!(identifier.as_deref(), Some("0812345678"));
            },
            other => panic!("unexpected command {other:?}"),
        }
        assert!(super::cli()
            .run_inner(&["generate", "--amount", "1.234", "0812345678"])
            .is_err());
    }

    #[test]
    fn generate_docs() {
        let app = env!("CARGO_PKG_NAME");
        let options = cli();

        let roff = options.render_manpage(app, bpaf::doc::Section::General, None, None, None);
        std::fs::write("docs/promptpay-qr.1", roff).expect("failed to write manpage");

        let md = options.header("").render_markdown(app);
        std::fs::write("docs/README.md", md).expect("failed to write markdown docs");
    }
}
