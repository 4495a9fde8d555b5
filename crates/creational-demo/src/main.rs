//! creational CLI - console walkthrough of the creational design patterns

use anyhow::{bail, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use creational_core::builder::{Computer, ComputerBuilder, ComputerDirector, Profile};
use creational_core::config::AppConfig;
use creational_core::explanation::{Pattern, PatternExplanation};
use creational_core::notifications::{
    select_factory, Environment, NotificationFamily, NotificationReceipt, NotificationType,
    Recipients,
};
use creational_core::payments::{select_creator, PaymentProvider, PaymentReceipt};
use creational_core::prototype::{default_registry, EmailTemplate};
use creational_core::render;
use creational_core::tui::MenuArgs;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "creational")]
#[command(about = "Walk through the five creational design patterns")]
#[command(version)]
pub struct Args {
    /// Print debug logs to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a simulated payment (Factory Method)
    Pay(PayArgs),
    /// Send simulated notifications (Abstract Factory)
    Notify(NotifyArgs),
    /// Build a computer specification (Builder)
    Build(BuildArgs),
    /// Clone an email template from the registry (Prototype)
    Clone(CloneArgs),
    /// Show or initialize the application configuration (Singleton)
    Config(ConfigArgs),
    /// Print the explanation of a pattern
    Explain(ExplainArgs),
    /// Start the interactive walkthrough (default when no command is given)
    Menu(MenuCliArgs),
}

#[derive(ClapArgs, Debug)]
pub struct PayArgs {
    /// Payment gateway: paystack, flutterwave, stripe or bank-transfer
    #[arg(short, long)]
    pub provider: PaymentProvider,

    /// Amount to pay; must be greater than zero
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Decimal,
}

#[derive(ClapArgs, Debug)]
pub struct NotifyArgs {
    /// Environment: production or sandbox
    #[arg(short, long, default_value = "sandbox")]
    pub env: Environment,

    /// Channel: email, sms, push or all
    #[arg(short, long, default_value = "all")]
    pub kind: NotificationType,

    /// Email recipient
    #[arg(long)]
    pub to: Option<String>,

    /// SMS phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Push device id
    #[arg(long)]
    pub device: Option<String>,

    /// Message body used for every channel
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct BuildArgs {
    /// Canned configuration: office or gaming
    #[arg(short, long, conflicts_with_all = ["cpu", "ram", "storage", "gpu", "wifi", "rgb"])]
    pub profile: Option<Profile>,

    #[arg(long)]
    pub cpu: Option<String>,

    /// RAM in GB
    #[arg(long)]
    pub ram: Option<u32>,

    /// Storage in GB
    #[arg(long)]
    pub storage: Option<u32>,

    #[arg(long)]
    pub gpu: Option<String>,

    #[arg(long)]
    pub wifi: bool,

    #[arg(long)]
    pub rgb: bool,
}

#[derive(ClapArgs, Debug)]
pub struct CloneArgs {
    /// Registry key (case-insensitive)
    #[arg(default_value = "WelcomeEmail")]
    pub key: String,

    /// Placeholder values, e.g. --set Name=Angelo
    #[arg(short = 's', long = "set", value_parser = parse_placeholder)]
    pub values: Vec<(String, String)>,

    /// List registered keys instead of cloning
    #[arg(short, long)]
    pub list: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// New environment name
    #[arg(short, long)]
    pub env: Option<String>,

    /// New base URL
    #[arg(short, long)]
    pub base_url: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ExplainArgs {
    /// singleton, factory-method, abstract-factory, builder or prototype
    pub pattern: Pattern,
}

#[derive(ClapArgs, Debug, Default)]
pub struct MenuCliArgs {
    /// Open one pattern's walkthrough directly
    #[arg(short, long)]
    pub pattern: Option<Pattern>,
}

impl From<MenuCliArgs> for MenuArgs {
    fn from(args: MenuCliArgs) -> Self {
        MenuArgs {
            start: args.pattern,
        }
    }
}

/// Parse `Token=value`
fn parse_placeholder(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((token, value)) if !token.trim().is_empty() => {
            Ok((token.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected Token=value, got '{}'", s)),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn pay(args: &PayArgs) -> Result<PaymentReceipt> {
    if args.amount <= Decimal::ZERO {
        bail!("Invalid amount. Amount must be greater than zero.");
    }
    Ok(PaymentReceipt::issue(&select_creator(args.provider), args.amount))
}

fn notify(args: &NotifyArgs) -> NotificationReceipt {
    let mut recipients = Recipients::default();
    if let Some(to) = &args.to {
        recipients.email = to.clone();
    }
    if let Some(phone) = &args.phone {
        recipients.phone = phone.clone();
    }
    if let Some(device) = &args.device {
        recipients.device_id = device.clone();
    }
    if let Some(message) = &args.message {
        recipients.email_message = message.clone();
        recipients.sms_message = message.clone();
        recipients.push_message = message.clone();
    }

    let family = NotificationFamily::from_factory(select_factory(args.env).as_ref());
    NotificationReceipt::issue(&family, args.kind, &recipients)
}

fn build(args: &BuildArgs) -> creational_core::Result<Computer> {
    let mut builder = ComputerBuilder::new();
    if let Some(profile) = args.profile {
        return ComputerDirector::new(&mut builder).build(profile);
    }

    builder
        .set_cpu(args.cpu.clone().unwrap_or_default())
        .set_ram(args.ram.unwrap_or(0))
        .set_storage(args.storage.unwrap_or(0));
    if let Some(gpu) = &args.gpu {
        builder.set_gpu(gpu.clone());
    }
    if args.wifi {
        builder.enable_wifi();
    }
    if args.rgb {
        builder.enable_rgb();
    }
    builder.build()
}

fn clone_template(args: &CloneArgs) -> Result<EmailTemplate> {
    let registry = default_registry()?;
    let mut email = registry.create_clone(&args.key)?;
    for (token, value) in &args.values {
        email.fill_placeholder(token, value);
    }
    Ok(email)
}

fn run_command(command: Command) -> Result<()> {
    match command {
        Command::Pay(args) => {
            let receipt = pay(&args)?;
            render::heading("Payment factory method");
            render::success(&receipt.confirmation);
            println!();
            for line in receipt.lines().iter().chain(receipt.breakdown().iter()) {
                render::info(line);
            }
        }
        Command::Notify(args) => {
            let receipt = notify(&args);
            render::heading(&format!("{} notifications", receipt.environment));
            for line in &receipt.confirmations {
                render::success(line);
            }
            println!();
            for line in receipt.breakdown() {
                render::info(&line);
            }
        }
        Command::Build(args) => {
            let computer = build(&args)?;
            render::heading("Computer built");
            render::success(&computer.to_string());
        }
        Command::Clone(args) => {
            if args.list {
                for key in default_registry()?.keys() {
                    println!("{}", key);
                }
                return Ok(());
            }
            let email = clone_template(&args)?;
            render::heading(&format!("Clone of {}", args.key));
            println!("{}", email);
        }
        Command::Config(args) => {
            let config = AppConfig::instance();
            if args.env.is_some() || args.base_url.is_some() {
                let current = config.snapshot();
                config.initialize(
                    args.env.unwrap_or(current.environment_name),
                    args.base_url.unwrap_or(current.base_url),
                );
            }
            let again = AppConfig::instance();
            render::heading("Application configuration");
            render::info(&format!("Environment: {}", config.environment_name()));
            render::info(&format!("Base URL: {}", config.base_url()));
            render::success(&format!("Same instance? {}", config.is_same_instance(again)));
        }
        Command::Explain(args) => {
            let explanation = PatternExplanation::for_pattern(args.pattern)?;
            render::print_explanation(&explanation);
        }
        Command::Menu(args) => run_menu(args.into())?,
    }
    Ok(())
}

fn run_menu(args: MenuArgs) -> Result<()> {
    let result = creational_core::run(args);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(command = ?args.command, "parsed arguments");

    let result = match args.command {
        Some(command) => run_command(command),
        // No subcommand provided, default to the interactive walkthrough
        None => run_menu(MenuArgs::default()),
    };

    if let Err(e) = result {
        render::failure(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_command_means_menu() {
        assert!(parse(&["creational"]).command.is_none());
    }

    #[test]
    fn test_pay_parses_provider_and_amount() {
        let Some(Command::Pay(args)) = parse(&["creational", "pay", "-p", "stripe", "-a", "250.50"]).command
        else {
            panic!("expected pay command");
        };
        assert_eq!(args.provider, PaymentProvider::Stripe);
        let receipt = pay(&args).unwrap();
        assert_eq!(receipt.confirmation, "Processing $250.50 using Stripe gateway...");
    }

    #[test]
    fn test_pay_rejects_non_positive_amount() {
        for amount in ["0", "-5"] {
            let Some(Command::Pay(args)) =
                parse(&["creational", "pay", "--provider", "paystack", "--amount", amount]).command
            else {
                panic!("expected pay command");
            };
            assert!(pay(&args).is_err());
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["creational", "pay", "-p", "paypal", "-a", "1"]).is_err());
    }

    #[test]
    fn test_notify_defaults_to_sandbox_all() {
        let Some(Command::Notify(args)) = parse(&["creational", "notify"]).command else {
            panic!("expected notify command");
        };
        let receipt = notify(&args);
        assert_eq!(receipt.environment, Environment::Sandbox);
        assert_eq!(receipt.confirmations.len(), 3);
        assert!(receipt.confirmations.iter().all(|c| c.starts_with("[SANDBOX]")));
    }

    #[test]
    fn test_notify_overrides_destination() {
        let Some(Command::Notify(args)) =
            parse(&["creational", "notify", "-e", "production", "-k", "email", "--to", "x@y.z", "-m", "hi"])
                .command
        else {
            panic!("expected notify command");
        };
        let receipt = notify(&args);
        assert_eq!(receipt.confirmations, vec!["[PROD] Email sent to x@y.z via SendGrid: hi"]);
    }

    #[test]
    fn test_build_profile_and_custom() {
        let Some(Command::Build(args)) = parse(&["creational", "build", "-p", "office"]).command else {
            panic!("expected build command");
        };
        let office = build(&args).unwrap();

        let Some(Command::Build(args)) = parse(&[
            "creational", "build", "--cpu", "Intel i5", "--ram", "16", "--storage", "512", "--wifi",
        ])
        .command
        else {
            panic!("expected build command");
        };
        assert_eq!(build(&args).unwrap(), office);
    }

    #[test]
    fn test_build_without_cpu_fails() {
        let Some(Command::Build(args)) = parse(&["creational", "build", "--ram", "8"]).command else {
            panic!("expected build command");
        };
        assert!(matches!(
            build(&args),
            Err(creational_core::CreationError::ValidationFailed { field: "cpu", .. })
        ));
    }

    #[test]
    fn test_profile_conflicts_with_fields() {
        assert!(Args::try_parse_from(["creational", "build", "-p", "gaming", "--cpu", "x"]).is_err());
    }

    #[test]
    fn test_clone_fills_placeholders() {
        let Some(Command::Clone(args)) =
            parse(&["creational", "clone", "welcomeemail", "--set", "Name=Angelo"]).command
        else {
            panic!("expected clone command");
        };
        let email = clone_template(&args).unwrap();
        assert!(email.body.starts_with("Hi Angelo,"));
    }

    #[test]
    fn test_clone_unknown_key_fails() {
        let Some(Command::Clone(args)) = parse(&["creational", "clone", "unknown"]).command else {
            panic!("expected clone command");
        };
        assert!(clone_template(&args).is_err());
    }

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(
            parse_placeholder("Name=Seyi").unwrap(),
            ("Name".to_string(), "Seyi".to_string())
        );
        assert!(parse_placeholder("Name").is_err());
        assert!(parse_placeholder("=x").is_err());
    }

    #[test]
    fn test_explain_parses_pattern() {
        let Some(Command::Explain(args)) = parse(&["creational", "explain", "abstract-factory"]).command
        else {
            panic!("expected explain command");
        };
        assert_eq!(args.pattern, Pattern::AbstractFactory);
    }
}
