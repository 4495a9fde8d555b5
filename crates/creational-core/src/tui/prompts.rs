//! Charm-style walkthrough menus using cliclack

use crate::builder::{ComputerBuilder, ComputerDirector, Profile, DEFAULT_GPU};
use crate::config::AppConfig;
use crate::explanation::{Pattern, PatternExplanation};
use crate::notifications::{
    select_factory, Environment, NotificationFamily, NotificationReceipt, NotificationType,
    Recipients,
};
use crate::payments::{select_creator, PaymentProvider, PaymentReceipt};
use crate::prototype::{default_registry, EmailBranding, EmailTemplate, PrototypeRegistry};
use crate::render;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Options for the interactive session
#[derive(Debug, Clone, Default)]
pub struct MenuArgs {
    /// Jump straight into one pattern's walkthrough
    pub start: Option<Pattern>,
}

/// Where to go after a walkthrough returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    MainMenu,
    Exit,
}

/// Follow-up actions offered after a payment or notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    Receipt,
    Breakdown,
    Explain,
    Again,
    MainMenu,
    Exit,
}

/// Run the interactive walkthrough
pub fn run(args: MenuArgs) -> Result<()> {
    cliclack::intro("Creational Design Patterns")?;

    let mut next = args.start;
    loop {
        let pattern = match next.take() {
            Some(pattern) => pattern,
            None => match select_pattern()? {
                Some(pattern) => pattern,
                None => break,
            },
        };

        let flow = match pattern {
            Pattern::Singleton => singleton_walkthrough()?,
            Pattern::FactoryMethod => payment_walkthrough()?,
            Pattern::AbstractFactory => notification_walkthrough()?,
            Pattern::Builder => builder_walkthrough()?,
            Pattern::Prototype => prototype_walkthrough()?,
        };

        if flow == Flow::Exit {
            break;
        }
    }

    cliclack::outro("Goodbye!")?;
    Ok(())
}

fn select_pattern() -> Result<Option<Pattern>> {
    let mut select = cliclack::select("Choose a pattern to explore");
    for pattern in Pattern::ALL {
        select = select.item(Some(pattern), pattern.display_name(), pattern_hint(pattern));
    }
    Ok(select.item(None, "Exit", "").interact()?)
}

fn pattern_hint(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Singleton => "application configuration",
        Pattern::FactoryMethod => "payment gateways",
        Pattern::AbstractFactory => "notification families",
        Pattern::Builder => "computer specifications",
        Pattern::Prototype => "email templates",
    }
}

/// Print the walkthrough text and offer to open the reference page
fn show_explanation(pattern: Pattern) -> Result<()> {
    let explanation = PatternExplanation::for_pattern(pattern)?;
    render::print_explanation(&explanation);

    let open_docs: bool = cliclack::confirm("Open the reference page in your browser?")
        .initial_value(false)
        .interact()?;

    if open_docs {
        match open::that(&explanation.docs_url) {
            Ok(()) => cliclack::log::info(format!("Opened {}", explanation.docs_url))?,
            Err(e) => cliclack::log::warning(format!(
                "Could not open a browser ({}). Visit {}",
                e, explanation.docs_url
            ))?,
        }
    }
    Ok(())
}

fn select_follow_up(again_label: &str) -> Result<FollowUp> {
    Ok(cliclack::select("Select an option")
        .item(FollowUp::Receipt, "Print receipt", "")
        .item(FollowUp::Breakdown, "Print detailed breakdown", "")
        .item(FollowUp::Explain, "Print pattern explanation", "")
        .item(FollowUp::Again, again_label, "")
        .item(FollowUp::MainMenu, "Back to main menu", "")
        .item(FollowUp::Exit, "Exit", "")
        .interact()?)
}

// Factory Method

fn payment_walkthrough() -> Result<Flow> {
    loop {
        let mut select = cliclack::select("Choose payment gateway");
        for provider in PaymentProvider::ALL {
            select = select.item(Some(provider), provider.display_name(), "");
        }
        let provider: Option<PaymentProvider> = select.item(None, "Back", "").interact()?;

        let Some(provider) = provider else {
            return Ok(Flow::MainMenu);
        };

        let creator = select_creator(provider);
        let amount = prompt_amount()?;

        let receipt = PaymentReceipt::issue(&creator, amount);
        cliclack::log::success(&receipt.confirmation)?;
        cliclack::log::success("Payment processed successfully!")?;

        loop {
            match select_follow_up("Process another payment")? {
                FollowUp::Receipt => {
                    cliclack::note("Payment receipt", receipt.lines().join("\n"))?;
                }
                FollowUp::Breakdown => {
                    let mut lines = receipt.breakdown();
                    lines.push(String::new());
                    lines.push(
                        "The creator picked the concrete processor; this menu never named it."
                            .to_string(),
                    );
                    cliclack::note("Payment breakdown", lines.join("\n"))?;
                }
                FollowUp::Explain => show_explanation(Pattern::FactoryMethod)?,
                FollowUp::Again => break,
                FollowUp::MainMenu => return Ok(Flow::MainMenu),
                FollowUp::Exit => return Ok(Flow::Exit),
            }
        }
    }
}

/// Parse a payment amount, accepting only values greater than zero
fn parse_amount(input: &str) -> std::result::Result<Decimal, &'static str> {
    match Decimal::from_str(input.trim()) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        Ok(_) => Err("Amount must be greater than zero."),
        Err(_) => Err("Enter a number, e.g. 1500 or 99.99"),
    }
}

fn prompt_amount() -> Result<Decimal> {
    let input: String = cliclack::input("Enter amount")
        .placeholder("1500")
        .validate(|input: &String| parse_amount(input).map(|_| ()))
        .interact()?;

    parse_amount(&input).map_err(anyhow::Error::msg)
}

// Abstract Factory

fn notification_walkthrough() -> Result<Flow> {
    let recipients = Recipients::default();

    loop {
        let mut select = cliclack::select("Select environment");
        for environment in Environment::ALL {
            select = select.item(Some(environment), environment.display_name(), environment.tag());
        }
        let environment: Option<Environment> = select.item(None, "Back", "").interact()?;

        let Some(environment) = environment else {
            return Ok(Flow::MainMenu);
        };

        let factory = select_factory(environment);
        let family = NotificationFamily::from_factory(factory.as_ref());
        cliclack::log::info(format!(
            "{} mode selected",
            environment.display_name().to_uppercase()
        ))?;

        'kinds: loop {
            let mut select = cliclack::select("Choose a notification type");
            for kind in NotificationType::ALL {
                let label = match kind {
                    NotificationType::All => "Send all".to_string(),
                    other => format!("{} notification", other.display_name()),
                };
                select = select.item(Some(kind), label, "");
            }
            let kind: Option<NotificationType> =
                select.item(None, "Back to environments", "").interact()?;

            let Some(kind) = kind else {
                break 'kinds;
            };

            let receipt = NotificationReceipt::issue(&family, kind, &recipients);
            for line in &receipt.confirmations {
                cliclack::log::success(line)?;
            }
            cliclack::log::info("Notifications sent successfully!")?;

            loop {
                match select_follow_up("Send another notification")? {
                    FollowUp::Receipt => {
                        cliclack::note("Notification receipt", receipt.lines().join("\n"))?;
                    }
                    FollowUp::Breakdown => {
                        let mut lines = receipt.breakdown();
                        lines.push(String::new());
                        lines.push(
                            "All three services came from one factory, so they share an environment."
                                .to_string(),
                        );
                        cliclack::note("Notification breakdown", lines.join("\n"))?;
                    }
                    FollowUp::Explain => show_explanation(Pattern::AbstractFactory)?,
                    FollowUp::Again => continue 'kinds,
                    FollowUp::MainMenu => return Ok(Flow::MainMenu),
                    FollowUp::Exit => return Ok(Flow::Exit),
                }
            }
        }
    }
}

// Builder

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderAction {
    Profile(Profile),
    Custom,
    Rebuild,
    Explain,
    Back,
}

fn builder_walkthrough() -> Result<Flow> {
    let mut builder = ComputerBuilder::new();

    loop {
        let mut select = cliclack::select("What should we build?");
        for profile in Profile::ALL {
            select = select.item(BuilderAction::Profile(profile), profile.display_name(), "director");
        }
        let action: BuilderAction = select
            .item(BuilderAction::Custom, "Custom build", "step by step")
            .item(
                BuilderAction::Rebuild,
                "Build again from current builder state",
                "fields are kept after build",
            )
            .item(BuilderAction::Explain, "Print pattern explanation", "")
            .item(BuilderAction::Back, "Back to main menu", "")
            .interact()?;

        let result = match action {
            BuilderAction::Profile(profile) => ComputerDirector::new(&mut builder).build(profile),
            BuilderAction::Custom => {
                configure_custom(&mut builder)?;
                builder.build()
            }
            BuilderAction::Rebuild => builder.build(),
            BuilderAction::Explain => {
                show_explanation(Pattern::Builder)?;
                continue;
            }
            BuilderAction::Back => return Ok(Flow::MainMenu),
        };

        match result {
            Ok(computer) => cliclack::note("Computer built", computer.to_string())?,
            Err(e) => cliclack::log::error(format!("Build failed: {}", e))?,
        }
    }
}

fn prompt_gb(prompt: &str, placeholder: &str) -> Result<u32> {
    let input: String = cliclack::input(prompt)
        .placeholder(placeholder)
        .validate(|input: &String| {
            input
                .trim()
                .parse::<u32>()
                .map(|_| ())
                .map_err(|_| "Enter a whole number of gigabytes")
        })
        .interact()?;

    input
        .trim()
        .parse()
        .with_context(|| format!("Invalid size: {}", input))
}

/// Walk the builder through reset and every setter; blank CPU or zero sizes
/// are allowed through so that `build` can reject them
fn configure_custom(builder: &mut ComputerBuilder) -> Result<()> {
    let cpu: String = cliclack::input("CPU")
        .placeholder("Intel i9")
        .required(false)
        .interact()?;
    let ram = prompt_gb("RAM (GB)", "64")?;
    let storage = prompt_gb("Storage (GB)", "2000")?;
    let gpu: String = cliclack::input("GPU")
        .placeholder(DEFAULT_GPU)
        .required(false)
        .interact()?;
    let wifi: bool = cliclack::confirm("Enable WiFi?").initial_value(true).interact()?;
    let rgb: bool = cliclack::confirm("Enable RGB?").initial_value(false).interact()?;

    builder.reset().set_cpu(cpu).set_ram(ram).set_storage(storage);
    if !gpu.trim().is_empty() {
        builder.set_gpu(gpu);
    }
    if wifi {
        builder.enable_wifi();
    }
    if rgb {
        builder.enable_rgb();
    }
    Ok(())
}

// Prototype

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrototypeAction {
    List,
    Clone,
    Proof,
    Register,
    Explain,
    Back,
}

fn prototype_walkthrough() -> Result<Flow> {
    let registry = default_registry()?;

    loop {
        let action: PrototypeAction = cliclack::select("Email template registry")
            .item(PrototypeAction::List, "List registered templates", "")
            .item(PrototypeAction::Clone, "Clone and personalize a template", "")
            .item(PrototypeAction::Proof, "Deep copy proof", "two clones, one edited")
            .item(PrototypeAction::Register, "Register a custom template", "")
            .item(PrototypeAction::Explain, "Print pattern explanation", "")
            .item(PrototypeAction::Back, "Back to main menu", "")
            .interact()?;

        match action {
            PrototypeAction::List => {
                cliclack::note("Registered templates", registry.keys().join("\n"))?;
            }
            PrototypeAction::Clone => clone_and_personalize(&registry)?,
            PrototypeAction::Proof => deep_copy_proof(&registry)?,
            PrototypeAction::Register => register_custom(&registry)?,
            PrototypeAction::Explain => show_explanation(Pattern::Prototype)?,
            PrototypeAction::Back => return Ok(Flow::MainMenu),
        }
    }
}

fn select_template_key(registry: &PrototypeRegistry) -> Result<String> {
    let mut select = cliclack::select("Select a template");
    for key in registry.keys() {
        select = select.item(key.clone(), key, "");
    }
    Ok(select.interact()?)
}

fn clone_and_personalize(registry: &PrototypeRegistry) -> Result<()> {
    let key = select_template_key(registry)?;
    let mut email = registry.create_clone(&key)?;

    let tokens: Vec<String> = email.placeholders().into_iter().map(str::to_string).collect();
    for token in tokens {
        let value: String = cliclack::input(format!("Value for {{{{{}}}}}", token))
            .placeholder(&token)
            .interact()?;
        email.fill_placeholder(&token, &value);
    }

    cliclack::note(format!("Clone of {}", key), email.to_string())?;
    Ok(())
}

fn deep_copy_proof(registry: &PrototypeRegistry) -> Result<()> {
    let key = select_template_key(registry)?;

    let mut first = registry.create_clone(&key)?;
    first.fill_placeholder("Name", "Angelo");
    let mut second = registry.create_clone(&key)?;
    second.fill_placeholder("Name", "Seyi");

    first.branding.footer = "Angelo footer test".to_string();
    first.tags.push("vip".to_string());

    let baseline = registry.create_clone(&key)?;
    let lines = [
        format!("Angelo footer: {}", first.branding.footer),
        format!("Seyi footer: {}", second.branding.footer),
        format!("Baseline footer: {}", baseline.branding.footer),
        format!("Angelo tags: {}", first.tags.join(", ")),
        format!("Seyi tags: {}", second.tags.join(", ")),
        format!("Baseline tags: {}", baseline.tags.join(", ")),
    ];
    cliclack::note("Deep copy proof", lines.join("\n"))?;
    Ok(())
}

fn register_custom(registry: &PrototypeRegistry) -> Result<()> {
    let key: String = cliclack::input("Registry key")
        .placeholder("Newsletter")
        .required(false)
        .interact()?;
    let subject: String = cliclack::input("Subject").interact()?;
    let body: String = cliclack::input("Body (use {{Name}} for placeholders)").interact()?;
    let company_name: String = cliclack::input("Company name")
        .default_input("Schedula Inc")
        .interact()?;
    let tags: String = cliclack::input("Tags (comma-separated)")
        .required(false)
        .interact()?;

    let (key, template) = custom_template(&key, subject, body, company_name, &tags);
    let replacing = registry.contains(&key);
    match registry.register(&key, template) {
        Ok(()) if replacing => cliclack::log::warning(format!("Replaced existing template '{}'", key))?,
        Ok(()) => cliclack::log::success(format!("Registered '{}'", key))?,
        Err(e) => cliclack::log::error(e.to_string())?,
    }
    Ok(())
}

/// Assemble a user-defined template; the trimmed key doubles as its name
fn custom_template(
    raw_key: &str,
    subject: String,
    body: String,
    company_name: String,
    tags: &str,
) -> (String, EmailTemplate) {
    let key = raw_key.trim().to_string();
    let template = EmailTemplate {
        name: key.clone(),
        subject,
        body,
        branding: EmailBranding {
            company_name,
            footer: String::new(),
        },
        tags: tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    };
    (key, template)
}

// Singleton

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingletonAction {
    Show,
    Initialize,
    Identity,
    Explain,
    Back,
}

fn singleton_walkthrough() -> Result<Flow> {
    loop {
        let action: SingletonAction = cliclack::select("Application configuration")
            .item(SingletonAction::Show, "Show current configuration", "")
            .item(SingletonAction::Initialize, "Initialize configuration", "")
            .item(SingletonAction::Identity, "Prove single instance", "")
            .item(SingletonAction::Explain, "Print pattern explanation", "")
            .item(SingletonAction::Back, "Back to main menu", "")
            .interact()?;

        match action {
            SingletonAction::Show => {
                let settings = AppConfig::instance().snapshot();
                cliclack::note(
                    "Configuration",
                    format!(
                        "Environment: {}\nBase URL: {}",
                        settings.environment_name, settings.base_url
                    ),
                )?;
            }
            SingletonAction::Initialize => {
                let current = AppConfig::instance().snapshot();
                let environment: String = cliclack::input("Environment name")
                    .default_input(&current.environment_name)
                    .interact()?;
                let base_url: String = cliclack::input("Base URL")
                    .default_input(&current.base_url)
                    .interact()?;
                AppConfig::instance().initialize(environment, base_url);
                cliclack::log::success("Configuration updated")?;
            }
            SingletonAction::Identity => {
                let first = AppConfig::instance();
                let second = AppConfig::instance();
                cliclack::note(
                    "Single instance",
                    format!(
                        "First env: {}, base URL: {}\nSecond env: {}, base URL: {}\nSame instance? {}",
                        first.environment_name(),
                        first.base_url(),
                        second.environment_name(),
                        second.base_url(),
                        first.is_same_instance(second)
                    ),
                )?;
            }
            SingletonAction::Explain => show_explanation(Pattern::Singleton)?,
            SingletonAction::Back => return Ok(Flow::MainMenu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive() {
        assert_eq!(parse_amount(" 1500 ").unwrap(), Decimal::from(1500));
        assert_eq!(parse_amount("99.99").unwrap(), Decimal::from_str("99.99").unwrap());
    }

    #[test]
    fn test_parse_amount_rejects_zero_and_negative() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-10").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert_eq!(parse_amount("ten"), Err("Enter a number, e.g. 1500 or 99.99"));
    }

    #[test]
    fn test_custom_template_trims_key_once() {
        let (key, template) = custom_template(
            " News ",
            "Weekly".into(),
            "Hi {{Name}}".into(),
            "Acme".into(),
            " promo, , weekly ",
        );
        assert_eq!(key, "News");
        assert_eq!(template.name, "News");
        assert_eq!(template.tags, vec!["promo", "weekly"]);

        let registry = PrototypeRegistry::new();
        registry.register(&key, template).unwrap();
        assert_eq!(registry.keys(), vec!["News"]);
        assert_eq!(registry.create_clone("news").unwrap().name, "News");
    }
}
