//! Implementation of the `herald send` command.
//!
//! Responsibility: resolve the delivery channel, wire a
//! `NotificationService`, and invoke one send. No business logic lives
//! here.
//!
//! stdout discipline: the two notification lines are the command's entire
//! stdout. Diagnostics go through tracing (stderr) so the output stays
//! pipeable.

use std::str::FromStr;

use tracing::{debug, info, instrument};

use herald_adapters::{ConsoleLogger, EmailNotifier, SmsNotifier};
use herald_core::{
    application::{NotificationService, ports::Notifier},
    domain::Channel,
};

use crate::{
    cli::{SendArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `herald send` command.
///
/// Dispatch sequence:
/// 1. Resolve the channel (flag → config default → email)
/// 2. Wire adapters into a `NotificationService`
/// 3. Send the notification
#[instrument(skip_all, fields(recipient = %args.recipient))]
pub fn execute(
    args: SendArgs,
    _global: GlobalArgs,
    config: AppConfig,
    _output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve channel
    let channel = resolve_channel(&args, &config)?;
    debug!(channel = %channel, "Channel resolved");

    // 2. Wire adapters and build the service
    let notifier = build_notifier(channel);
    let logger = Box::new(ConsoleLogger::new());
    let service = NotificationService::new(notifier, logger);

    // 3. Send
    info!(channel = %channel, "Dispatch started");
    service.send_notification(&args.recipient, &args.content);

    Ok(())
}

/// Pick the delivery channel: explicit flag first, then the configured
/// default, then email.
fn resolve_channel(args: &SendArgs, config: &AppConfig) -> CliResult<Channel> {
    if let Some(flag) = args.channel {
        return Ok(flag.into());
    }
    match config.defaults.channel.as_deref() {
        Some(name) => Ok(Channel::from_str(name)?),
        None => Ok(Channel::Email),
    }
}

/// Construct the notifier adapter for a channel.
///
/// This is the single point where a channel value becomes a concrete
/// adapter; the service itself never learns which variant it holds.
fn build_notifier(channel: Channel) -> Box<dyn Notifier> {
    match channel {
        Channel::Email => Box::new(EmailNotifier::new()),
        Channel::Sms => Box::new(SmsNotifier::new()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ChannelArg;
    use crate::error::CliError;

    fn send_args(channel: Option<ChannelArg>) -> SendArgs {
        SendArgs {
            recipient: "John".into(),
            content: "hello".into(),
            channel,
        }
    }

    fn config_with_channel(name: Option<&str>) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.defaults.channel = name.map(str::to_owned);
        cfg
    }

    #[test]
    fn flag_wins_over_config() {
        let args = send_args(Some(ChannelArg::Sms));
        let cfg = config_with_channel(Some("email"));
        assert_eq!(resolve_channel(&args, &cfg).unwrap(), Channel::Sms);
    }

    #[test]
    fn config_default_used_without_flag() {
        let args = send_args(None);
        let cfg = config_with_channel(Some("sms"));
        assert_eq!(resolve_channel(&args, &cfg).unwrap(), Channel::Sms);
    }

    #[test]
    fn email_is_the_fallback() {
        let args = send_args(None);
        let cfg = config_with_channel(None);
        assert_eq!(resolve_channel(&args, &cfg).unwrap(), Channel::Email);
    }

    #[test]
    fn unknown_config_channel_is_user_error() {
        let args = send_args(None);
        let cfg = config_with_channel(Some("pigeon"));
        match resolve_channel(&args, &cfg) {
            Err(CliError::UnknownChannel(err)) => assert_eq!(err.name, "pigeon"),
            other => panic!("expected UnknownChannel, got {other:?}"),
        }
    }
}
