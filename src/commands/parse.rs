use super::CommandStatus;
use crate::cli::ParseArgs;
use crate::config::Config;
use crate::parser::tags::parse_label_list;
use crate::parser::{ClassifierFactory, EventParser, FixedClassifier, TokenClassifier};
use anyhow::{Context, Result};
use chrono::Local;
use log::info;

pub fn handle_parse_command(args: &ParseArgs, config: &Config) -> Result<CommandStatus> {
    let sentence = args.sentence();
    let reference = args.now.unwrap_or_else(|| Local::now().naive_local());

    let classifier: Box<dyn TokenClassifier> = match &args.labels {
        Some(labels) => {
            let tags = parse_label_list(labels).context("Invalid --labels value")?;
            Box::new(FixedClassifier::new(tags))
        }
        None => ClassifierFactory::create_classifier(&config.classifier)?,
    };
    let parser = EventParser::new(classifier);

    match parser.parse(&sentence, reference) {
        Ok(mut outcome) => {
            if let Some(minutes) = default_duration(args, config) {
                outcome.event = outcome.event.with_default_duration(minutes)?;
            }
            info!("Parsed '{}' as '{}' at {}", sentence, outcome.event.title, outcome.event.start);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(CommandStatus::Success)
        }
        Err(failure) => {
            info!("Could not parse '{}': {}", sentence, failure);
            println!("{}", serde_json::to_string_pretty(&failure)?);
            Ok(CommandStatus::Failed)
        }
    }
}

/// Duration applied to events without an end: flag, then config
fn default_duration(args: &ParseArgs, config: &Config) -> Option<i64> {
    if args.no_default_duration {
        return None;
    }
    args.default_duration.or(config.calendar.default_duration_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(default_duration: Option<i64>, no_default_duration: bool) -> ParseArgs {
        ParseArgs {
            sentence: vec!["Йога".to_string()],
            labels: None,
            now: None,
            default_duration,
            no_default_duration,
        }
    }

    #[test]
    fn test_default_duration_precedence() {
        let config = Config::default();
        assert_eq!(default_duration(&args(None, false), &config), Some(60));
        assert_eq!(default_duration(&args(Some(30), false), &config), Some(30));
        assert_eq!(default_duration(&args(None, true), &config), None);
    }
}
