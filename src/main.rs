use clap::Parser;
use sendgrid_unsubscribe::core::report::{
    format_malformed_warning, format_removal_notice, format_summary, render_json,
};
use sendgrid_unsubscribe::utils::{logger, validation::Validate};
use sendgrid_unsubscribe::{
    stringify_email_errors, CliConfig, LocalStorage, RunReport, SendGridClient,
    UnsubscribeEngine, UnsubscribeError,
};

fn fail(e: &UnsubscribeError) -> ! {
    tracing::error!(
        "❌ Unsubscribe run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn print_json<T: serde::Serialize>(value: &T) {
    match render_json(value) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => fail(&e),
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting sendgrid-unsubscribe");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let client = match SendGridClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    let engine = UnsubscribeEngine::new(LocalStorage::default(), client);

    let split = match engine.prepare(&config.users_list).await {
        Ok(split) => split,
        Err(e) => fail(&e),
    };

    if !config.json {
        if !split.malformed.is_empty() {
            println!("{}", format_malformed_warning(&split.malformed));
        }
        println!("{}", format_removal_notice(split.valid.len()));
    }

    if config.dry_run {
        tracing::info!("🔍 Dry run: no removal requests sent");
        if config.json {
            print_json(&split);
        }
        return;
    }

    let result = match engine.remove(&split.valid).await {
        Ok(result) => result,
        Err(e) => fail(&e),
    };

    if config.json {
        let report = RunReport {
            malformed: split.malformed,
            result,
        };
        print_json(&report);
        return;
    }

    println!("{}", format_summary(&result));
    if result.has_failures() {
        println!("{}", stringify_email_errors(&result.failed));
    }
}
